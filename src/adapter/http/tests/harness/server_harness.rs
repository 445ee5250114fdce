// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use dill::{Catalog, CatalogBuilder};
use searchly_catalog::{ProductIngestService, SearchSchemaProvisioner};
use searchly_search_elasticsearch::testing::InMemoryIndexService;
use searchly_search_elasticsearch::*;
use time_source::SystemTimeSourceDefault;

use super::TestAPIServer;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Runs the real router and services on top of an in-memory index
pub struct ServerHarness {
    pub api_server: TestAPIServer,
    pub index_service: Arc<InMemoryIndexService>,
    catalog: Catalog,
}

impl ServerHarness {
    pub async fn new() -> Self {
        let catalog = {
            let mut b = CatalogBuilder::new();
            b.add_value(InMemoryIndexService::new())
                .bind::<dyn IndexService, InMemoryIndexService>()
                .add_value(CatalogIndexConfig::default())
                .add::<SystemTimeSourceDefault>()
                .add::<ElasticsearchSchemaProvisioner>()
                .add::<ElasticsearchProductSearchService>()
                .add::<ElasticsearchProductIngestService>();
            b.build()
        };

        catalog
            .get_one::<dyn SearchSchemaProvisioner>()
            .unwrap()
            .ensure_schema()
            .await
            .unwrap();

        let index_service = catalog.get_one::<InMemoryIndexService>().unwrap();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let api_server = TestAPIServer::new(catalog.clone(), listener);

        Self {
            api_server,
            index_service,
            catalog,
        }
    }

    pub fn ingest_service(&self) -> Arc<dyn ProductIngestService> {
        self.catalog.get_one().unwrap()
    }

    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}{path}", self.api_server.local_addr())
    }

    pub fn ws_url(&self, path: &str) -> String {
        format!("ws://{}{path}", self.api_server.local_addr())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
