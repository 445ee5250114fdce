// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use internal_error::{InternalError, ResultIntoInternal};

use crate::es_client::ElasticsearchClient;
use crate::{ElasticsearchClientConfig, IndexService, IndexServiceError, RefreshPolicy};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// [`IndexService`] talking to an Elasticsearch cluster over its REST API.
///
/// The underlying HTTP client is built on first use and shared by all callers.
pub struct ElasticsearchIndexService {
    config: Arc<ElasticsearchClientConfig>,
    client: tokio::sync::OnceCell<ElasticsearchClient>,
}

#[dill::component(pub)]
#[dill::scope(dill::Singleton)]
#[dill::interface(dyn IndexService)]
impl ElasticsearchIndexService {
    pub fn new(config: Arc<ElasticsearchClientConfig>) -> Self {
        Self {
            config,
            client: tokio::sync::OnceCell::new(),
        }
    }

    async fn es_client(&self) -> Result<&ElasticsearchClient, InternalError> {
        let client = self
            .client
            .get_or_try_init(async || ElasticsearchClient::init(&self.config))
            .await
            .int_err()?;
        Ok(client)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl IndexService for ElasticsearchIndexService {
    #[tracing::instrument(level = "debug", skip_all, fields(url = %self.config.url))]
    async fn ping(&self) -> Result<(), IndexServiceError> {
        let client = self.es_client().await?;
        client.ping().await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index))]
    async fn index_exists(&self, index: &str) -> Result<bool, IndexServiceError> {
        let client = self.es_client().await?;
        client.index_exists(index).await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index))]
    async fn create_index(
        &self,
        index: &str,
        definition: serde_json::Value,
    ) -> Result<(), IndexServiceError> {
        let client = self.es_client().await?;
        client.create_index(index, &definition).await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index))]
    async fn search(
        &self,
        index: &str,
        query: serde_json::Value,
    ) -> Result<serde_json::Value, IndexServiceError> {
        let client = self.es_client().await?;
        client.search(index, &query).await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index))]
    async fn suggest(
        &self,
        index: &str,
        query: serde_json::Value,
    ) -> Result<serde_json::Value, IndexServiceError> {
        let client = self.es_client().await?;
        client.search(index, &query).await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index, %id, ?refresh))]
    async fn write_document(
        &self,
        index: &str,
        id: &str,
        document: serde_json::Value,
        refresh: RefreshPolicy,
    ) -> Result<(), IndexServiceError> {
        let client = self.es_client().await?;
        client.index_document(index, id, &document, refresh).await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
