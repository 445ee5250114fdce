// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use internal_error::ResultIntoInternal;
use searchly_catalog::*;

use crate::{
    CatalogIndexConfig,
    ElasticsearchResponseNormalizer,
    IndexService,
    ProductQueryBuilder,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct ElasticsearchProductSearchService {
    index_service: Arc<dyn IndexService>,
    index_config: Arc<CatalogIndexConfig>,
}

#[dill::component(pub)]
#[dill::interface(dyn ProductSearchService)]
impl ElasticsearchProductSearchService {
    pub fn new(index_service: Arc<dyn IndexService>, index_config: Arc<CatalogIndexConfig>) -> Self {
        Self {
            index_service,
            index_config,
        }
    }
}

#[async_trait::async_trait]
impl ProductSearchService for ElasticsearchProductSearchService {
    #[tracing::instrument(level = "debug", skip_all, fields(%text))]
    async fn search(&self, text: &str) -> Result<ProductSearchResponse, ProductSearchError> {
        let query = ProductQueryBuilder::build_search_query(text);

        let raw = self
            .index_service
            .search(&self.index_config.index_name, query)
            .await
            .int_err()?;

        let response = ElasticsearchResponseNormalizer::normalize_search(raw)?;

        tracing::debug!(
            hits = response.hits.hits.len(),
            took_ms = response.took,
            "Search completed"
        );
        Ok(response)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%prefix))]
    async fn live_suggest(&self, prefix: &str) -> Result<SuggestionResult, ProductSearchError> {
        let query = ProductQueryBuilder::build_live_suggest_query(prefix);

        let raw = self
            .index_service
            .suggest(&self.index_config.index_name, query)
            .await
            .int_err()?;

        Ok(ElasticsearchResponseNormalizer::normalize_suggestions(raw)?)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
