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
use searchly_catalog::{EnsureSchemaOutcome, ProvisionError, SearchSchemaProvisioner};

use crate::{CatalogIndexConfig, IndexService, ProductIndexMappings};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct ElasticsearchSchemaProvisioner {
    index_service: Arc<dyn IndexService>,
    index_config: Arc<CatalogIndexConfig>,
}

#[dill::component(pub)]
#[dill::interface(dyn SearchSchemaProvisioner)]
impl ElasticsearchSchemaProvisioner {
    pub fn new(index_service: Arc<dyn IndexService>, index_config: Arc<CatalogIndexConfig>) -> Self {
        Self {
            index_service,
            index_config,
        }
    }
}

#[async_trait::async_trait]
impl SearchSchemaProvisioner for ElasticsearchSchemaProvisioner {
    #[tracing::instrument(
        level = "info",
        name = "ElasticsearchSchemaProvisioner::ensure_schema",
        skip_all,
        fields(index = %self.index_config.index_name)
    )]
    async fn ensure_schema(&self) -> Result<EnsureSchemaOutcome, ProvisionError> {
        let index = &self.index_config.index_name;

        if self.index_service.index_exists(index).await.int_err()? {
            tracing::info!("Index already exists, leaving it as is");
            return Ok(EnsureSchemaOutcome::AlreadyExists);
        }

        self.index_service
            .create_index(index, ProductIndexMappings::build_index_definition())
            .await
            .int_err()?;

        tracing::info!("Index created");
        Ok(EnsureSchemaOutcome::Created)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
