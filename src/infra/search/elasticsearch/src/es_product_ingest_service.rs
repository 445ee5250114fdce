// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use chrono::SubsecRound;
use internal_error::ResultIntoInternal;
use random_strings::{AllowedSymbols, get_random_string};
use searchly_catalog::*;
use time_source::SystemTimeSource;
use validator::Validate;

use crate::{CatalogIndexConfig, IndexService, RefreshPolicy};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const PRODUCT_ID_LENGTH: usize = 10;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct ElasticsearchProductIngestService {
    index_service: Arc<dyn IndexService>,
    index_config: Arc<CatalogIndexConfig>,
    time_source: Arc<dyn SystemTimeSource>,
}

#[dill::component(pub)]
#[dill::interface(dyn ProductIngestService)]
impl ElasticsearchProductIngestService {
    pub fn new(
        index_service: Arc<dyn IndexService>,
        index_config: Arc<CatalogIndexConfig>,
        time_source: Arc<dyn SystemTimeSource>,
    ) -> Self {
        Self {
            index_service,
            index_config,
            time_source,
        }
    }

    fn new_product_id() -> ProductId {
        ProductId::new(get_random_string(
            None,
            PRODUCT_ID_LENGTH,
            &AllowedSymbols::LowercaseHex,
        ))
    }
}

#[async_trait::async_trait]
impl ProductIngestService for ElasticsearchProductIngestService {
    #[tracing::instrument(level = "info", skip_all, fields(product_name = %request.product_name))]
    async fn ingest(&self, request: NewProductRequest) -> Result<Product, ProductIngestError> {
        request.validate()?;

        // Stored timestamps carry whole seconds only
        let now = self.time_source.now().trunc_subsecs(0);

        let product = Product {
            product_id: Self::new_product_id(),
            product_name: request.product_name,
            price: request.price,
            category: request.category,
            created_at: now,
            updated_at: now,
        };

        let document = serde_json::to_value(&product).int_err()?;

        self.index_service
            .write_document(
                &self.index_config.index_name,
                product.product_id.as_str(),
                document,
                RefreshPolicy::Immediate,
            )
            .await
            .int_err()?;

        tracing::info!(product_id = %product.product_id, "Product stored");
        Ok(product)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
