// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

pub(crate) mod es_client;
pub mod es_helpers;

mod es_client_config;
mod es_index_service;
mod es_product_ingest_service;
mod es_product_search_service;
mod es_schema_provisioner;
mod index_service;

#[cfg(any(feature = "testing", test))]
pub mod testing;

pub use es_client_config::*;
pub use es_helpers::{ElasticsearchResponseNormalizer, ProductIndexMappings, ProductQueryBuilder};
pub use es_index_service::*;
pub use es_product_ingest_service::*;
pub use es_product_search_service::*;
pub use es_schema_provisioner::*;
pub use index_service::*;
