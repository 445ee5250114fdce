// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod es_product_index_mappings;
mod es_product_query_builder;
mod es_response_normalizer;

pub use es_product_index_mappings::*;
pub use es_product_query_builder::*;
pub use es_response_normalizer::*;
