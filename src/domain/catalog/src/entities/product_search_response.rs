// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::SuggestionResult;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Result of a full search: matching documents plus spelling and phrase
/// suggestions for the same text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSearchResponse {
    pub took: u64,
    pub timed_out: bool,
    pub hits: ProductSearchHits,

    #[serde(flatten)]
    pub suggestions: SuggestionResult,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSearchHits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<ProductSearchTotal>,

    #[serde(default)]
    pub max_score: Option<f64>,

    pub hits: Vec<ProductSearchHit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSearchTotal {
    pub value: u64,
    pub relation: ProductSearchTotalRelation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductSearchTotalRelation {
    Eq,
    Gte,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSearchHit {
    #[serde(rename = "_index")]
    pub index: String,

    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "_score")]
    pub score: Option<f64>,

    #[serde(rename = "_source")]
    pub source: serde_json::Value,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
