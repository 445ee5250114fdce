// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::BTreeMap;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, serde::Deserialize)]
pub struct SuggestResponse {
    pub suggest: Option<BTreeMap<String, Vec<SuggestEntryResponse>>>,
}

#[derive(Debug, serde::Deserialize)]
pub struct SuggestEntryResponse {
    pub text: String,
    pub offset: u32,
    pub length: u32,
    pub options: Vec<SuggestOptionResponse>,

    #[serde(default)]
    pub collation: Option<SuggestCollationResponse>,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
pub struct SuggestCollationResponse {
    pub query: serde_json::Value,
}

/// Union of term, phrase and completion suggester options
#[derive(Debug, serde::Deserialize)]
pub struct SuggestOptionResponse {
    pub text: String,

    #[serde(default)]
    pub freq: Option<u64>,

    #[serde(default)]
    pub score: Option<f64>,

    #[serde(rename = "_score", default)]
    pub doc_score: Option<f64>,

    #[serde(default)]
    pub length: Option<u32>,

    #[serde(default)]
    pub highlighted: Option<String>,

    #[serde(default)]
    pub collate_match: Option<bool>,

    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    #[serde(rename = "_index", default)]
    pub index: Option<String>,

    #[serde(rename = "_source", default)]
    pub source: Option<serde_json::Value>,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
