// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Suggestions keyed by the name of the suggester that produced them.
///
/// Keys are the suggester names used when the query was compiled (e.g.
/// `product_name_suggestion`). Entries keep the order reported by the index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub suggest: BTreeMap<String, Vec<SuggestionEntry>>,
}

impl SuggestionResult {
    pub fn entries(&self, suggester: &str) -> &[SuggestionEntry] {
        self.suggest.get(suggester).map_or(&[], Vec::as_slice)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// One analyzed token (or span) of the input text with its candidates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionEntry {
    pub text: String,
    pub offset: u32,
    pub length: u32,
    pub options: Vec<SuggestionOption>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collation: Option<Collation>,

    /// Any additional properties reported by the index
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionOption {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freq: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,

    /// Text with the corrected terms wrapped into highlight tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collate_match: Option<bool>,

    /// Identifier of the document a completion option came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,

    /// Stored document a completion option came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<serde_json::Value>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SuggestionOption {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            freq: None,
            score: None,
            length: None,
            highlighted: None,
            collate_match: None,
            document_id: None,
            source: None,
            extra: serde_json::Map::new(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collation {
    pub query: serde_json::Value,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
