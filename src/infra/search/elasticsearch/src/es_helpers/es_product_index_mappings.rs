// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use searchly_catalog::fields;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const FIELD_SUFFIX_COMPLETION: &str = "completion";
pub const FIELD_SUFFIX_PHRASE: &str = "phrase";

pub const ANALYZER_TRIGRAM: &str = "trigram";
pub const ANALYZER_REVERSE: &str = "reverse";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct ProductIndexMappings;

impl ProductIndexMappings {
    /// Full body of the index creation request: settings and mappings
    pub fn build_index_definition() -> serde_json::Value {
        serde_json::json!({
            "settings": {
                "index": {
                    "number_of_shards": 1,
                    "analysis": Self::build_analysis_settings_json(),
                }
            },
            "mappings": Self::build_mappings_json(),
        })
    }

    pub fn build_analysis_settings_json() -> serde_json::Value {
        serde_json::json!({
            "analyzer": {
                ANALYZER_TRIGRAM: {
                    "type": "custom",
                    "tokenizer": "standard",
                    "filter": ["lowercase", "shingle"],
                },
                ANALYZER_REVERSE: {
                    "type": "custom",
                    "tokenizer": "standard",
                    "filter": ["lowercase", "reverse"],
                },
            },
            "filter": {
                "shingle": {
                    "type": "shingle",
                    "min_shingle_size": 2,
                    "max_shingle_size": 3,
                },
            },
        })
    }

    pub fn build_mappings_json() -> serde_json::Value {
        serde_json::json!({
            "properties": {
                (fields::PRODUCT_ID): { "type": "keyword" },
                (fields::PRODUCT_NAME): Self::suggestible_text_field(),
                (fields::PRICE): { "type": "float" },
                (fields::CATEGORY): Self::suggestible_text_field(),
                (fields::CREATED_AT): { "type": "date" },
                (fields::UPDATED_AT): { "type": "date" },
            }
        })
    }

    /// Text field with a completion sub-field for typeahead and a shingled
    /// sub-field for phrase suggestions
    fn suggestible_text_field() -> serde_json::Value {
        serde_json::json!({
            "type": "text",
            "fields": {
                FIELD_SUFFIX_COMPLETION: {
                    "type": "completion",
                    "analyzer": "simple",
                    "search_analyzer": "standard",
                    "preserve_separators": true,
                    "preserve_position_increments": true,
                },
                FIELD_SUFFIX_PHRASE: {
                    "type": "text",
                    "analyzer": ANALYZER_TRIGRAM,
                    "term_vector": "yes",
                },
            }
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
