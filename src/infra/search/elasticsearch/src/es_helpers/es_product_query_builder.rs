// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use searchly_catalog::fields;

use super::{FIELD_SUFFIX_COMPLETION, FIELD_SUFFIX_PHRASE};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const PRODUCT_NAME_SUGGESTER: &str = "product_name_suggestion";
pub const CATEGORY_SUGGESTER: &str = "category_suggestion";

const SUGGESTIONS_SIZE: u32 = 5;
const HIGHLIGHT_PRE_TAG: &str = "<em>";
const HIGHLIGHT_POST_TAG: &str = "</em>";

/// Text fields paired with the name of the suggester that runs over them
const SUGGESTED_FIELDS: [(&str, &str); 2] = [
    (fields::PRODUCT_NAME, PRODUCT_NAME_SUGGESTER),
    (fields::CATEGORY, CATEGORY_SUGGESTER),
];

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Builds index requests out of raw user text.
///
/// Text is embedded verbatim as a JSON string value, so no input can change
/// the structure of the resulting request. Empty text is passed through as is.
pub struct ProductQueryBuilder;

impl ProductQueryBuilder {
    /// Full search: documents matching the text in either field, plus term and
    /// phrase suggestions per field
    pub fn build_search_query(text: &str) -> serde_json::Value {
        let should: Vec<_> = SUGGESTED_FIELDS
            .iter()
            .map(|(field, _)| serde_json::json!({ "match": { (*field): text } }))
            .collect();

        let mut suggest = serde_json::Map::new();
        for (field, suggester) in SUGGESTED_FIELDS {
            suggest.insert(
                suggester.to_string(),
                Self::term_and_phrase_suggester(field, text),
            );
        }

        serde_json::json!({
            "query": {
                "bool": {
                    "should": should,
                }
            },
            "suggest": suggest,
        })
    }

    /// Typeahead: fuzzy completion suggestions per field, no document query
    pub fn build_live_suggest_query(prefix: &str) -> serde_json::Value {
        let mut suggest = serde_json::Map::new();
        for (field, suggester) in SUGGESTED_FIELDS {
            suggest.insert(
                suggester.to_string(),
                serde_json::json!({
                    "prefix": prefix,
                    "completion": {
                        "field": format!("{field}.{FIELD_SUFFIX_COMPLETION}"),
                        "size": SUGGESTIONS_SIZE,
                        "fuzzy": {
                            "fuzziness": "AUTO",
                        },
                    },
                }),
            );
        }

        serde_json::json!({ "suggest": suggest })
    }

    fn term_and_phrase_suggester(field: &str, text: &str) -> serde_json::Value {
        let phrase_field = format!("{field}.{FIELD_SUFFIX_PHRASE}");

        serde_json::json!({
            "text": text,
            "term": {
                "field": field,
            },
            "phrase": {
                "field": phrase_field,
                "size": SUGGESTIONS_SIZE,
                "gram_size": 1,
                "direct_generator": [{
                    "field": phrase_field,
                    "suggest_mode": "always",
                    "min_word_length": 1,
                }],
                "highlight": {
                    "pre_tag": HIGHLIGHT_PRE_TAG,
                    "post_tag": HIGHLIGHT_POST_TAG,
                },
            },
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
