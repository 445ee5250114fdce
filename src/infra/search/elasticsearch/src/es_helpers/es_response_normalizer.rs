// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::BTreeMap;

use searchly_catalog::*;

use crate::es_client::{
    SearchHitsTotalRelation,
    SearchResponse,
    SuggestEntryResponse,
    SuggestOptionResponse,
    SuggestResponse,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Converts raw index responses into the catalog's response model.
///
/// Suggesters, entries and options keep the order reported by the index.
pub struct ElasticsearchResponseNormalizer;

impl ElasticsearchResponseNormalizer {
    pub fn normalize_suggestions(raw: serde_json::Value) -> Result<SuggestionResult, DecodeError> {
        let response: SuggestResponse =
            serde_json::from_value(raw).map_err(|e| DecodeError::new(e.to_string()))?;

        let suggest = response
            .suggest
            .ok_or_else(|| DecodeError::new("response has no 'suggest' section"))?;

        Ok(Self::convert_suggest(suggest))
    }

    pub fn normalize_search(raw: serde_json::Value) -> Result<ProductSearchResponse, DecodeError> {
        let response: SearchResponse =
            serde_json::from_value(raw).map_err(|e| DecodeError::new(e.to_string()))?;

        let suggest = response
            .suggest
            .ok_or_else(|| DecodeError::new("response has no 'suggest' section"))?;

        Ok(ProductSearchResponse {
            took: response.took,
            timed_out: response.timed_out,
            hits: ProductSearchHits {
                total: response.hits.total.map(|total| ProductSearchTotal {
                    value: total.value,
                    relation: match total.relation {
                        SearchHitsTotalRelation::Eq => ProductSearchTotalRelation::Eq,
                        SearchHitsTotalRelation::Gte => ProductSearchTotalRelation::Gte,
                    },
                }),
                max_score: response.hits.max_score,
                hits: response
                    .hits
                    .hits
                    .into_iter()
                    .map(|hit| ProductSearchHit {
                        index: hit.index,
                        id: hit.id,
                        score: hit.score,
                        source: hit.source,
                    })
                    .collect(),
            },
            suggestions: Self::convert_suggest(suggest),
        })
    }

    fn convert_suggest(suggest: BTreeMap<String, Vec<SuggestEntryResponse>>) -> SuggestionResult {
        SuggestionResult {
            suggest: suggest
                .into_iter()
                .map(|(suggester, entries)| {
                    (
                        suggester,
                        entries.into_iter().map(Self::convert_entry).collect(),
                    )
                })
                .collect(),
        }
    }

    fn convert_entry(entry: SuggestEntryResponse) -> SuggestionEntry {
        SuggestionEntry {
            text: entry.text,
            offset: entry.offset,
            length: entry.length,
            options: entry
                .options
                .into_iter()
                .map(Self::convert_option)
                .collect(),
            collation: entry.collation.map(|c| Collation { query: c.query }),
            extra: entry.other,
        }
    }

    fn convert_option(option: SuggestOptionResponse) -> SuggestionOption {
        let mut extra = option.other;
        if let Some(index) = option.index {
            extra.insert("_index".to_string(), serde_json::Value::String(index));
        }

        SuggestionOption {
            text: option.text,
            freq: option.freq,
            // Completion options report a document score, term and phrase ones a
            // suggestion score
            score: option.score.or(option.doc_score),
            length: option.length,
            highlighted: option.highlighted,
            collate_match: option.collate_match,
            document_id: option.id,
            source: option.source,
            extra,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
