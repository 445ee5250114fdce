// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::BTreeMap;
use std::sync::Mutex;

use internal_error::InternalError;

use crate::{IndexService, IndexServiceError, RefreshPolicy};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Process-local stand-in for the search engine.
///
/// Understands just enough of the request bodies produced by
/// [`crate::ProductQueryBuilder`] to answer them plausibly: `match` clauses
/// hit documents sharing at least one lowercase word with the text, completion
/// suggesters return documents whose field value starts with the prefix, and
/// term/phrase suggesters offer indexed words starting with the same letter.
#[derive(Default)]
pub struct InMemoryIndexService {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    indices: BTreeMap<String, IndexState>,
    unreachable: bool,
    calls: InMemoryIndexServiceCalls,
}

#[derive(Default)]
struct IndexState {
    definition: serde_json::Value,
    documents: Vec<(String, serde_json::Value)>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InMemoryIndexServiceCalls {
    pub ping: usize,
    pub index_exists: usize,
    pub create_index: usize,
    pub search: usize,
    pub suggest: usize,
    pub write_document: usize,
}

impl InMemoryIndexService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail as if the cluster went away
    pub fn set_unreachable(&self, unreachable: bool) {
        self.state.lock().unwrap().unreachable = unreachable;
    }

    pub fn calls(&self) -> InMemoryIndexServiceCalls {
        self.state.lock().unwrap().calls
    }

    pub fn index_definition(&self, index: &str) -> Option<serde_json::Value> {
        let state = self.state.lock().unwrap();
        state.indices.get(index).map(|i| i.definition.clone())
    }

    pub fn documents(&self, index: &str) -> Vec<(String, serde_json::Value)> {
        let state = self.state.lock().unwrap();
        state
            .indices
            .get(index)
            .map(|i| i.documents.clone())
            .unwrap_or_default()
    }

    fn with_state<R>(
        &self,
        count: impl FnOnce(&mut InMemoryIndexServiceCalls),
        f: impl FnOnce(&mut State) -> Result<R, IndexServiceError>,
    ) -> Result<R, IndexServiceError> {
        let mut state = self.state.lock().unwrap();
        count(&mut state.calls);

        if state.unreachable {
            return Err(InternalError::new("connection refused").into());
        }

        f(&mut state)
    }

    fn index_not_found(index: &str) -> IndexServiceError {
        IndexServiceError::UnexpectedStatus {
            status: 404,
            body: format!(r#"{{"error":{{"type":"index_not_found_exception","index":"{index}"}}}}"#),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl IndexService for InMemoryIndexService {
    async fn ping(&self) -> Result<(), IndexServiceError> {
        self.with_state(|c| c.ping += 1, |_| Ok(()))
    }

    async fn index_exists(&self, index: &str) -> Result<bool, IndexServiceError> {
        self.with_state(
            |c| c.index_exists += 1,
            |state| Ok(state.indices.contains_key(index)),
        )
    }

    async fn create_index(
        &self,
        index: &str,
        definition: serde_json::Value,
    ) -> Result<(), IndexServiceError> {
        self.with_state(
            |c| c.create_index += 1,
            |state| {
                if state.indices.contains_key(index) {
                    return Err(IndexServiceError::UnexpectedStatus {
                        status: 400,
                        body: String::from("resource_already_exists_exception"),
                    });
                }
                state.indices.insert(
                    index.to_string(),
                    IndexState {
                        definition,
                        documents: Vec::new(),
                    },
                );
                Ok(())
            },
        )
    }

    async fn search(
        &self,
        index: &str,
        query: serde_json::Value,
    ) -> Result<serde_json::Value, IndexServiceError> {
        self.with_state(
            |c| c.search += 1,
            |state| {
                let index_state = state
                    .indices
                    .get(index)
                    .ok_or_else(|| Self::index_not_found(index))?;
                Ok(search_response(index, index_state, &query))
            },
        )
    }

    async fn suggest(
        &self,
        index: &str,
        query: serde_json::Value,
    ) -> Result<serde_json::Value, IndexServiceError> {
        self.with_state(
            |c| c.suggest += 1,
            |state| {
                let index_state = state
                    .indices
                    .get(index)
                    .ok_or_else(|| Self::index_not_found(index))?;
                Ok(search_response(index, index_state, &query))
            },
        )
    }

    async fn write_document(
        &self,
        index: &str,
        id: &str,
        document: serde_json::Value,
        _refresh: RefreshPolicy,
    ) -> Result<(), IndexServiceError> {
        self.with_state(
            |c| c.write_document += 1,
            |state| {
                let index_state = state.indices.entry(index.to_string()).or_default();
                index_state.documents.retain(|(doc_id, _)| doc_id != id);
                index_state.documents.push((id.to_string(), document));
                Ok(())
            },
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn words(s: &str) -> Vec<String> {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn field_text<'a>(document: &'a serde_json::Value, field: &str) -> &'a str {
    document[field].as_str().unwrap_or_default()
}

fn search_response(
    index: &str,
    index_state: &IndexState,
    query: &serde_json::Value,
) -> serde_json::Value {
    let mut response = serde_json::Map::new();
    response.insert("took".into(), 1.into());
    response.insert("timed_out".into(), false.into());

    if let Some(should) = query["query"]["bool"]["should"].as_array() {
        let clauses: Vec<(&str, Vec<String>)> = should
            .iter()
            .filter_map(|clause| clause["match"].as_object())
            .flat_map(|m| m.iter())
            .map(|(field, text)| (field.as_str(), words(text.as_str().unwrap_or_default())))
            .collect();

        let mut hits: Vec<(usize, &String, &serde_json::Value)> = index_state
            .documents
            .iter()
            .filter_map(|(id, doc)| {
                let score: usize = clauses
                    .iter()
                    .map(|(field, query_words)| {
                        let doc_words = words(field_text(doc, field));
                        query_words.iter().filter(|w| doc_words.contains(w)).count()
                    })
                    .sum();
                (score > 0).then_some((score, id, doc))
            })
            .collect();
        hits.sort_by(|a, b| b.0.cmp(&a.0));

        #[allow(clippy::cast_precision_loss)]
        let hits_json: Vec<_> = hits
            .iter()
            .map(|(score, id, doc)| {
                serde_json::json!({
                    "_index": index,
                    "_id": id,
                    "_score": *score as f64,
                    "_source": doc,
                })
            })
            .collect();

        response.insert(
            "hits".into(),
            serde_json::json!({
                "total": { "value": hits_json.len(), "relation": "eq" },
                "max_score": hits_json.first().map(|h| h["_score"].clone()),
                "hits": hits_json,
            }),
        );
    }

    if let Some(suggesters) = query["suggest"].as_object() {
        let mut suggest = serde_json::Map::new();
        for (name, suggester) in suggesters {
            let entries = if let Some(prefix) = suggester["prefix"].as_str() {
                completion_entries(index, index_state, prefix, &suggester["completion"])
            } else {
                term_entries(index_state, suggester)
            };
            suggest.insert(name.clone(), entries);
        }
        response.insert("suggest".into(), suggest.into());
    }

    response.into()
}

fn completion_entries(
    index: &str,
    index_state: &IndexState,
    prefix: &str,
    completion: &serde_json::Value,
) -> serde_json::Value {
    let field = completion["field"]
        .as_str()
        .and_then(|f| f.split('.').next())
        .unwrap_or_default();
    let size = usize::try_from(completion["size"].as_u64().unwrap_or(5)).unwrap_or(5);
    let needle = prefix.to_lowercase();

    let options: Vec<_> = index_state
        .documents
        .iter()
        .filter(|(_, doc)| field_text(doc, field).to_lowercase().starts_with(&needle))
        .take(size)
        .map(|(id, doc)| {
            serde_json::json!({
                "text": field_text(doc, field),
                "_index": index,
                "_id": id,
                "_score": 1.0,
                "_source": doc,
            })
        })
        .collect();

    serde_json::json!([{
        "text": prefix,
        "offset": 0,
        "length": prefix.chars().count(),
        "options": options,
    }])
}

/// Term candidates share the first letter of the input. In `always` mode the
/// phrase generator also proposes indexed words equal to the input.
fn term_entries(index_state: &IndexState, suggester: &serde_json::Value) -> serde_json::Value {
    let text = suggester["text"].as_str().unwrap_or_default();
    let field = suggester["term"]["field"].as_str().unwrap_or_default();
    let needle = text.to_lowercase();

    let Some(first) = needle.chars().next().map(String::from) else {
        return serde_json::json!([]);
    };

    let always = suggester["phrase"]["direct_generator"]
        .as_array()
        .into_iter()
        .flatten()
        .any(|generator| generator["suggest_mode"] == "always");

    let mut candidates: Vec<String> = index_state
        .documents
        .iter()
        .flat_map(|(_, doc)| words(field_text(doc, field)))
        .filter(|w| w.starts_with(&first) && (always || *w != needle))
        .collect();
    candidates.sort();
    candidates.dedup();

    let options: Vec<_> = candidates
        .into_iter()
        .map(|w| {
            let score = if w == needle { 1.0 } else { 0.5 };
            serde_json::json!({
                "text": w,
                "highlighted": format!("<em>{w}</em>"),
                "score": score,
                "freq": 1,
            })
        })
        .collect();

    serde_json::json!([{
        "text": text,
        "offset": 0,
        "length": text.chars().count(),
        "options": options,
    }])
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
