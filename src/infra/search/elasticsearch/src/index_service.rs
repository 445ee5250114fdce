// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Thin asynchronous view of the search engine, limited to the calls the
/// catalog needs
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait IndexService: Send + Sync {
    async fn ping(&self) -> Result<(), IndexServiceError>;

    async fn index_exists(&self, index: &str) -> Result<bool, IndexServiceError>;

    async fn create_index(
        &self,
        index: &str,
        definition: serde_json::Value,
    ) -> Result<(), IndexServiceError>;

    async fn search(
        &self,
        index: &str,
        query: serde_json::Value,
    ) -> Result<serde_json::Value, IndexServiceError>;

    /// Same endpoint as [`IndexService::search`], used for requests that
    /// carry only a `suggest` section
    async fn suggest(
        &self,
        index: &str,
        query: serde_json::Value,
    ) -> Result<serde_json::Value, IndexServiceError>;

    async fn write_document(
        &self,
        index: &str,
        id: &str,
        document: serde_json::Value,
        refresh: RefreshPolicy,
    ) -> Result<(), IndexServiceError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// When a written document becomes visible to searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Document is searchable once the write call returns
    Immediate,
}

impl RefreshPolicy {
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Immediate => "true",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum IndexServiceError {
    #[error("Index service responded with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
