// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{ProductSearchError, ProductSearchResponse, SuggestionResult};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait ProductSearchService: Send + Sync {
    /// Runs a full-text search over product names and categories, together
    /// with term and phrase suggestions for the same text
    async fn search(&self, text: &str) -> Result<ProductSearchResponse, ProductSearchError>;

    /// Returns completion suggestions for a partially typed word
    async fn live_suggest(&self, prefix: &str) -> Result<SuggestionResult, ProductSearchError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
