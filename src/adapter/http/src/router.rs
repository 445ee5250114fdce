// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::routing::{any, get, post};

use crate::{document, live_suggest};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Routes of the whole service.
///
/// Handlers resolve their services from a [`dill::Catalog`] that the caller
/// must provide as an [`axum::Extension`] layer.
pub fn root_router() -> axum::Router {
    axum::Router::new()
        .route("/api/document", post(document::ingest_document_handler))
        .route("/api/document/", post(document::ingest_document_handler))
        .route("/api/document/{query}", get(document::search_documents_handler))
        .route("/socket", any(live_suggest::live_suggest_handler))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
