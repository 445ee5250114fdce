// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::Extension;
use axum::extract::Path;
use axum::response::Json;
use dill::Catalog;
use searchly_catalog::*;

use crate::{ApiError, ResultIntoApiError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const PRODUCT_STORED_MESSAGE: &str = "Product Successfully Stored";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Stores a new catalog entry
#[tracing::instrument(level = "info", skip_all)]
pub async fn ingest_document_handler(
    Extension(catalog): Extension<Catalog>,
    body: bytes::Bytes,
) -> Result<&'static str, ApiError> {
    // Parsed by hand so that malformed bodies get the same 400 as invalid ones
    let request: NewProductRequest = serde_json::from_slice(&body).map_err(ApiError::bad_request)?;

    let ingest_service = catalog.get_one::<dyn ProductIngestService>().unwrap();
    ingest_service.ingest(request).await.api_err()?;

    Ok(PRODUCT_STORED_MESSAGE)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Full-text search with spelling and phrase suggestions
#[tracing::instrument(level = "info", skip_all, fields(%query))]
pub async fn search_documents_handler(
    Extension(catalog): Extension<Catalog>,
    Path(query): Path<String>,
) -> Result<Json<ProductSearchResponse>, ApiError> {
    let search_service = catalog.get_one::<dyn ProductSearchService>().unwrap();
    let response = search_service.search(&query).await.api_err()?;

    Ok(Json(response))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
