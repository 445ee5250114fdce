// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::response::IntoResponse;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, serde::Serialize)]
struct UnknownRouteResponse {
    message: &'static str,
}

/// Fallback for routes that did not match anything
pub async fn unknown_fallback_handler(uri: http::Uri) -> impl IntoResponse {
    tracing::warn!(%uri, "Unknown route requested");

    (
        http::StatusCode::NOT_FOUND,
        axum::Json(UnknownRouteResponse {
            message: "Not Found",
        }),
    )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
