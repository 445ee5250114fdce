// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::Extension;
use axum::extract::WebSocketUpgrade;
use axum::extract::ws::rejection::WebSocketUpgradeRejection;
use axum::response::{IntoResponse, Response};
use dill::Catalog;
use searchly_catalog::ProductSearchService;

use super::{AxumWebSocketTransport, LiveSuggestSession};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Upgrades the connection and starts a typeahead session on it.
///
/// Plain HTTP requests are answered with `426 Upgrade Required`.
pub async fn live_suggest_handler(
    Extension(catalog): Extension<Catalog>,
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
) -> Response {
    let ws = match ws {
        Ok(ws) => ws,
        Err(rejection) => {
            tracing::debug!(%rejection, "Rejected non-upgrade request");
            return http::StatusCode::UPGRADE_REQUIRED.into_response();
        }
    };

    let search_service = catalog.get_one::<dyn ProductSearchService>().unwrap();

    ws.on_upgrade(move |socket| {
        LiveSuggestSession::new(AxumWebSocketTransport::new(socket), search_service).serve()
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
