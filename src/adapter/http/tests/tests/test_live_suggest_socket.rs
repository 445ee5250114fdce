// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use futures::{SinkExt, StreamExt};
use searchly_catalog::{NewProductRequest, ProductIngestService, SuggestionResult};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::await_client_server_flow;
use crate::harness::ServerHarness;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

async fn seed(harness: &ServerHarness, products: &[(&str, f32, &str)]) {
    for (product_name, price, category) in products {
        harness
            .ingest_service()
            .ingest(NewProductRequest {
                product_name: (*product_name).to_string(),
                price: *price,
                category: (*category).to_string(),
            })
            .await
            .unwrap();
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_keystrokes_get_ordered_suggestions() {
    let harness = ServerHarness::new().await;
    seed(
        &harness,
        &[
            ("Blue Shirt", 19.99, "Apparel"),
            ("Black Boots", 89.0, "Footwear"),
        ],
    )
    .await;
    let url = harness.ws_url("/socket");

    let client = async move {
        let (mut ws, _) = connect_async(url).await.unwrap();

        for prefix in ["b", "bl", "blu"] {
            ws.send(Message::text(prefix)).await.unwrap();
        }

        let mut replies = Vec::new();
        while replies.len() < 3 {
            match ws.next().await.unwrap().unwrap() {
                Message::Text(text) => {
                    replies.push(serde_json::from_str::<SuggestionResult>(&text).unwrap());
                }
                Message::Ping(_) | Message::Pong(_) => {}
                other => panic!("Unexpected message: {other:?}"),
            }
        }

        let prefixes: Vec<_> = replies
            .iter()
            .map(|r| r.entries("product_name_suggestion")[0].text.clone())
            .collect();
        assert_eq!(prefixes, vec!["b", "bl", "blu"]);

        let names = |r: &SuggestionResult| -> Vec<String> {
            r.entries("product_name_suggestion")[0]
                .options
                .iter()
                .map(|o| o.text.clone())
                .collect()
        };
        assert_eq!(names(&replies[0]), vec!["Blue Shirt", "Black Boots"]);
        assert_eq!(names(&replies[2]), vec!["Blue Shirt"]);

        ws.close(None).await.unwrap();
    };

    await_client_server_flow!(harness.api_server.run(), client);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_closed_session_stops_querying() {
    let harness = ServerHarness::new().await;
    let url = harness.ws_url("/socket");
    let index_service = harness.index_service.clone();

    let client = async move {
        let (mut ws, _) = connect_async(url).await.unwrap();
        ws.send(Message::text("b")).await.unwrap();
        let _ = ws.next().await.unwrap().unwrap();
        ws.close(None).await.unwrap();

        // Let the server observe the close
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        assert_eq!(index_service.calls().suggest, 1);
    };

    await_client_server_flow!(harness.api_server.run(), client);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_upstream_failure_closes_session() {
    let harness = ServerHarness::new().await;
    let url = harness.ws_url("/socket");
    harness.index_service.set_unreachable(true);

    let client = async move {
        let (mut ws, _) = connect_async(url).await.unwrap();
        ws.send(Message::text("b")).await.unwrap();

        // No reply is ever sent, the server just closes the connection
        loop {
            match ws.next().await {
                None | Some(Ok(Message::Close(_)) | Err(_)) => break,
                Some(Ok(Message::Ping(_) | Message::Pong(_))) => {}
                Some(Ok(other)) => panic!("Unexpected message: {other:?}"),
            }
        }
    };

    await_client_server_flow!(harness.api_server.run(), client);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_plain_requests_require_upgrade() {
    let harness = ServerHarness::new().await;
    let url = harness.http_url("/socket");

    let client = async move {
        let res = reqwest::get(&url).await.unwrap();
        assert_eq!(res.status(), http::StatusCode::UPGRADE_REQUIRED);

        let cl = reqwest::Client::new();
        for method in [http::Method::POST, http::Method::PUT, http::Method::DELETE] {
            let res = cl.request(method.clone(), &url).send().await.unwrap();
            assert_eq!(res.status(), http::StatusCode::UPGRADE_REQUIRED, "{method}");
        }
    };

    await_client_server_flow!(harness.api_server.run(), client);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
