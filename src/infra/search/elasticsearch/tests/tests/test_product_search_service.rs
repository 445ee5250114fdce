// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use searchly_catalog::*;
use searchly_search_elasticsearch::testing::{InMemoryIndexService, MockIndexService};
use searchly_search_elasticsearch::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_live_suggest_sends_completion_query() {
    let mut index_service = MockIndexService::new();
    index_service
        .expect_suggest()
        .withf(|index, query| {
            index == "products" && *query == ProductQueryBuilder::build_live_suggest_query("blu")
        })
        .times(1)
        .returning(|_, _| {
            Ok(serde_json::json!({
                "suggest": {
                    "product_name_suggestion": [{
                        "text": "blu",
                        "offset": 0,
                        "length": 3,
                        "options": [{ "text": "Blue Shirt", "_id": "0a1b2c3d4e", "_score": 1.0 }],
                    }],
                    "category_suggestion": [{
                        "text": "blu",
                        "offset": 0,
                        "length": 3,
                        "options": [],
                    }],
                }
            }))
        });
    index_service.expect_search().never();

    let service = ElasticsearchProductSearchService::new(
        Arc::new(index_service),
        Arc::new(CatalogIndexConfig::default()),
    );

    let result = service.live_suggest("blu").await.unwrap();

    let options = &result.entries("product_name_suggestion")[0].options;
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].text, "Blue Shirt");
    assert_eq!(options[0].document_id.as_deref(), Some("0a1b2c3d4e"));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_response_without_suggest_is_a_decode_error() {
    let mut index_service = MockIndexService::new();
    index_service
        .expect_suggest()
        .returning(|_, _| Ok(serde_json::json!({ "took": 1, "timed_out": false })));

    let service = ElasticsearchProductSearchService::new(
        Arc::new(index_service),
        Arc::new(CatalogIndexConfig::default()),
    );

    assert!(matches!(
        service.live_suggest("blu").await,
        Err(ProductSearchError::Decode(_))
    ));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_unreachable_index_is_an_upstream_error() {
    let index_service = Arc::new(InMemoryIndexService::new());
    index_service.set_unreachable(true);

    let service = ElasticsearchProductSearchService::new(
        index_service,
        Arc::new(CatalogIndexConfig::default()),
    );

    assert!(matches!(
        service.search("blue").await,
        Err(ProductSearchError::Upstream(_))
    ));
    assert!(matches!(
        service.live_suggest("blu").await,
        Err(ProductSearchError::Upstream(_))
    ));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_search_returns_hits_and_suggestions() {
    let index_service = Arc::new(InMemoryIndexService::new());
    index_service
        .create_index("products", ProductIndexMappings::build_index_definition())
        .await
        .unwrap();
    index_service
        .write_document(
            "products",
            "0a1b2c3d4e",
            serde_json::json!({
                "product_id": "0a1b2c3d4e",
                "product_name": "Blue Shirt",
                "price": 19.99,
                "category": "Apparel",
            }),
            RefreshPolicy::Immediate,
        )
        .await
        .unwrap();

    let service = ElasticsearchProductSearchService::new(
        index_service.clone(),
        Arc::new(CatalogIndexConfig::default()),
    );

    let response = service.search("Blue").await.unwrap();

    assert_eq!(response.hits.hits.len(), 1);
    assert_eq!(response.hits.hits[0].id, "0a1b2c3d4e");
    assert_eq!(response.hits.hits[0].source["product_name"], "Blue Shirt");
    assert!(!response.suggestions.entries("product_name_suggestion")[0].options.is_empty());
    assert!(response.suggestions.entries("category_suggestion")[0].options.is_empty());
    assert_eq!(index_service.calls().search, 1);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
