// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use searchly_catalog::*;
use searchly_search_elasticsearch::testing::{InMemoryIndexService, MockIndexService};
use searchly_search_elasticsearch::*;
use time_source::SystemTimeSourceStub;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn blue_shirt() -> NewProductRequest {
    NewProductRequest {
        product_name: "Blue Shirt".to_string(),
        price: 19.99,
        category: "Apparel".to_string(),
    }
}

fn ingest_service(index_service: Arc<dyn IndexService>) -> ElasticsearchProductIngestService {
    let t = Utc
        .with_ymd_and_hms(2024, 3, 1, 12, 30, 0)
        .unwrap()
        .checked_add_signed(chrono::Duration::milliseconds(750))
        .unwrap();

    ElasticsearchProductIngestService::new(
        index_service,
        Arc::new(CatalogIndexConfig::default()),
        Arc::new(SystemTimeSourceStub::new_set(t)),
    )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_ingest_stores_stamped_document() {
    let index_service = Arc::new(InMemoryIndexService::new());
    let service = ingest_service(index_service.clone());

    let product = service.ingest(blue_shirt()).await.unwrap();

    let id = product.product_id.as_str();
    assert_eq!(id.len(), 10);
    assert!(id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));

    assert_eq!(product.created_at, product.updated_at);
    assert_eq!(product.created_at.to_rfc3339(), "2024-03-01T12:30:00+00:00");

    let documents = index_service.documents("products");
    assert_eq!(documents.len(), 1);

    let (doc_id, doc) = &documents[0];
    assert_eq!(doc_id, id);
    assert_eq!(doc["product_id"], id);
    assert_eq!(doc["product_name"], "Blue Shirt");
    assert_eq!(doc["category"], "Apparel");
    assert_eq!(doc["created_at"], "2024-03-01T12:30:00Z");
    assert_eq!(doc["updated_at"], "2024-03-01T12:30:00Z");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_ingest_refreshes_immediately() {
    let mut index_service = MockIndexService::new();
    index_service
        .expect_write_document()
        .withf(|index, _, _, refresh| index == "products" && *refresh == RefreshPolicy::Immediate)
        .times(1)
        .returning(|_, _, _, _| Ok(()));

    let service = ingest_service(Arc::new(index_service));
    service.ingest(blue_shirt()).await.unwrap();
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_invalid_request_never_reaches_the_index() {
    let mut index_service = MockIndexService::new();
    index_service.expect_write_document().never();
    let service = ingest_service(Arc::new(index_service));

    for request in [
        NewProductRequest {
            product_name: String::new(),
            ..blue_shirt()
        },
        NewProductRequest {
            price: 0.0,
            ..blue_shirt()
        },
        NewProductRequest {
            price: -1.5,
            ..blue_shirt()
        },
        NewProductRequest {
            category: String::new(),
            ..blue_shirt()
        },
    ] {
        assert!(matches!(
            service.ingest(request).await,
            Err(ProductIngestError::Validation(_))
        ));
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_rejected_write_is_an_upstream_error() {
    let mut index_service = MockIndexService::new();
    index_service.expect_write_document().returning(|_, _, _, _| {
        Err(IndexServiceError::UnexpectedStatus {
            status: 503,
            body: String::new(),
        })
    });
    let service = ingest_service(Arc::new(index_service));

    assert!(matches!(
        service.ingest(blue_shirt()).await,
        Err(ProductIngestError::Upstream(_))
    ));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_ingested_product_is_searchable_right_away() {
    let index_service = Arc::new(InMemoryIndexService::new());
    let config = Arc::new(CatalogIndexConfig::default());

    ElasticsearchSchemaProvisioner::new(index_service.clone(), config.clone())
        .ensure_schema()
        .await
        .unwrap();

    let product = ingest_service(index_service.clone())
        .ingest(blue_shirt())
        .await
        .unwrap();

    let search = ElasticsearchProductSearchService::new(index_service, config);
    let response = search.search("Blue").await.unwrap();

    assert_eq!(response.hits.hits.len(), 1);
    assert_eq!(response.hits.hits[0].id, product.product_id.as_str());

    let name_entries = response.suggestions.entries("product_name_suggestion");
    assert_eq!(name_entries.len(), 1);
    assert!(!name_entries[0].options.is_empty());
    assert_eq!(
        name_entries[0].options[0].highlighted.as_deref(),
        Some("<em>blue</em>")
    );

    let suggestions = search.live_suggest("Blu").await.unwrap();
    assert_eq!(
        suggestions.entries("product_name_suggestion")[0].options[0].text,
        "Blue Shirt"
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
