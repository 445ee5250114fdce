// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Opaque identifier of a catalog document.
///
/// Generated by the server, never supplied by clients. Identifiers are random
/// and are not checked against the index for collisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Catalog entry as submitted by a client
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct NewProductRequest {
    #[validate(length(min = 1, message = "product name must not be empty"))]
    pub product_name: String,

    #[validate(range(exclusive_min = 0.0, message = "price must be positive"))]
    pub price: f32,

    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Catalog entry as stored in the index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub product_name: String,
    pub price: f32,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
