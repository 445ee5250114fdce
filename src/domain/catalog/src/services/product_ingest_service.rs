// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{NewProductRequest, Product, ProductIngestError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait ProductIngestService: Send + Sync {
    /// Validates the request, assigns an identifier and timestamps, and stores
    /// the document so that it is visible to searches right away
    async fn ingest(&self, request: NewProductRequest) -> Result<Product, ProductIngestError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
