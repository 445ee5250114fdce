// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The search index could not be reached or rejected a request
#[derive(Debug, thiserror::Error)]
#[error("Index service call failed")]
pub struct UpstreamError {
    #[source]
    pub source: InternalError,
}

impl From<InternalError> for UpstreamError {
    fn from(source: InternalError) -> Self {
        Self { source }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The index answered with a payload that does not have the expected shape
#[derive(Debug, thiserror::Error)]
#[error("Malformed index response: {reason}")]
pub struct DecodeError {
    pub reason: String,
}

impl DecodeError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
#[error("Invalid product: {0}")]
pub struct ValidationError(#[from] pub validator::ValidationErrors);

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl From<InternalError> for ProvisionError {
    fn from(e: InternalError) -> Self {
        Self::Upstream(e.into())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum ProductSearchError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl From<InternalError> for ProductSearchError {
    fn from(e: InternalError) -> Self {
        Self::Upstream(e.into())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum ProductIngestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl From<validator::ValidationErrors> for ProductIngestError {
    fn from(e: validator::ValidationErrors) -> Self {
        Self::Validation(e.into())
    }
}

impl From<InternalError> for ProductIngestError {
    fn from(e: InternalError) -> Self {
        Self::Upstream(e.into())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
