// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;
use searchly_catalog::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Unifies error handling and logging across HTTP handlers.
///
/// The typical usage pattern is:
///
/// ```
/// async fn handler() -> Result<(), ApiError> {
///     operation().await.api_err()?;
///     Ok(())
/// }
/// ```
///
/// Conversion goes through [`IntoApiError`] rather than [`From`] so that
/// every `?` in a handler is an explicit decision about the response status.
///
/// Clients never see error details: client errors get a short fixed message,
/// server errors get an empty body. Details are only logged.
#[derive(Debug, thiserror::Error)]
#[error("api error {status_code:?}")]
pub struct ApiError {
    status_code: http::StatusCode,
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

pub const BAD_REQUEST_MESSAGE: &str = "Data Validation Error";

impl ApiError {
    pub fn new(
        source: impl std::error::Error + Send + Sync + 'static,
        status_code: http::StatusCode,
    ) -> Self {
        Self {
            status_code,
            source: source.into(),
        }
    }

    pub fn bad_request(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::new(source, http::StatusCode::BAD_REQUEST)
    }

    pub fn status_code(&self) -> http::StatusCode {
        self.status_code
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if self.status_code.is_server_error() {
            tracing::error!(
                error = ?self.source,
                error_msg = %self.source,
                status_code = %self.status_code,
                "Internal API error",
            );
            self.status_code.into_response()
        } else {
            tracing::warn!(
                error = ?self.source,
                error_msg = %self.source,
                status_code = %self.status_code,
                "API error",
            );
            (self.status_code, BAD_REQUEST_MESSAGE).into_response()
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub trait IntoApiError {
    fn api_err(self) -> ApiError;
}

pub trait ResultIntoApiError<K, E>
where
    E: IntoApiError,
{
    fn api_err(self) -> Result<K, ApiError>;
}

impl<K, E> ResultIntoApiError<K, E> for Result<K, E>
where
    E: IntoApiError,
{
    fn api_err(self) -> Result<K, ApiError> {
        self.map_err(IntoApiError::api_err)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl IntoApiError for InternalError {
    fn api_err(self) -> ApiError {
        ApiError::new(self, http::StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoApiError for ProductSearchError {
    fn api_err(self) -> ApiError {
        ApiError::new(self, http::StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoApiError for ProductIngestError {
    fn api_err(self) -> ApiError {
        match self {
            Self::Validation(_) => ApiError::bad_request(self),
            Self::Upstream(_) => ApiError::new(self, http::StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
