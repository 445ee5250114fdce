// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use internal_error::{InternalError, ResultIntoInternal};
use reqwest::{Method, RequestBuilder, StatusCode};
use url::Url;

use crate::{ElasticsearchClientConfig, IndexServiceError, RefreshPolicy};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct ElasticsearchClient {
    http: reqwest::Client,
    base_url: Url,
    username: Option<String>,
    password: Option<String>,
}

impl ElasticsearchClient {
    pub fn init(config: &ElasticsearchClientConfig) -> Result<Self, ElasticsearchClientInitError> {
        let mut builder = reqwest::Client::builder().gzip(config.enable_compression);

        if let Some(ca_cert_path) = &config.ca_cert_pem_path {
            let pem = std::fs::read(ca_cert_path).map_err(|e| {
                ElasticsearchClientInitError::CaCertRead {
                    path: ca_cert_path.display().to_string(),
                    source: e,
                }
            })?;
            builder = builder.add_root_certificate(reqwest::Certificate::from_pem(&pem)?);
        }

        if let Some(timeout_secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }

        // Relative joins drop the last path segment unless it ends with a slash
        let mut base_url = config.url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    pub async fn ping(&self) -> Result<(), IndexServiceError> {
        let response = self.request(Method::GET, "")?.send().await.int_err()?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    pub async fn index_exists(&self, index: &str) -> Result<bool, IndexServiceError> {
        let response = self.request(Method::HEAD, index)?.send().await.int_err()?;

        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(IndexServiceError::UnexpectedStatus {
                status: status.as_u16(),
                body: String::new(),
            }),
        }
    }

    pub async fn create_index(
        &self,
        index: &str,
        definition: &serde_json::Value,
    ) -> Result<(), IndexServiceError> {
        let response = self
            .request(Method::PUT, index)?
            .json(definition)
            .send()
            .await
            .int_err()?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    pub async fn search(
        &self,
        index: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, IndexServiceError> {
        let response = self
            .request(Method::POST, &format!("{index}/_search"))?
            .json(body)
            .send()
            .await
            .int_err()?;

        let response = Self::ensure_success(response).await?;
        let payload = response.json::<serde_json::Value>().await.int_err()?;
        Ok(payload)
    }

    pub async fn index_document(
        &self,
        index: &str,
        id: &str,
        document: &serde_json::Value,
        refresh: RefreshPolicy,
    ) -> Result<(), IndexServiceError> {
        let response = self
            .request(Method::PUT, &format!("{index}/_doc/{id}"))?
            .query(&[("refresh", refresh.as_query_value())])
            .json(document)
            .send()
            .await
            .int_err()?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, InternalError> {
        let url = self.base_url.join(path).int_err()?;

        let mut request = self.http.request(method, url);
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_ref());
        }
        Ok(request)
    }

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, IndexServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(IndexServiceError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum ElasticsearchClientInitError {
    #[error("Failed to read CA certificate from {path}")]
    CaCertRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
