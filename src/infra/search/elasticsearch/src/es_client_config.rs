// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::PathBuf;

use url::Url;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct ElasticsearchClientConfig {
    pub url: Url,
    pub username: Option<String>,
    pub password: Option<String>,
    /// PEM file with an additional root certificate to trust
    pub ca_cert_pem_path: Option<PathBuf>,
    /// Per-request timeout. When unset, requests wait for as long as the
    /// connection stays open.
    pub timeout_secs: Option<u64>,
    pub enable_compression: bool,
}

impl ElasticsearchClientConfig {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            username: None,
            password: None,
            ca_cert_pem_path: None,
            timeout_secs: None,
            enable_compression: false,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIndexConfig {
    pub index_name: String,
}

impl Default for CatalogIndexConfig {
    fn default() -> Self {
        Self {
            index_name: String::from("products"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
