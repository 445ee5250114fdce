// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use observability::init::LogFormat;
use searchly_search_elasticsearch::{CatalogIndexConfig, ElasticsearchClientConfig};
use url::Url;

use crate::Cli;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ServerConfig {
    pub listen: SocketAddr,
    pub log_format: LogFormat,
    pub index_name: String,
    pub elasticsearch: ElasticsearchConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_format: LogFormat::default(),
            index_name: CatalogIndexConfig::default().index_name,
            elasticsearch: ElasticsearchConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Reads the configuration file if one is given, otherwise starts from
    /// defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(listen) = cli.listen {
            self.listen = listen;
        }
        if let Some(log_format) = cli.log_format {
            self.log_format = log_format;
        }
        if let Some(index_name) = &cli.index_name {
            self.index_name.clone_from(index_name);
        }

        let es = &mut self.elasticsearch;
        if let Some(url) = &cli.es_url {
            es.url = url.clone();
        }
        if cli.es_user.is_some() {
            es.username.clone_from(&cli.es_user);
        }
        if cli.es_password.is_some() {
            es.password.clone_from(&cli.es_password);
        }
        if cli.es_ca_cert.is_some() {
            es.ca_cert_path.clone_from(&cli.es_ca_cert);
        }
        if cli.es_timeout_secs.is_some() {
            es.timeout_secs = cli.es_timeout_secs;
        }
        self
    }

    pub fn index_config(&self) -> CatalogIndexConfig {
        CatalogIndexConfig {
            index_name: self.index_name.clone(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ElasticsearchConfig {
    pub url: Url,
    pub username: Option<String>,
    pub password: Option<String>,
    pub ca_cert_path: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub enable_compression: bool,
}

impl Default for ElasticsearchConfig {
    fn default() -> Self {
        Self {
            url: Url::parse("http://localhost:9200").unwrap(),
            username: None,
            password: None,
            ca_cert_path: None,
            timeout_secs: None,
            enable_compression: false,
        }
    }
}

impl ElasticsearchConfig {
    pub fn client_config(&self) -> ElasticsearchClientConfig {
        ElasticsearchClientConfig {
            url: self.url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            ca_cert_pem_path: self.ca_cert_path.clone(),
            timeout_secs: self.timeout_secs,
            enable_compression: self.enable_compression,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unable to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
