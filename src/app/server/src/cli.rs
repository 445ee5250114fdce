// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::net::SocketAddr;
use std::path::PathBuf;

use observability::init::LogFormat;
use url::Url;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Every option overrides the corresponding value of the configuration file
#[derive(clap::Parser, Debug, Clone, Default)]
#[command(name = "searchly-server", version, about = "Product catalog search with live typeahead")]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, env = "SEARCHLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to serve HTTP and WebSocket requests on
    #[arg(long, env = "SEARCHLY_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Name of the index holding catalog documents
    #[arg(long, env = "SEARCHLY_INDEX")]
    pub index_name: Option<String>,

    /// Log output format: `pretty` or `json`
    #[arg(long, env = "SEARCHLY_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Elasticsearch endpoint, e.g. `https://localhost:9200`
    #[arg(long, env = "ES_URL")]
    pub es_url: Option<Url>,

    #[arg(long, env = "ELASTIC_USER")]
    pub es_user: Option<String>,

    #[arg(long, env = "ELASTIC_PASSWORD", hide_env_values = true)]
    pub es_password: Option<String>,

    /// PEM file with the certificate authority of the cluster
    #[arg(long, env = "ES_CA_CERT")]
    pub es_ca_cert: Option<PathBuf>,

    /// Per-request timeout of index calls in seconds
    #[arg(long, env = "ES_TIMEOUT_SECS")]
    pub es_timeout_secs: Option<u64>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
