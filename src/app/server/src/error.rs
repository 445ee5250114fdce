// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::net::SocketAddr;

use internal_error::InternalError;
use searchly_catalog::ProvisionError;
use searchly_search_elasticsearch::IndexServiceError;

use crate::ConfigError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Search index is unreachable")]
    IndexUnreachable(#[source] IndexServiceError),

    #[error("Failed to prepare search index")]
    Provision(#[from] ProvisionError),

    #[error("Failed to listen on {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server terminated abnormally")]
    Serve(#[source] std::io::Error),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
