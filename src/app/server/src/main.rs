// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = searchly_server::Cli::parse();

    match searchly_server::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, error_msg = %err, "Server failed");
            // Logging may not be configured yet if the failure happened early
            eprintln!("Error: {}", internal_error::error_chain(&err));
            ExitCode::FAILURE
        }
    }
}
