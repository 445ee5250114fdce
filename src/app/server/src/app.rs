// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dill::{Catalog, CatalogBuilder};
use internal_error::ResultIntoInternal;
use observability::axum::unknown_fallback_handler;
use searchly_catalog::SearchSchemaProvisioner;
use searchly_search_elasticsearch::*;
use time_source::SystemTimeSourceDefault;

use crate::{Cli, ServerConfig, ServerError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const BINARY_NAME: &str = "searchly-server";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LOGGING_CONFIG: &str = "info,tower_http=debug";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn run(cli: Cli) -> Result<(), ServerError> {
    let config = ServerConfig::load(cli.config.as_deref())?.with_cli_overrides(&cli);

    observability::init::configure_logging(BINARY_NAME, config.log_format, DEFAULT_LOGGING_CONFIG);
    observability::panic_handler::set_hook_trace_panics();

    tracing::info!(
        version = VERSION,
        listen = %config.listen,
        index_name = %config.index_name,
        es_url = %config.elasticsearch.url,
        "Initializing {BINARY_NAME}"
    );

    let catalog = configure_catalog(&config).build();

    prepare_index(&catalog).await?;

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.listen,
            source,
        })?;

    let local_addr = listener.local_addr().int_err()?;
    tracing::info!(%local_addr, "HTTP server is listening");

    axum::serve(listener, build_router(catalog).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn configure_catalog(config: &ServerConfig) -> CatalogBuilder {
    let mut b = CatalogBuilder::new();

    b.add_value(config.elasticsearch.client_config())
        .add_value(config.index_config())
        .add::<SystemTimeSourceDefault>()
        .add::<ElasticsearchIndexService>()
        .add::<ElasticsearchSchemaProvisioner>()
        .add::<ElasticsearchProductSearchService>()
        .add::<ElasticsearchProductIngestService>();

    b
}

/// Verifies the index service is reachable and the catalog index exists.
/// Either failure is fatal for the server.
pub async fn prepare_index(catalog: &Catalog) -> Result<(), ServerError> {
    let index_service = catalog.get_one::<dyn IndexService>().unwrap();
    index_service
        .ping()
        .await
        .map_err(ServerError::IndexUnreachable)?;
    tracing::info!("Connected to search index");

    let outcome = catalog
        .get_one::<dyn SearchSchemaProvisioner>()
        .unwrap()
        .ensure_schema()
        .await?;
    tracing::info!(?outcome, "Search index is ready");

    Ok(())
}

pub fn build_router(catalog: Catalog) -> axum::Router {
    searchly_adapter_http::root_router()
        .layer(
            tower::ServiceBuilder::new()
                .layer(tower_http::trace::TraceLayer::new_for_http())
                .layer(tower_http::catch_panic::CatchPanicLayer::new())
                .layer(axum::extract::Extension(catalog)),
        )
        .fallback(unknown_fallback_handler)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = ?e, "Unable to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = ?e, "Unable to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
