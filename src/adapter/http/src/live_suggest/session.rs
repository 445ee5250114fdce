// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use internal_error::{InternalError, ResultIntoInternal};
use random_strings::{AllowedSymbols, get_random_string};
use searchly_catalog::{ProductSearchError, ProductSearchService};
use tracing::Instrument;

use super::{SessionTransport, SessionTransportError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Serves typeahead suggestions over one client connection.
///
/// Every text message is treated as the current contents of the client's
/// input box. Messages are processed strictly one at a time: the reply to a
/// message is sent before the next one is read, so replies arrive in the
/// order the inputs were typed. The first failure of any kind ends the
/// session.
pub struct LiveSuggestSession<T> {
    session_id: String,
    transport: T,
    search_service: Arc<dyn ProductSearchService>,
}

impl<T: SessionTransport> LiveSuggestSession<T> {
    pub fn new(transport: T, search_service: Arc<dyn ProductSearchService>) -> Self {
        Self {
            session_id: get_random_string(None, 8, &AllowedSymbols::Alphanumeric),
            transport,
            search_service,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Runs the session until the client disconnects or an error occurs
    pub async fn serve(self) {
        let span = tracing::info_span!("LiveSuggestSession", session_id = %self.session_id);

        async move {
            tracing::info!("Session opened");

            let mut this = self;
            match this.run().await {
                Ok(served) => tracing::info!(served, "Session closed by client"),
                Err(e) => tracing::warn!(error = ?e, error_msg = %e, "Session terminated"),
            }
        }
        .instrument(span)
        .await;
    }

    async fn run(&mut self) -> Result<usize, LiveSuggestSessionError> {
        let mut served = 0;

        while let Some(prefix) = self.transport.recv_text().await? {
            tracing::debug!(%prefix, "Received input");

            let suggestions = self.search_service.live_suggest(&prefix).await?;
            let payload = serde_json::to_string(&suggestions).int_err()?;

            self.transport.send_text(payload).await?;
            served += 1;
        }

        Ok(served)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum LiveSuggestSessionError {
    #[error(transparent)]
    Transport(#[from] SessionTransportError),

    #[error(transparent)]
    Search(#[from] ProductSearchError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
