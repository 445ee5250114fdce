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

/// Bidirectional text channel a live suggestion session runs over
#[async_trait::async_trait]
pub trait SessionTransport: Send {
    /// Waits for the next text message.
    ///
    /// Returns `None` once the peer has closed the channel. Control frames are
    /// consumed silently.
    async fn recv_text(&mut self) -> Result<Option<String>, SessionTransportError>;

    async fn send_text(&mut self, text: String) -> Result<(), SessionTransportError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum SessionTransportError {
    #[error("Received a non-text message")]
    NonTextMessageReceived,

    #[error(transparent)]
    Connection(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
