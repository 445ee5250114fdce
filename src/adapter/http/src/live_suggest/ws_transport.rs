// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::extract::ws::{Message, WebSocket};
use internal_error::ResultIntoInternal;

use super::{SessionTransport, SessionTransportError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct AxumWebSocketTransport {
    socket: WebSocket,
}

impl AxumWebSocketTransport {
    pub fn new(socket: WebSocket) -> Self {
        Self { socket }
    }
}

#[async_trait::async_trait]
impl SessionTransport for AxumWebSocketTransport {
    async fn recv_text(&mut self) -> Result<Option<String>, SessionTransportError> {
        loop {
            let Some(message) = self.socket.recv().await else {
                return Ok(None);
            };

            match message.int_err()? {
                Message::Text(text) => return Ok(Some(text.to_string())),
                // Pings are answered by the protocol layer
                Message::Ping(_) | Message::Pong(_) => {}
                Message::Close(_) => return Ok(None),
                Message::Binary(_) => return Err(SessionTransportError::NonTextMessageReceived),
            }
        }
    }

    async fn send_text(&mut self, text: String) -> Result<(), SessionTransportError> {
        self.socket.send(Message::Text(text.into())).await.int_err()?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
