// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod handler;
mod session;
mod transport;
mod ws_transport;

pub use handler::*;
pub use session::*;
pub use transport::*;
pub use ws_transport::*;
