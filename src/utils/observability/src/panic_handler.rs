// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::backtrace::Backtrace;
use std::panic;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Routes panics through `tracing` so they end up in the structured log
/// together with a backtrace. The previously installed hook still runs first.
pub fn set_hook_trace_panics() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        default_hook(info);

        let payload = info.payload();
        let error_msg = payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("Unknown panic payload");

        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();

        let backtrace = Backtrace::force_capture();

        tracing::error!(
            error_msg,
            location,
            error_backtrace = %backtrace,
            "Unhandled panic caught"
        );
    }));
}
