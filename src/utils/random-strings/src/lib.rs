// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use rand::Rng;
use rand::distributions::{Alphanumeric, DistString};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedSymbols {
    Alphanumeric,
    LowercaseHex,
}

const LOWERCASE_HEX: &[u8] = b"0123456789abcdef";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Generates a random string of `length` symbols, optionally prefixed.
///
/// Uniqueness is not guaranteed, callers that need it must check for
/// collisions themselves.
pub fn get_random_string(prefix: Option<&str>, length: usize, symbols: &AllowedSymbols) -> String {
    let mut rng = rand::thread_rng();

    let random_part = match symbols {
        AllowedSymbols::Alphanumeric => Alphanumeric.sample_string(&mut rng, length),
        AllowedSymbols::LowercaseHex => (0..length)
            .map(|_| char::from(LOWERCASE_HEX[rng.gen_range(0..LOWERCASE_HEX.len())]))
            .collect(),
    };

    match prefix {
        Some(prefix) => format!("{prefix}{random_part}"),
        None => random_part,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
