// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod product;
mod product_search_response;
mod suggestion;

pub use product::*;
pub use product_search_response::*;
pub use suggestion::*;
