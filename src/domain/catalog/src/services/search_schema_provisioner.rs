// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::ProvisionError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait SearchSchemaProvisioner: Send + Sync {
    /// Creates the catalog index unless it is already present.
    ///
    /// An existing index is never modified, even if its mappings differ.
    async fn ensure_schema(&self) -> Result<EnsureSchemaOutcome, ProvisionError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureSchemaOutcome {
    AlreadyExists,
    Created,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
