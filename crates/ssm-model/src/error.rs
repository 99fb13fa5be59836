// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for ssm-model.

use thiserror::Error;

/// Result type using SsmError.
pub type Result<T> = std::result::Result<T, SsmError>;

/// Client-side usage errors raised while building models.
///
/// Neither variant involves the network: both signal a malformed call at
/// the site that constructed the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SsmError {
    /// A string is not a member of a closed enumeration (includes empty and absent).
    #[error("invalid value for {type_name}: {value:?}")]
    InvalidEnumValue {
        type_name: &'static str,
        value: Option<String>,
    },

    /// A map entry helper was called with a key that is already present.
    #[error("duplicated key ({key}) provided for {field}")]
    DuplicateKey { field: &'static str, key: String },
}
