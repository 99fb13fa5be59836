// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for ssm-protocol.

use ssm_model::SsmError;
use thiserror::Error;

/// Result type using ProtocolError.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors that can occur while encoding requests or decoding responses.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The service answered with an error body.
    #[error("service error [{code}] (HTTP {status}): {message}")]
    Service {
        code: String,
        message: String,
        status: u16,
    },

    /// Encoded request body exceeds the configured limit.
    #[error("request body too large: {size} bytes (max: {max})")]
    BodyTooLarge { size: usize, max: usize },

    /// Configuration error (missing or invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Model construction error.
    #[error(transparent)]
    Model(#[from] SsmError),
}

impl From<serde_json::Error> for ProtocolError {
    fn from(err: serde_json::Error) -> Self {
        ProtocolError::Serialization(err.to_string())
    }
}

impl ProtocolError {
    /// Service error code, e.g. `ParameterNotFound`.
    pub fn service_code(&self) -> Option<&str> {
        match self {
            ProtocolError::Service { code, .. } => Some(code),
            _ => None,
        }
    }
}
