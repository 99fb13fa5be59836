// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Systems Manager JSON 1.1 envelope
//!
//! Binds each `ssm_model` request shape to its service operation and turns
//! it into an HTTP-ready body, then decodes response bodies back into the
//! matching result shape. No transport is included; hand the
//! [`EncodedRequest`] to whatever HTTP client you sign requests with.
//!
//! # Example
//!
//! ```
//! use ssm_model::{GetParameterRequest, GetParameterResult};
//! use ssm_protocol::{ServiceConfig, decode_response, encode_request};
//!
//! let config = ServiceConfig::new().with_region("eu-west-1");
//! let request = GetParameterRequest::default()
//!     .with_name("/app/db/host")
//!     .with_decryption(true);
//!
//! let encoded = encode_request(&config, &request)?;
//! assert_eq!(encoded.target, "AmazonSSM.GetParameter");
//! assert_eq!(encoded.endpoint, "https://ssm.eu-west-1.amazonaws.com");
//!
//! let body = br#"{"Parameter":{"Name":"/app/db/host","Type":"String","Value":"db.internal"}}"#;
//! let result: GetParameterResult = decode_response::<GetParameterRequest>(200, body)?;
//! assert_eq!(result.parameter.unwrap().value.as_deref(), Some("db.internal"));
//! # Ok::<(), ssm_protocol::ProtocolError>(())
//! ```

mod codec;
mod config;
mod error;
mod operation;

pub use codec::{CONTENT_TYPE, EncodedRequest, decode_response, encode_request};
pub use config::{DEFAULT_MAX_BODY_SIZE, DEFAULT_REGION, DEFAULT_TARGET_PREFIX, ServiceConfig};
pub use error::{ProtocolError, Result};
pub use operation::{OPERATION_NAMES, SsmOperation};
