// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! JSON 1.1 request/response envelope.
//!
//! Every call is an HTTP POST of the request shape as a JSON object:
//! - `X-Amz-Target: {prefix}.{Operation}`
//! - `Content-Type: application/x-amz-json-1.1`
//!
//! Errors come back with a non-2xx status and a body of the form
//! `{"__type": "com.amazonaws.ssm#ParameterNotFound", "message": "..."}`.

use bytes::Bytes;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::error::{ProtocolError, Result};
use crate::operation::SsmOperation;

/// Content type of every request and response body.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// A request ready to hand to an HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRequest {
    /// URL to POST to.
    pub endpoint: String,
    /// Value of the `X-Amz-Target` header.
    pub target: String,
    /// Value of the `Content-Type` header.
    pub content_type: &'static str,
    pub body: Bytes,
}

/// Serialize `request` into the envelope for its operation.
pub fn encode_request<Op: SsmOperation>(
    config: &ServiceConfig,
    request: &Op,
) -> Result<EncodedRequest> {
    let body = serde_json::to_vec(request)?;
    if body.len() > config.max_body_size {
        return Err(ProtocolError::BodyTooLarge {
            size: body.len(),
            max: config.max_body_size,
        });
    }

    debug!(operation = Op::NAME, size = body.len(), "encoded request");

    Ok(EncodedRequest {
        endpoint: config.endpoint_url(),
        target: format!("{}.{}", config.target_prefix, Op::NAME),
        content_type: CONTENT_TYPE,
        body: Bytes::from(body),
    })
}

/// Decode a response body for operation `Op`.
///
/// A 2xx status with an empty body decodes to `Op::Output::default()`.
/// Any other status is returned as [`ProtocolError::Service`].
pub fn decode_response<Op: SsmOperation>(status: u16, body: &[u8]) -> Result<Op::Output> {
    if !(200..300).contains(&status) {
        let err = decode_service_error(status, body);
        warn!(operation = Op::NAME, status, error = %err, "service returned an error");
        return Err(err);
    }

    debug!(operation = Op::NAME, size = body.len(), "decoding response");

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Op::Output::default());
    }
    Ok(serde_json::from_slice(body)?)
}

fn decode_service_error(status: u16, body: &[u8]) -> ProtocolError {
    // Members are read one by one so a malformed member leaves the others usable.
    let members = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(members)) => members,
        _ => Map::new(),
    };
    let member = |name: &str| members.get(name).and_then(Value::as_str);

    let code = member("__type")
        .map(|t| t.rsplit('#').next().unwrap_or(t))
        .filter(|c| !c.is_empty())
        .unwrap_or("UnknownError")
        .to_string();

    let message = member("message")
        .or_else(|| member("Message"))
        .map(str::to_string)
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string());

    ProtocolError::Service {
        code,
        message,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_code_after_hash() {
        let err = decode_service_error(
            400,
            br#"{"__type":"com.amazonaws.ssm#ParameterNotFound","message":"gone"}"#,
        );
        assert_eq!(err.service_code(), Some("ParameterNotFound"));
    }

    #[test]
    fn test_service_error_both_message_spellings() {
        let err = decode_service_error(
            400,
            br#"{"__type":"com.amazonaws.ssm#ParameterNotFound","message":"lower","Message":"upper"}"#,
        );
        assert_eq!(err.service_code(), Some("ParameterNotFound"));
        assert!(err.to_string().contains("lower"));
    }

    #[test]
    fn test_service_error_non_string_message_keeps_code() {
        let err = decode_service_error(
            400,
            br#"{"__type":"com.amazonaws.ssm#InvalidDocument","Message":{"detail":1}}"#,
        );
        assert_eq!(err.service_code(), Some("InvalidDocument"));
    }

    #[test]
    fn test_service_error_plain_code() {
        let err = decode_service_error(400, br#"{"__type":"ThrottlingException"}"#);
        assert_eq!(err.service_code(), Some("ThrottlingException"));
    }

    #[test]
    fn test_service_error_unparseable_body() {
        let err = decode_service_error(502, b"Bad Gateway");
        match err {
            ProtocolError::Service {
                code,
                message,
                status,
            } => {
                assert_eq!(code, "UnknownError");
                assert_eq!(message, "Bad Gateway");
                assert_eq!(status, 502);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
