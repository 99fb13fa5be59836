// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error type tests for ssm-protocol.

use ssm_model::{PatchAction, SsmError};
use ssm_protocol::ProtocolError;

#[test]
fn test_config_error_display() {
    let err = ProtocolError::Config("invalid SSM_MAX_BODY_BYTES".to_string());
    assert!(err.to_string().contains("configuration error"));
    assert!(err.to_string().contains("SSM_MAX_BODY_BYTES"));
}

#[test]
fn test_body_too_large_display() {
    let err = ProtocolError::BodyTooLarge { size: 100, max: 10 };
    let display = err.to_string();
    assert!(display.contains("too large"));
    assert!(display.contains("100"));
    assert!(display.contains("10"));
}

#[test]
fn test_service_error_display() {
    let err = ProtocolError::Service {
        code: "ParameterNotFound".to_string(),
        message: "not here".to_string(),
        status: 400,
    };
    let display = err.to_string();
    assert!(display.contains("ParameterNotFound"));
    assert!(display.contains("400"));
    assert!(display.contains("not here"));
    assert_eq!(err.service_code(), Some("ParameterNotFound"));
}

#[test]
fn test_serialization_error_from_serde_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: ProtocolError = json_err.into();
    assert!(err.to_string().contains("serialization error"));
    assert_eq!(err.service_code(), None);
}

#[test]
fn test_model_error_converts() {
    fn parse(value: &str) -> ssm_protocol::Result<PatchAction> {
        Ok(value.parse::<PatchAction>()?)
    }

    let err = parse("ALLOW").unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::Model(SsmError::InvalidEnumValue { .. })
    ));
    assert!(parse("BLOCK").is_ok());
}
