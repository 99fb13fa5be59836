// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error type tests for ssm-model.

use ssm_model::SsmError;

#[test]
fn test_invalid_enum_value_display() {
    let err = SsmError::InvalidEnumValue {
        type_name: "PatchAction",
        value: Some("ALLOW".to_string()),
    };
    let display = err.to_string();
    assert!(display.contains("invalid value"));
    assert!(display.contains("PatchAction"));
    assert!(display.contains("ALLOW"));
}

#[test]
fn test_invalid_enum_value_display_absent() {
    let err = SsmError::InvalidEnumValue {
        type_name: "PatchAction",
        value: None,
    };
    assert!(err.to_string().contains("None"));
}

#[test]
fn test_duplicate_key_display() {
    let err = SsmError::DuplicateKey {
        field: "Parameters",
        key: "commands".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "duplicated key (commands) provided for Parameters"
    );
}

#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(SsmError::DuplicateKey {
        field: "Payload",
        key: "Comment".to_string(),
    });
    assert!(err.to_string().contains("Payload"));
}
