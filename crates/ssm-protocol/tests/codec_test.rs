// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Envelope encode/decode tests for ssm-protocol.

use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use ssm_model::{
    CancelCommandRequest, DescribeInstanceInformationRequest, GetAutomationExecutionRequest,
    GetParametersRequest, InstanceInformationStringFilter, PutParameterRequest, SendCommandRequest,
    StopAutomationExecutionRequest, StopType, Target,
};
use ssm_protocol::{
    CONTENT_TYPE, OPERATION_NAMES, ProtocolError, ServiceConfig, SsmOperation, decode_response,
    encode_request,
};

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_encode_sets_envelope_headers() {
    let config = ServiceConfig::new().with_region("us-west-2");
    let req = SendCommandRequest::default()
        .with_document_name("AWS-RunShellScript")
        .with_targets([Target::default()
            .with_key("tag:Role")
            .with_values(["web"])]);

    let encoded = encode_request(&config, &req).unwrap();
    assert_eq!(encoded.target, "AmazonSSM.SendCommand");
    assert_eq!(encoded.content_type, CONTENT_TYPE);
    assert_eq!(encoded.content_type, "application/x-amz-json-1.1");
    assert_eq!(encoded.endpoint, "https://ssm.us-west-2.amazonaws.com");
}

#[test]
fn test_encode_body_omits_absent_fields() {
    let req = SendCommandRequest::default()
        .with_document_name("AWS-RunShellScript")
        .with_targets([Target::default()
            .with_key("tag:Role")
            .with_values(["web"])])
        .with_instance_ids(Vec::<String>::new());

    let encoded = encode_request(&ServiceConfig::default(), &req).unwrap();
    assert_eq!(
        body_json(&encoded.body),
        json!({
            "InstanceIds": [],
            "Targets": [{"Key": "tag:Role", "Values": ["web"]}],
            "DocumentName": "AWS-RunShellScript"
        })
    );
}

#[test]
fn test_encode_fresh_request_is_empty_object() {
    let encoded =
        encode_request(&ServiceConfig::default(), &CancelCommandRequest::default()).unwrap();
    assert_eq!(&encoded.body[..], b"{}");
}

#[test]
fn test_encode_uses_endpoint_override_and_prefix() {
    let config = ServiceConfig::new()
        .with_endpoint("http://localhost:4566")
        .with_target_prefix("AmazonSSMLocal");
    let encoded = encode_request(&config, &GetAutomationExecutionRequest::default()).unwrap();
    assert_eq!(encoded.endpoint, "http://localhost:4566");
    assert_eq!(encoded.target, "AmazonSSMLocal.GetAutomationExecution");
}

#[test]
fn test_encode_rejects_oversized_body() {
    let config = ServiceConfig::new().with_max_body_size(32);
    let req = PutParameterRequest::default()
        .with_name("/big")
        .with_value("x".repeat(64));

    let err = encode_request(&config, &req).unwrap_err();
    match err {
        ProtocolError::BodyTooLarge { size, max } => {
            assert_eq!(max, 32);
            assert!(size > 64);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_encode_special_member_names() {
    let req = StopAutomationExecutionRequest::default()
        .with_automation_execution_id("a1b2")
        .with_type(StopType::Cancel);
    let encoded = encode_request(&ServiceConfig::default(), &req).unwrap();
    assert_eq!(
        body_json(&encoded.body),
        json!({"AutomationExecutionId": "a1b2", "Type": "Cancel"})
    );

    let req = DescribeInstanceInformationRequest::default().with_filters([
        InstanceInformationStringFilter::default()
            .with_key("tag:Env")
            .with_values(["prod"]),
    ]);
    let encoded = encode_request(&ServiceConfig::default(), &req).unwrap();
    assert_eq!(
        body_json(&encoded.body),
        json!({"Filters": [{"Key": "tag:Env", "Values": ["prod"]}]})
    );
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn test_decode_result() {
    let body = json!({
        "Parameters": [
            {"Name": "/a", "Type": "String", "Value": "1", "Version": 2,
             "LastModifiedDate": 1577836800.0}
        ],
        "InvalidParameters": ["/missing"]
    })
    .to_string();

    let result = decode_response::<GetParametersRequest>(200, body.as_bytes()).unwrap();
    let params = result.parameters.unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].version, Some(2));
    assert_eq!(
        params[0].last_modified_date,
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single()
    );
    assert_eq!(result.invalid_parameters, Some(vec!["/missing".to_string()]));
}

#[test]
fn test_decode_empty_body_is_default() {
    let result = decode_response::<CancelCommandRequest>(200, b"").unwrap();
    assert_eq!(result, Default::default());

    let result = decode_response::<GetAutomationExecutionRequest>(200, b"  \n").unwrap();
    assert!(result.automation_execution.is_none());
}

#[test]
fn test_decode_ignores_unknown_members() {
    let body = br#"{"AutomationExecution":{"AutomationExecutionId":"x","NewField":1},"Extra":true}"#;
    let result = decode_response::<GetAutomationExecutionRequest>(200, body).unwrap();
    assert_eq!(
        result
            .automation_execution
            .unwrap()
            .automation_execution_id
            .as_deref(),
        Some("x")
    );
}

#[test]
fn test_decode_malformed_body() {
    let err = decode_response::<GetParametersRequest>(200, b"{not json").unwrap_err();
    assert!(matches!(err, ProtocolError::Serialization(_)));
}

#[test]
fn test_decode_service_error() {
    let body = br#"{"__type":"com.amazonaws.ssm#InvalidDocument","message":"Document does not exist"}"#;
    let err = decode_response::<SendCommandRequest>(400, body).unwrap_err();
    match &err {
        ProtocolError::Service {
            code,
            message,
            status,
        } => {
            assert_eq!(code, "InvalidDocument");
            assert_eq!(message, "Document does not exist");
            assert_eq!(*status, 400);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("InvalidDocument"));
}

#[test]
fn test_decode_service_error_capitalized_message() {
    let body = br#"{"__type":"ThrottlingException","Message":"Rate exceeded"}"#;
    let err = decode_response::<GetParametersRequest>(400, body).unwrap_err();
    assert_eq!(err.service_code(), Some("ThrottlingException"));
    assert!(err.to_string().contains("Rate exceeded"));
}

// ============================================================================
// Operation binding
// ============================================================================

#[test]
fn test_operation_names() {
    assert_eq!(SendCommandRequest::NAME, "SendCommand");
    assert_eq!(GetParametersRequest::NAME, "GetParameters");
    assert_eq!(
        DescribeInstanceInformationRequest::NAME,
        "DescribeInstanceInformation"
    );
    assert_eq!(OPERATION_NAMES.len(), 38);

    let mut names = OPERATION_NAMES.to_vec();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), OPERATION_NAMES.len());
}
