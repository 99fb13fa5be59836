// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Builder, equality and serialization tests for ssm-model.

use std::collections::BTreeMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use chrono::{TimeZone, Utc};
use serde_json::json;
use ssm_model::{
    CreateAssociationRequest, GetParametersByPathRequest, InstanceInformation,
    InstanceInformationFilter, InstanceInformationFilterKey, InventoryAggregator,
    InventoryFilter, InventoryItem, InventoryQueryOperatorType, Parameter, ParameterType,
    PatchFilter, PatchFilterKey, PutParameterRequest, SendAutomationSignalRequest,
    SendCommandRequest, SessionFilter, SessionFilterKey, SsmError, StopAutomationExecutionRequest,
    StopType, Tag, Target,
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// Builders
// ============================================================================

#[test]
fn test_with_sets_field() {
    let req = PutParameterRequest::default()
        .with_name("/app/db/password")
        .with_type(ParameterType::SecureString)
        .with_overwrite(true);

    assert_eq!(req.name.as_deref(), Some("/app/db/password"));
    assert_eq!(req.parameter_type.as_deref(), Some("SecureString"));
    assert_eq!(req.overwrite, Some(true));
    assert!(req.value.is_none());
}

#[test]
fn test_enum_and_string_setters_are_equivalent() {
    let by_enum = PatchFilter::default().with_key(PatchFilterKey::Classification);
    let by_string = PatchFilter::default().with_key("CLASSIFICATION");
    assert_eq!(by_enum, by_string);
}

#[test]
fn test_list_append_accumulates() {
    let req = SendCommandRequest::default()
        .with_instance_ids(["i-1", "i-2"])
        .with_instance_ids(["i-3"]);
    assert_eq!(
        req.instance_ids,
        Some(vec!["i-1".to_string(), "i-2".to_string(), "i-3".to_string()])
    );
}

#[test]
fn test_empty_append_makes_list_present() {
    let req = SendCommandRequest::default().with_instance_ids(Vec::<String>::new());
    assert_eq!(req.instance_ids, Some(vec![]));
    assert_ne!(req, SendCommandRequest::default());
}

#[test]
fn test_add_entry_rejects_duplicate_and_keeps_first() {
    let mut req = SendCommandRequest::default().with_document_name("AWS-RunShellScript");
    req.add_parameters_entry("commands", vec!["uptime".to_string()])
        .unwrap();

    let err = req
        .add_parameters_entry("commands", vec!["reboot".to_string()])
        .unwrap_err();
    assert_eq!(
        err,
        SsmError::DuplicateKey {
            field: "Parameters",
            key: "commands".to_string(),
        }
    );

    let params = req.parameters.as_ref().unwrap();
    assert_eq!(params["commands"], vec!["uptime".to_string()]);
}

#[test]
fn test_add_entry_chains() {
    let mut req = CreateAssociationRequest::default();
    req.add_parameters_entry("a", vec!["1".to_string()])
        .unwrap()
        .add_parameters_entry("b", vec!["2".to_string()])
        .unwrap();
    assert_eq!(req.parameters.as_ref().map(BTreeMap::len), Some(2));
}

#[test]
fn test_clear_entries_makes_map_absent() {
    let mut signal = SendAutomationSignalRequest::default();
    signal
        .add_payload_entry("Comment", vec!["looks good".to_string()])
        .unwrap();
    signal.clear_payload_entries();
    assert!(signal.payload.is_none());

    // Adding after a clear starts a fresh map.
    signal
        .add_payload_entry("Comment", vec!["again".to_string()])
        .unwrap();
    assert_eq!(signal.payload.as_ref().map(BTreeMap::len), Some(1));
}

#[test]
fn test_with_map_replaces() {
    let mut first = BTreeMap::new();
    first.insert("commands".to_string(), vec!["ls".to_string()]);
    let mut second = BTreeMap::new();
    second.insert("workingDirectory".to_string(), vec!["/tmp".to_string()]);

    let req = SendCommandRequest::default()
        .with_parameters(first)
        .with_parameters(second.clone());
    assert_eq!(req.parameters, Some(second));
}

#[test]
fn test_nested_self_referential_aggregator() {
    let agg = InventoryAggregator::default()
        .with_expression("AWS:InstanceInformation.PlatformType")
        .with_aggregators([
            InventoryAggregator::default().with_expression("AWS:InstanceInformation.PlatformName")
        ]);
    let nested = agg.aggregators.as_ref().unwrap();
    assert_eq!(nested.len(), 1);
    assert!(nested[0].aggregators.is_none());
}

// ============================================================================
// Equality and hashing
// ============================================================================

#[test]
fn test_fresh_instances_are_equal() {
    assert_eq!(Target::default(), Target::default());
    assert_eq!(hash_of(&Target::default()), hash_of(&Target::default()));
}

#[test]
fn test_equal_models_hash_equal() {
    let build = || {
        SendCommandRequest::default()
            .with_document_name("AWS-RunPowerShellScript")
            .with_targets([Target::default()
                .with_key("tag:Environment")
                .with_values(["prod"])])
            .with_timeout_seconds(600)
    };
    let a = build();
    let b = build();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_absent_and_empty_differ() {
    let absent = Target::default().with_key("InstanceIds");
    let empty = Target::default()
        .with_key("InstanceIds")
        .with_values(Vec::<String>::new());
    assert_ne!(absent, empty);
}

#[test]
fn test_list_order_matters() {
    let a = Target::default().with_values(["x", "y"]);
    let b = Target::default().with_values(["y", "x"]);
    assert_ne!(a, b);
}

#[test]
fn test_clone_is_deep() {
    let original = Tag::default().with_key("team").with_value("ops");
    let mut copy = original.clone();
    copy.value = Some("dev".to_string());
    assert_eq!(original.value.as_deref(), Some("ops"));
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_absent_fields_are_omitted() {
    let json = serde_json::to_value(PatchFilter::default()).unwrap();
    assert_eq!(json, json!({}));

    let json = serde_json::to_value(PatchFilter::default().with_key(PatchFilterKey::Product))
        .unwrap();
    assert_eq!(json, json!({"Key": "PRODUCT"}));
}

#[test]
fn test_empty_list_is_sent() {
    let json = serde_json::to_value(Target::default().with_values(Vec::<String>::new())).unwrap();
    assert_eq!(json, json!({"Values": []}));
}

#[test]
fn test_special_member_names() {
    let json = serde_json::to_value(
        PutParameterRequest::default()
            .with_name("n")
            .with_type(ParameterType::String),
    )
    .unwrap();
    assert_eq!(json, json!({"Name": "n", "Type": "String"}));

    let json = serde_json::to_value(
        StopAutomationExecutionRequest::default()
            .with_automation_execution_id("exec-1")
            .with_type(StopType::Cancel),
    )
    .unwrap();
    assert_eq!(
        json,
        json!({"AutomationExecutionId": "exec-1", "Type": "Cancel"})
    );

    let json = serde_json::to_value(
        InventoryFilter::default()
            .with_key("AWS:InstanceInformation.PlatformType")
            .with_values(["Linux"])
            .with_type(InventoryQueryOperatorType::Equal),
    )
    .unwrap();
    assert_eq!(json["Type"], "Equal");
}

#[test]
fn test_lower_camel_filters() {
    let json = serde_json::to_value(
        InstanceInformationFilter::default()
            .with_key(InstanceInformationFilterKey::PingStatus)
            .with_value_set(["Online"]),
    )
    .unwrap();
    assert_eq!(json, json!({"key": "PingStatus", "valueSet": ["Online"]}));

    let json = serde_json::to_value(
        SessionFilter::default()
            .with_key(SessionFilterKey::Owner)
            .with_value("arn:aws:iam::123456789012:user/ops"),
    )
    .unwrap();
    assert_eq!(
        json,
        json!({"key": "Owner", "value": "arn:aws:iam::123456789012:user/ops"})
    );
}

#[test]
fn test_deserialize_service_payload() {
    let payload = json!({
        "Name": "/app/db/host",
        "Type": "String",
        "Value": "db.internal",
        "Version": 3,
        "LastModifiedDate": 1577836800.5,
        "ARN": "arn:aws:ssm:us-east-1:123456789012:parameter/app/db/host",
        "DataType": "text"
    });
    let param: Parameter = serde_json::from_value(payload).unwrap();

    assert_eq!(param.parameter_type.as_deref(), Some("String"));
    assert_eq!(param.version, Some(3));
    assert_eq!(
        param.last_modified_date,
        Utc.timestamp_millis_opt(1_577_836_800_500).single()
    );
    assert!(param.arn.unwrap().ends_with("parameter/app/db/host"));
    assert!(param.selector.is_none());
}

#[test]
fn test_deserialize_tolerates_unknown_members_and_values() {
    let payload = json!({
        "InstanceId": "i-0abc",
        "PingStatus": "Hibernating",
        "IPAddress": "10.0.0.5",
        "SomethingNew": {"Nested": true}
    });
    let info: InstanceInformation = serde_json::from_value(payload).unwrap();
    assert_eq!(info.ping_status.as_deref(), Some("Hibernating"));
    assert_eq!(info.ip_address.as_deref(), Some("10.0.0.5"));
}

#[test]
fn test_timestamp_serializes_as_epoch_seconds() {
    let param = Parameter {
        last_modified_date: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single(),
        ..Default::default()
    };
    let json = serde_json::to_value(&param).unwrap();
    assert_eq!(json["LastModifiedDate"].as_f64(), Some(1_577_836_800.0));
}

#[test]
fn test_serde_round_trip_preserves_equality() {
    let mut item = InventoryItem::default()
        .with_type_name("Custom:RackInfo")
        .with_schema_version("1.0")
        .with_capture_time("2020-01-01T00:00:00Z")
        .with_content([BTreeMap::from([(
            "RackLocation".to_string(),
            "Bay B/Row C/Rack D/Shelf E".to_string(),
        )])]);
    item.add_context_entry("Source", "agent").unwrap();

    let text = serde_json::to_string(&item).unwrap();
    let back: InventoryItem = serde_json::from_str(&text).unwrap();
    assert_eq!(back, item);
    assert_eq!(hash_of(&back), hash_of(&item));
}

#[test]
fn test_request_body_shape() {
    let req = GetParametersByPathRequest::default()
        .with_path("/app")
        .with_recursive(true)
        .with_decryption(true)
        .with_max_results(10);
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(
        json,
        json!({"Path": "/app", "Recursive": true, "WithDecryption": true, "MaxResults": 10})
    );
}
