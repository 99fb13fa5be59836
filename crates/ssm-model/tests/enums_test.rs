// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Closed enumeration tests for ssm-model.

use std::collections::HashSet;
use std::fmt::{Debug, Display};
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use ssm_model::{
    AssociationComplianceSeverity, AssociationStatusName, AssociationSyncCompliance,
    AttachmentsSourceKey, AutomationExecutionFilterKey, AutomationExecutionStatus,
    AutomationType, CommandFilterKey, CommandInvocationStatus, CommandPluginStatus,
    CommandStatus, DocumentFormat, DocumentHashType, DocumentParameterType, DocumentStatus,
    DocumentType, ExecutionMode, Fault, InstanceInformationFilterKey, InventoryQueryOperatorType,
    NotificationEvent, NotificationType, OperatingSystem, ParameterTier, ParameterType,
    PatchAction, PatchComplianceLevel, PatchFilterKey, PatchOperationType, PingStatus,
    PlatformType, RebootOption, ResourceType, ResourceTypeForTagging, SessionFilterKey,
    SessionState, SessionStatus, SignalType, SsmError, StopType,
};

fn assert_round_trips<E>(type_name: &str, members: &[E], wire: impl Fn(&E) -> &'static str)
where
    E: Copy + PartialEq + Debug + Display + FromStr<Err = SsmError> + Serialize + DeserializeOwned,
{
    assert!(!members.is_empty(), "{type_name} has no members");
    let mut seen = HashSet::new();
    for member in members {
        let wire = wire(member);
        assert!(seen.insert(wire), "{type_name}: duplicate wire string {wire}");
        assert!(!wire.is_empty(), "{type_name}: empty wire string");
        assert_eq!(member.to_string(), wire);
        assert_eq!(wire.parse::<E>(), Ok(*member));
        assert_eq!(
            serde_json::to_value(member).unwrap(),
            Value::String(wire.to_string())
        );
        assert_eq!(
            serde_json::from_value::<E>(Value::String(wire.to_string())).unwrap(),
            *member
        );
    }
}

macro_rules! assert_enums_round_trip {
    ($($name:ident),+ $(,)?) => {
        $(
            for member in $name::values() {
                assert_eq!($name::from_value(Some(member.as_str())), Ok(*member));
            }
            assert_round_trips(stringify!($name), $name::values(), $name::as_str);
        )+
    };
}

#[test]
fn test_every_enum_round_trips() {
    assert_enums_round_trip!(
        AssociationComplianceSeverity,
        AssociationSyncCompliance,
        AssociationStatusName,
        AttachmentsSourceKey,
        AutomationExecutionFilterKey,
        AutomationExecutionStatus,
        AutomationType,
        CommandFilterKey,
        CommandInvocationStatus,
        CommandPluginStatus,
        CommandStatus,
        DocumentFormat,
        DocumentHashType,
        DocumentParameterType,
        DocumentStatus,
        DocumentType,
        ExecutionMode,
        Fault,
        InstanceInformationFilterKey,
        InventoryQueryOperatorType,
        NotificationEvent,
        NotificationType,
        OperatingSystem,
        ParameterTier,
        ParameterType,
        PatchAction,
        PatchComplianceLevel,
        PatchFilterKey,
        PatchOperationType,
        PingStatus,
        PlatformType,
        RebootOption,
        ResourceType,
        ResourceTypeForTagging,
        SessionFilterKey,
        SessionState,
        SessionStatus,
        SignalType,
        StopType,
    );
}

#[test]
fn test_values_keep_declaration_order() {
    assert_eq!(
        ParameterType::values(),
        &[
            ParameterType::String,
            ParameterType::StringList,
            ParameterType::SecureString
        ]
    );
    assert_eq!(PatchFilterKey::values().len(), 9);
    assert_eq!(AutomationExecutionStatus::values().len(), 8);
}

#[test]
fn test_wire_strings() {
    assert_eq!(PatchFilterKey::Product.as_str(), "PRODUCT");
    assert_eq!(PatchFilterKey::MsrcSeverity.as_str(), "MSRC_SEVERITY");
    assert_eq!(ParameterTier::IntelligentTiering.as_str(), "Intelligent-Tiering");
    assert_eq!(ResourceType::Ec2Instance.as_str(), "EC2Instance");
    assert_eq!(DocumentFormat::Yaml.as_str(), "YAML");
    assert_eq!(OperatingSystem::AmazonLinux2.as_str(), "AMAZON_LINUX_2");
    assert_eq!(CommandStatus::TimedOut.as_str(), "TimedOut");
}

#[test]
fn test_from_value_rejects_absent() {
    let err = ParameterType::from_value(None).unwrap_err();
    assert_eq!(
        err,
        SsmError::InvalidEnumValue {
            type_name: "ParameterType",
            value: None,
        }
    );
}

#[test]
fn test_from_value_rejects_empty() {
    assert!(matches!(
        SignalType::from_value(Some("")),
        Err(SsmError::InvalidEnumValue { value: Some(v), .. }) if v.is_empty()
    ));
}

#[test]
fn test_from_value_rejects_unknown() {
    let err = PatchFilterKey::from_value(Some("VENDOR")).unwrap_err();
    assert!(err.to_string().contains("PatchFilterKey"));
    assert!(err.to_string().contains("VENDOR"));
}

#[test]
fn test_from_value_is_case_sensitive() {
    assert!(PatchFilterKey::from_value(Some("product")).is_err());
    assert!(ParameterTier::from_value(Some("intelligent-tiering")).is_err());
    assert!(DocumentFormat::from_value(Some("Yaml")).is_err());
}

#[test]
fn test_same_wire_string_in_different_enums() {
    assert_eq!(
        ParameterType::from_value(Some("String")),
        Ok(ParameterType::String)
    );
    assert_eq!(
        DocumentParameterType::from_value(Some("String")),
        Ok(DocumentParameterType::String)
    );
}

#[test]
fn test_from_str_and_display() {
    let tier = ParameterTier::from_str("Advanced").unwrap();
    assert_eq!(tier, ParameterTier::Advanced);
    assert_eq!(tier.to_string(), "Advanced");

    let parsed: Result<SignalType, _> = "Approve".parse();
    assert_eq!(parsed, Ok(SignalType::Approve));
    assert!("approve".parse::<SignalType>().is_err());
}

#[test]
fn test_into_string() {
    let wire: String = PatchFilterKey::PatchId.into();
    assert_eq!(wire, "PATCH_ID");
}

#[test]
fn test_serde_uses_wire_strings() {
    let json = serde_json::to_string(&ParameterTier::IntelligentTiering).unwrap();
    assert_eq!(json, "\"Intelligent-Tiering\"");

    let parsed: ResourceType = serde_json::from_str("\"EC2Instance\"").unwrap();
    assert_eq!(parsed, ResourceType::Ec2Instance);

    assert!(serde_json::from_str::<ResourceType>("\"Ec2Instance\"").is_err());
}
