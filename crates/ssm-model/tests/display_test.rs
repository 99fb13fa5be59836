// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Diagnostic rendering tests for ssm-model.

use std::collections::BTreeMap;

use ssm_model::{
    AddTagsToResourceResult, CommandFilter, CommandFilterKey, PatchFilter, PatchFilterKey,
    PatchFilterGroup, PutParameterResult, SendCommandRequest, StartSessionRequest, Tag, Target,
};

#[test]
fn test_patch_filter_rendering() {
    let filter = PatchFilter::default()
        .with_key(PatchFilterKey::Product)
        .with_values(["Office 2013", "Office 2016"]);
    assert_eq!(
        filter.to_string(),
        "{Key: PRODUCT,Values: [Office 2013, Office 2016]}"
    );
}

#[test]
fn test_fresh_model_renders_empty() {
    assert_eq!(PatchFilter::default().to_string(), "{}");
    assert_eq!(SendCommandRequest::default().to_string(), "{}");
    assert_eq!(AddTagsToResourceResult::default().to_string(), "{}");
}

#[test]
fn test_only_present_fields_render() {
    let tag = Tag::default().with_value("prod");
    assert_eq!(tag.to_string(), "{Value: prod}");
}

#[test]
fn test_fields_render_in_declaration_order() {
    let filter = CommandFilter::default()
        .with_value("2020-01-01T00:00:00Z")
        .with_key(CommandFilterKey::InvokedAfter);
    assert_eq!(
        filter.to_string(),
        "{Key: InvokedAfter,Value: 2020-01-01T00:00:00Z}"
    );
}

#[test]
fn test_nested_models_render_inline() {
    let group = PatchFilterGroup::default().with_patch_filters([PatchFilter::default()
        .with_key(PatchFilterKey::Classification)
        .with_values(["SecurityUpdates"])]);
    assert_eq!(
        group.to_string(),
        "{PatchFilters: [{Key: CLASSIFICATION,Values: [SecurityUpdates]}]}"
    );
}

#[test]
fn test_empty_list_renders_brackets() {
    let target = Target::default().with_values(Vec::<String>::new());
    assert_eq!(target.to_string(), "{Values: []}");
}

#[test]
fn test_numbers_and_maps_render() {
    let result = PutParameterResult {
        version: Some(7),
        tier: Some("Standard".to_string()),
    };
    assert_eq!(result.to_string(), "{Version: 7,Tier: Standard}");

    let req = StartSessionRequest::default()
        .with_target("i-0abc")
        .with_parameters(BTreeMap::from([(
            "portNumber".to_string(),
            vec!["22".to_string()],
        )]));
    assert_eq!(
        req.to_string(),
        "{Target: i-0abc,Parameters: {portNumber: [22]}}"
    );
}
