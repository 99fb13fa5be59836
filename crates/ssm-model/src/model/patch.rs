// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Patch Manager: baselines, available patches and instance patch state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Tag;
use crate::fluent::append;

/// Selects patches by one attribute.
///
/// `Key = "PRODUCT"` with `Values = ["WindowsServer2012"]` matches every
/// patch for that product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PatchFilter {
    /// See [`crate::PatchFilterKey`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl PatchFilter {
    /// Set the filter key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Append filter values.
    pub fn with_values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        append(&mut self.values, values.into_iter().map(Into::into));
        self
    }
}

/// All filters must match (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PatchFilterGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_filters: Option<Vec<PatchFilter>>,
}

impl PatchFilterGroup {
    /// Append filters.
    pub fn with_patch_filters(mut self, filters: impl IntoIterator<Item = PatchFilter>) -> Self {
        append(&mut self.patch_filters, filters);
        self
    }
}

/// Auto-approval rule of a baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PatchRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_filter_group: Option<PatchFilterGroup>,
    /// See [`crate::PatchComplianceLevel`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_level: Option<String>,
    /// Days after release before approval; exclusive with `approve_until_date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approve_after_days: Option<i32>,
    /// `YYYY-MM-DD` cutoff.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approve_until_date: Option<String>,
    /// Linux only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_non_security: Option<bool>,
}

impl PatchRule {
    /// Set the filter group.
    pub fn with_patch_filter_group(mut self, group: PatchFilterGroup) -> Self {
        self.patch_filter_group = Some(group);
        self
    }

    /// Set the compliance level.
    pub fn with_compliance_level(mut self, level: impl Into<String>) -> Self {
        self.compliance_level = Some(level.into());
        self
    }

    /// Set the approval delay.
    pub fn with_approve_after_days(mut self, days: i32) -> Self {
        self.approve_after_days = Some(days);
        self
    }

    /// Set the approval cutoff date.
    pub fn with_approve_until_date(mut self, date: impl Into<String>) -> Self {
        self.approve_until_date = Some(date.into());
        self
    }

    /// Include non-security updates.
    pub fn with_enable_non_security(mut self, enable: bool) -> Self {
        self.enable_non_security = Some(enable);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PatchRuleGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_rules: Option<Vec<PatchRule>>,
}

impl PatchRuleGroup {
    /// Append rules.
    pub fn with_patch_rules(mut self, rules: impl IntoIterator<Item = PatchRule>) -> Self {
        append(&mut self.patch_rules, rules);
        self
    }
}

/// Alternate package repository (Linux).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PatchSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<String>>,
    /// Repository definition in yum/apt syntax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
}

impl PatchSource {
    /// Set the source name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append products.
    pub fn with_products(mut self, products: impl IntoIterator<Item = impl Into<String>>) -> Self {
        append(&mut self.products, products.into_iter().map(Into::into));
        self
    }

    /// Set the repository configuration.
    pub fn with_configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }
}

/// Details of a single patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Patch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub release_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msrc_severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kb_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msrc_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

// ============================================================================
// CreatePatchBaseline
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreatePatchBaselineRequest {
    /// See [`crate::OperatingSystem`]. Defaults to `WINDOWS` on the service side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_filters: Option<PatchFilterGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rules: Option<PatchRuleGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_patches: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_patches_compliance_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_patches_enable_non_security: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_patches: Option<Vec<String>>,
    /// See [`crate::PatchAction`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_patches_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<PatchSource>>,
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreatePatchBaselineRequest {
    /// Set the operating system.
    pub fn with_operating_system(mut self, os: impl Into<String>) -> Self {
        self.operating_system = Some(os.into());
        self
    }

    /// Set the baseline name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the global filters.
    pub fn with_global_filters(mut self, filters: PatchFilterGroup) -> Self {
        self.global_filters = Some(filters);
        self
    }

    /// Set the approval rules.
    pub fn with_approval_rules(mut self, rules: PatchRuleGroup) -> Self {
        self.approval_rules = Some(rules);
        self
    }

    /// Append explicitly approved patches.
    pub fn with_approved_patches(
        mut self,
        patches: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        append(&mut self.approved_patches, patches.into_iter().map(Into::into));
        self
    }

    /// Set the compliance level of approved patches.
    pub fn with_approved_patches_compliance_level(mut self, level: impl Into<String>) -> Self {
        self.approved_patches_compliance_level = Some(level.into());
        self
    }

    /// Include non-security updates in approved patches.
    pub fn with_approved_patches_enable_non_security(mut self, enable: bool) -> Self {
        self.approved_patches_enable_non_security = Some(enable);
        self
    }

    /// Append explicitly rejected patches.
    pub fn with_rejected_patches(
        mut self,
        patches: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        append(&mut self.rejected_patches, patches.into_iter().map(Into::into));
        self
    }

    /// Set the action for rejected patches.
    pub fn with_rejected_patches_action(mut self, action: impl Into<String>) -> Self {
        self.rejected_patches_action = Some(action.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append patch sources.
    pub fn with_sources(mut self, sources: impl IntoIterator<Item = PatchSource>) -> Self {
        append(&mut self.sources, sources);
        self
    }

    /// Set the idempotency token.
    pub fn with_client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }

    /// Append tags.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        append(&mut self.tags, tags);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreatePatchBaselineResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_id: Option<String>,
}

// ============================================================================
// DescribeAvailablePatches / DescribeInstancePatchStates
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PatchOrchestratorFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl PatchOrchestratorFilter {
    /// Set the filter key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Append filter values.
    pub fn with_values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        append(&mut self.values, values.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeAvailablePatchesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<PatchOrchestratorFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeAvailablePatchesRequest {
    /// Append filters.
    pub fn with_filters(
        mut self,
        filters: impl IntoIterator<Item = PatchOrchestratorFilter>,
    ) -> Self {
        append(&mut self.filters, filters);
        self
    }

    /// Set the page size.
    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Continue from a previous page.
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeAvailablePatchesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patches: Option<Vec<Patch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeInstancePatchStatesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl DescribeInstancePatchStatesRequest {
    /// Append instance IDs.
    pub fn with_instance_ids(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        append(&mut self.instance_ids, ids.into_iter().map(Into::into));
        self
    }

    /// Continue from a previous page.
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }

    /// Set the page size.
    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeInstancePatchStatesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_patch_states: Option<Vec<InstancePatchState>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Patch compliance summary of one instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InstancePatchState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_override_list: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed_other_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed_pending_reboot_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed_rejected_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unreported_not_applicable_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_applicable_count: Option<i32>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_start_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_end_time: Option<DateTime<Utc>>,
    /// See [`crate::PatchOperationType`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_no_reboot_install_operation_time: Option<DateTime<Utc>>,
    /// See [`crate::RebootOption`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reboot_option: Option<String>,
}

impl_display!(
    PatchFilter,
    PatchFilterGroup,
    PatchRule,
    PatchRuleGroup,
    PatchSource,
    Patch,
    CreatePatchBaselineRequest,
    CreatePatchBaselineResult,
    PatchOrchestratorFilter,
    DescribeAvailablePatchesRequest,
    DescribeAvailablePatchesResult,
    DescribeInstancePatchStatesRequest,
    DescribeInstancePatchStatesResult,
    InstancePatchState,
);
