// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! State Manager associations.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{InstanceAssociationOutputLocation, Target};
use crate::error::Result;
use crate::fluent::{add_entry, append};

/// Binds a document to targets on a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateAssociationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    /// Cron or rate expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_location: Option<InstanceAssociationOutputLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_target_parameter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    /// See [`crate::AssociationComplianceSeverity`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_severity: Option<String>,
    /// See [`crate::AssociationSyncCompliance`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_compliance: Option<String>,
    /// Skip the immediate run on creation and wait for the next cron tick.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_only_at_cron_interval: Option<bool>,
}

impl CreateAssociationRequest {
    /// Set the document name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the document version.
    pub fn with_document_version(mut self, version: impl Into<String>) -> Self {
        self.document_version = Some(version.into());
        self
    }

    /// Set the instance ID.
    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    /// Replace the parameters.
    pub fn with_parameters(mut self, parameters: BTreeMap<String, Vec<String>>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Add a single parameter. Fails if `key` is already set.
    pub fn add_parameters_entry(
        &mut self,
        key: impl Into<String>,
        values: Vec<String>,
    ) -> Result<&mut Self> {
        add_entry(&mut self.parameters, "Parameters", key.into(), values)?;
        Ok(self)
    }

    /// Drop all parameters.
    pub fn clear_parameters_entries(&mut self) -> &mut Self {
        self.parameters = None;
        self
    }

    /// Append targets.
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = Target>) -> Self {
        append(&mut self.targets, targets);
        self
    }

    /// Set the schedule.
    pub fn with_schedule_expression(mut self, expression: impl Into<String>) -> Self {
        self.schedule_expression = Some(expression.into());
        self
    }

    /// Set the output location.
    pub fn with_output_location(mut self, location: InstanceAssociationOutputLocation) -> Self {
        self.output_location = Some(location);
        self
    }

    /// Set the association name.
    pub fn with_association_name(mut self, name: impl Into<String>) -> Self {
        self.association_name = Some(name.into());
        self
    }

    /// Set the rate-control parameter for automation targets.
    pub fn with_automation_target_parameter_name(mut self, name: impl Into<String>) -> Self {
        self.automation_target_parameter_name = Some(name.into());
        self
    }

    /// Set the error threshold.
    pub fn with_max_errors(mut self, max: impl Into<String>) -> Self {
        self.max_errors = Some(max.into());
        self
    }

    /// Set the concurrency limit.
    pub fn with_max_concurrency(mut self, max: impl Into<String>) -> Self {
        self.max_concurrency = Some(max.into());
        self
    }

    /// Set the compliance severity.
    pub fn with_compliance_severity(mut self, severity: impl Into<String>) -> Self {
        self.compliance_severity = Some(severity.into());
        self
    }

    /// Set the sync compliance mode.
    pub fn with_sync_compliance(mut self, mode: impl Into<String>) -> Self {
        self.sync_compliance = Some(mode.into());
        self
    }

    /// Defer the first run to the next cron tick.
    pub fn with_apply_only_at_cron_interval(mut self, apply: bool) -> Self {
        self.apply_only_at_cron_interval = Some(apply);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateAssociationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_description: Option<AssociationDescription>,
}

/// Full description of an association.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssociationDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_version: Option<String>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_update_association_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AssociationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<AssociationOverview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_target_parameter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_location: Option<InstanceAssociationOutputLocation>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_execution_date: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_successful_execution_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_compliance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_only_at_cron_interval: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssociationStatus {
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,
    /// See [`crate::AssociationStatusName`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

/// Aggregated status counts of an association.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssociationOverview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_status: Option<String>,
    /// Status name to number of instances in that status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_status_aggregated_count: Option<BTreeMap<String, i32>>,
}

// ============================================================================
// CreateAssociationBatch
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateAssociationBatchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<CreateAssociationBatchRequestEntry>>,
}

impl CreateAssociationBatchRequest {
    /// Append entries.
    pub fn with_entries(
        mut self,
        entries: impl IntoIterator<Item = CreateAssociationBatchRequestEntry>,
    ) -> Self {
        append(&mut self.entries, entries);
        self
    }
}

/// One association in a batch create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateAssociationBatchRequestEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_target_parameter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_location: Option<InstanceAssociationOutputLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_compliance: Option<String>,
}

impl CreateAssociationBatchRequestEntry {
    /// Set the document name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the instance ID.
    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    /// Replace the parameters.
    pub fn with_parameters(mut self, parameters: BTreeMap<String, Vec<String>>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Add a single parameter. Fails if `key` is already set.
    pub fn add_parameters_entry(
        &mut self,
        key: impl Into<String>,
        values: Vec<String>,
    ) -> Result<&mut Self> {
        add_entry(&mut self.parameters, "Parameters", key.into(), values)?;
        Ok(self)
    }

    /// Drop all parameters.
    pub fn clear_parameters_entries(&mut self) -> &mut Self {
        self.parameters = None;
        self
    }

    /// Set the rate-control parameter for automation targets.
    pub fn with_automation_target_parameter_name(mut self, name: impl Into<String>) -> Self {
        self.automation_target_parameter_name = Some(name.into());
        self
    }

    /// Set the document version.
    pub fn with_document_version(mut self, version: impl Into<String>) -> Self {
        self.document_version = Some(version.into());
        self
    }

    /// Append targets.
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = Target>) -> Self {
        append(&mut self.targets, targets);
        self
    }

    /// Set the schedule.
    pub fn with_schedule_expression(mut self, expression: impl Into<String>) -> Self {
        self.schedule_expression = Some(expression.into());
        self
    }

    /// Set the output location.
    pub fn with_output_location(mut self, location: InstanceAssociationOutputLocation) -> Self {
        self.output_location = Some(location);
        self
    }

    /// Set the association name.
    pub fn with_association_name(mut self, name: impl Into<String>) -> Self {
        self.association_name = Some(name.into());
        self
    }

    /// Set the error threshold.
    pub fn with_max_errors(mut self, max: impl Into<String>) -> Self {
        self.max_errors = Some(max.into());
        self
    }

    /// Set the concurrency limit.
    pub fn with_max_concurrency(mut self, max: impl Into<String>) -> Self {
        self.max_concurrency = Some(max.into());
        self
    }

    /// Set the compliance severity.
    pub fn with_compliance_severity(mut self, severity: impl Into<String>) -> Self {
        self.compliance_severity = Some(severity.into());
        self
    }

    /// Set the sync compliance mode.
    pub fn with_sync_compliance(mut self, mode: impl Into<String>) -> Self {
        self.sync_compliance = Some(mode.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateAssociationBatchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful: Option<Vec<AssociationDescription>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<Vec<FailedCreateAssociation>>,
}

/// A batch entry the service refused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FailedCreateAssociation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<CreateAssociationBatchRequestEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// See [`crate::Fault`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
}

// ============================================================================
// UpdateAssociation / DeleteAssociation
// ============================================================================

/// Updates an association; every present field replaces the stored one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateAssociationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_location: Option<InstanceAssociationOutputLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_name: Option<String>,
    /// Version to update; `$LATEST` or absent means the latest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_target_parameter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_compliance: Option<String>,
}

impl UpdateAssociationRequest {
    /// Set the association ID.
    pub fn with_association_id(mut self, association_id: impl Into<String>) -> Self {
        self.association_id = Some(association_id.into());
        self
    }

    /// Replace the parameters.
    pub fn with_parameters(mut self, parameters: BTreeMap<String, Vec<String>>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Add a single parameter. Fails if `key` is already set.
    pub fn add_parameters_entry(
        &mut self,
        key: impl Into<String>,
        values: Vec<String>,
    ) -> Result<&mut Self> {
        add_entry(&mut self.parameters, "Parameters", key.into(), values)?;
        Ok(self)
    }

    /// Drop all parameters.
    pub fn clear_parameters_entries(&mut self) -> &mut Self {
        self.parameters = None;
        self
    }

    /// Set the document version.
    pub fn with_document_version(mut self, version: impl Into<String>) -> Self {
        self.document_version = Some(version.into());
        self
    }

    /// Set the schedule.
    pub fn with_schedule_expression(mut self, expression: impl Into<String>) -> Self {
        self.schedule_expression = Some(expression.into());
        self
    }

    /// Set the output location.
    pub fn with_output_location(mut self, location: InstanceAssociationOutputLocation) -> Self {
        self.output_location = Some(location);
        self
    }

    /// Set the document name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append targets.
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = Target>) -> Self {
        append(&mut self.targets, targets);
        self
    }

    /// Set the association name.
    pub fn with_association_name(mut self, name: impl Into<String>) -> Self {
        self.association_name = Some(name.into());
        self
    }

    /// Set the association version.
    pub fn with_association_version(mut self, version: impl Into<String>) -> Self {
        self.association_version = Some(version.into());
        self
    }

    /// Set the rate-control parameter for automation targets.
    pub fn with_automation_target_parameter_name(mut self, name: impl Into<String>) -> Self {
        self.automation_target_parameter_name = Some(name.into());
        self
    }

    /// Set the error threshold.
    pub fn with_max_errors(mut self, max: impl Into<String>) -> Self {
        self.max_errors = Some(max.into());
        self
    }

    /// Set the concurrency limit.
    pub fn with_max_concurrency(mut self, max: impl Into<String>) -> Self {
        self.max_concurrency = Some(max.into());
        self
    }

    /// Set the compliance severity.
    pub fn with_compliance_severity(mut self, severity: impl Into<String>) -> Self {
        self.compliance_severity = Some(severity.into());
        self
    }

    /// Set the sync compliance mode.
    pub fn with_sync_compliance(mut self, mode: impl Into<String>) -> Self {
        self.sync_compliance = Some(mode.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateAssociationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_description: Option<AssociationDescription>,
}

/// Deletes by association ID, or by document name plus instance ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteAssociationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
}

impl DeleteAssociationRequest {
    /// Set the document name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the instance ID.
    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    /// Set the association ID.
    pub fn with_association_id(mut self, association_id: impl Into<String>) -> Self {
        self.association_id = Some(association_id.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeleteAssociationResult {}

impl_display!(
    CreateAssociationRequest,
    CreateAssociationResult,
    AssociationDescription,
    AssociationStatus,
    AssociationOverview,
    CreateAssociationBatchRequest,
    CreateAssociationBatchRequestEntry,
    CreateAssociationBatchResult,
    FailedCreateAssociation,
    UpdateAssociationRequest,
    UpdateAssociationResult,
    DeleteAssociationRequest,
    DeleteAssociationResult,
);
