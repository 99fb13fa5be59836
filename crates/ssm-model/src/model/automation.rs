// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Automation executions and their steps.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{ProgressCounters, ResolvedTargets, Target, TargetLocation};
use crate::error::Result;
use crate::fluent::{add_entry, append};

/// Full state of one automation execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AutomationExecution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub execution_start_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub execution_end_time: Option<DateTime<Utc>>,
    /// See [`crate::AutomationExecutionStatus`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_execution_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_executions: Option<Vec<StepExecution>>,
    /// Set when the service returned only the most recent steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_executions_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
    /// See [`crate::ExecutionMode`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_automation_execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_step_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_parameter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_maps: Option<Vec<BTreeMap<String, Vec<String>>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_targets: Option<ResolvedTargets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_locations: Option<Vec<TargetLocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_counters: Option<ProgressCounters>,
}

/// Summary row returned by `DescribeAutomationExecutions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AutomationExecutionMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_execution_status: Option<String>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub execution_start_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub execution_end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_by: Option<String>,
    /// S3 location of the execution log.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_automation_execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_step_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_parameter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_maps: Option<Vec<BTreeMap<String, Vec<String>>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_targets: Option<ResolvedTargets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// See [`crate::AutomationType`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_type: Option<String>,
}

/// One step of an automation execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StepExecution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_name: Option<String>,
    /// Automation action, e.g. `aws:runCommand`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_failure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<i32>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub execution_start_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub execution_end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_details: Option<FailureDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overridden_parameters: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_end: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_critical: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_next_steps: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_location: Option<TargetLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FailureDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, Vec<String>>>,
}

// ============================================================================
// StartAutomationExecution
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartAutomationExecutionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Vec<String>>>,
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_parameter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_maps: Option<Vec<BTreeMap<String, Vec<String>>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_locations: Option<Vec<TargetLocation>>,
}

impl StartAutomationExecutionRequest {
    /// Set the automation document.
    pub fn with_document_name(mut self, name: impl Into<String>) -> Self {
        self.document_name = Some(name.into());
        self
    }

    /// Set the document version.
    pub fn with_document_version(mut self, version: impl Into<String>) -> Self {
        self.document_version = Some(version.into());
        self
    }

    /// Replace all execution parameters.
    pub fn with_parameters(mut self, parameters: BTreeMap<String, Vec<String>>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Add a single execution parameter. Fails if `key` is already set.
    pub fn add_parameters_entry(
        &mut self,
        key: impl Into<String>,
        values: Vec<String>,
    ) -> Result<&mut Self> {
        add_entry(&mut self.parameters, "Parameters", key.into(), values)?;
        Ok(self)
    }

    /// Drop all execution parameters.
    pub fn clear_parameters_entries(&mut self) -> &mut Self {
        self.parameters = None;
        self
    }

    /// Set the idempotency token.
    pub fn with_client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }

    /// Set the execution mode.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Set the parameter that receives each target.
    pub fn with_target_parameter_name(mut self, name: impl Into<String>) -> Self {
        self.target_parameter_name = Some(name.into());
        self
    }

    /// Append targets.
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = Target>) -> Self {
        append(&mut self.targets, targets);
        self
    }

    /// Append target maps.
    pub fn with_target_maps(
        mut self,
        maps: impl IntoIterator<Item = BTreeMap<String, Vec<String>>>,
    ) -> Self {
        append(&mut self.target_maps, maps);
        self
    }

    /// Set the concurrency limit.
    pub fn with_max_concurrency(mut self, max_concurrency: impl Into<String>) -> Self {
        self.max_concurrency = Some(max_concurrency.into());
        self
    }

    /// Set the error threshold.
    pub fn with_max_errors(mut self, max_errors: impl Into<String>) -> Self {
        self.max_errors = Some(max_errors.into());
        self
    }

    /// Append target locations.
    pub fn with_target_locations(
        mut self,
        locations: impl IntoIterator<Item = TargetLocation>,
    ) -> Self {
        append(&mut self.target_locations, locations);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartAutomationExecutionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_execution_id: Option<String>,
}

// ============================================================================
// GetAutomationExecution / StopAutomationExecution / SendAutomationSignal
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetAutomationExecutionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_execution_id: Option<String>,
}

impl GetAutomationExecutionRequest {
    /// Set the execution ID.
    pub fn with_automation_execution_id(mut self, id: impl Into<String>) -> Self {
        self.automation_execution_id = Some(id.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetAutomationExecutionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_execution: Option<AutomationExecution>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StopAutomationExecutionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_execution_id: Option<String>,
    /// See [`crate::StopType`].
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub stop_type: Option<String>,
}

impl StopAutomationExecutionRequest {
    /// Set the execution ID.
    pub fn with_automation_execution_id(mut self, id: impl Into<String>) -> Self {
        self.automation_execution_id = Some(id.into());
        self
    }

    /// Set how the execution is stopped.
    pub fn with_type(mut self, stop_type: impl Into<String>) -> Self {
        self.stop_type = Some(stop_type.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StopAutomationExecutionResult {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SendAutomationSignalRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_execution_id: Option<String>,
    /// See [`crate::SignalType`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_type: Option<String>,
    /// `Approve`/`Reject` take a `Comment`; `StartStep`/`Resume` take a `StepName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<BTreeMap<String, Vec<String>>>,
}

impl SendAutomationSignalRequest {
    /// Set the execution ID.
    pub fn with_automation_execution_id(mut self, id: impl Into<String>) -> Self {
        self.automation_execution_id = Some(id.into());
        self
    }

    /// Set the signal type.
    pub fn with_signal_type(mut self, signal_type: impl Into<String>) -> Self {
        self.signal_type = Some(signal_type.into());
        self
    }

    /// Replace the whole payload.
    pub fn with_payload(mut self, payload: BTreeMap<String, Vec<String>>) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Add a single payload entry. Fails if `key` is already set.
    pub fn add_payload_entry(
        &mut self,
        key: impl Into<String>,
        values: Vec<String>,
    ) -> Result<&mut Self> {
        add_entry(&mut self.payload, "Payload", key.into(), values)?;
        Ok(self)
    }

    /// Drop the payload.
    pub fn clear_payload_entries(&mut self) -> &mut Self {
        self.payload = None;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SendAutomationSignalResult {}

// ============================================================================
// DescribeAutomationExecutions
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AutomationExecutionFilter {
    /// See [`crate::AutomationExecutionFilterKey`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl AutomationExecutionFilter {
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
pub struct DescribeAutomationExecutionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<AutomationExecutionFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeAutomationExecutionsRequest {
    /// Append filters.
    pub fn with_filters(
        mut self,
        filters: impl IntoIterator<Item = AutomationExecutionFilter>,
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
pub struct DescribeAutomationExecutionsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_execution_metadata_list: Option<Vec<AutomationExecutionMetadata>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl_display!(
    AutomationExecution,
    AutomationExecutionMetadata,
    StepExecution,
    FailureDetails,
    StartAutomationExecutionRequest,
    StartAutomationExecutionResult,
    GetAutomationExecutionRequest,
    GetAutomationExecutionResult,
    StopAutomationExecutionRequest,
    StopAutomationExecutionResult,
    SendAutomationSignalRequest,
    SendAutomationSignalResult,
    AutomationExecutionFilter,
    DescribeAutomationExecutionsRequest,
    DescribeAutomationExecutionsResult,
);
