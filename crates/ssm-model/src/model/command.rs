// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Run Command: sending commands and reading their invocations.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{CloudWatchOutputConfig, NotificationConfig, Target};
use crate::error::Result;
use crate::fluent::{add_entry, append};

// ============================================================================
// SendCommand
// ============================================================================

/// Runs a document on a set of instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SendCommandRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    /// `$DEFAULT`, `$LATEST` or a version number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_hash: Option<String>,
    /// See [`crate::DocumentHashType`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_hash_type: Option<String>,
    /// Seconds to wait for delivery before the command fails (30..=2592000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_key_prefix: Option<String>,
    /// Absolute count (`10`) or percentage (`10%`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_config: Option<NotificationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch_output_config: Option<CloudWatchOutputConfig>,
}

impl SendCommandRequest {
    /// Append instance IDs.
    pub fn with_instance_ids(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        append(&mut self.instance_ids, ids.into_iter().map(Into::into));
        self
    }

    /// Append targets.
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = Target>) -> Self {
        append(&mut self.targets, targets);
        self
    }

    /// Set the document name.
    pub fn with_document_name(mut self, name: impl Into<String>) -> Self {
        self.document_name = Some(name.into());
        self
    }

    /// Set the document version.
    pub fn with_document_version(mut self, version: impl Into<String>) -> Self {
        self.document_version = Some(version.into());
        self
    }

    /// Set the expected document hash.
    pub fn with_document_hash(mut self, hash: impl Into<String>) -> Self {
        self.document_hash = Some(hash.into());
        self
    }

    /// Set the hash type.
    pub fn with_document_hash_type(mut self, hash_type: impl Into<String>) -> Self {
        self.document_hash_type = Some(hash_type.into());
        self
    }

    /// Set the delivery timeout.
    pub fn with_timeout_seconds(mut self, seconds: i32) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Set the comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Replace the document parameters.
    pub fn with_parameters(mut self, parameters: BTreeMap<String, Vec<String>>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Add a single document parameter. Fails if `key` is already set.
    pub fn add_parameters_entry(
        &mut self,
        key: impl Into<String>,
        values: Vec<String>,
    ) -> Result<&mut Self> {
        add_entry(&mut self.parameters, "Parameters", key.into(), values)?;
        Ok(self)
    }

    /// Drop all document parameters.
    pub fn clear_parameters_entries(&mut self) -> &mut Self {
        self.parameters = None;
        self
    }

    /// Set the output bucket region.
    pub fn with_output_s3_region(mut self, region: impl Into<String>) -> Self {
        self.output_s3_region = Some(region.into());
        self
    }

    /// Set the output bucket.
    pub fn with_output_s3_bucket_name(mut self, bucket: impl Into<String>) -> Self {
        self.output_s3_bucket_name = Some(bucket.into());
        self
    }

    /// Set the output key prefix.
    pub fn with_output_s3_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_s3_key_prefix = Some(prefix.into());
        self
    }

    /// Set the concurrency limit.
    pub fn with_max_concurrency(mut self, max: impl Into<String>) -> Self {
        self.max_concurrency = Some(max.into());
        self
    }

    /// Set the error threshold.
    pub fn with_max_errors(mut self, max: impl Into<String>) -> Self {
        self.max_errors = Some(max.into());
        self
    }

    /// Set the role used for notifications.
    pub fn with_service_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.service_role_arn = Some(arn.into());
        self
    }

    /// Set notification settings.
    pub fn with_notification_config(mut self, config: NotificationConfig) -> Self {
        self.notification_config = Some(config);
        self
    }

    /// Set CloudWatch output settings.
    pub fn with_cloud_watch_output_config(mut self, config: CloudWatchOutputConfig) -> Self {
        self.cloud_watch_output_config = Some(config);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SendCommandResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
}

/// A command as tracked by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Command {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// After this time the command no longer starts on new instances.
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub requested_date_time: Option<DateTime<Utc>>,
    /// See [`crate::CommandStatus`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_key_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_timed_out_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_config: Option<NotificationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch_output_config: Option<CloudWatchOutputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i32>,
}

// ============================================================================
// ListCommands / ListCommandInvocations
// ============================================================================

/// Narrows `ListCommands` / `ListCommandInvocations` results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CommandFilter {
    /// See [`crate::CommandFilterKey`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl CommandFilter {
    /// Set the filter key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the filter value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListCommandsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<CommandFilter>>,
}

impl ListCommandsRequest {
    /// Set the command ID.
    pub fn with_command_id(mut self, command_id: impl Into<String>) -> Self {
        self.command_id = Some(command_id.into());
        self
    }

    /// Only list commands sent to this instance.
    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
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

    /// Append filters.
    pub fn with_filters(mut self, filters: impl IntoIterator<Item = CommandFilter>) -> Self {
        append(&mut self.filters, filters);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListCommandsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<Command>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListCommandInvocationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<CommandFilter>>,
    /// Include per-plugin output in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<bool>,
}

impl ListCommandInvocationsRequest {
    /// Set the command ID.
    pub fn with_command_id(mut self, command_id: impl Into<String>) -> Self {
        self.command_id = Some(command_id.into());
        self
    }

    /// Set the instance ID.
    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
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

    /// Append filters.
    pub fn with_filters(mut self, filters: impl IntoIterator<Item = CommandFilter>) -> Self {
        append(&mut self.filters, filters);
        self
    }

    /// Request plugin details.
    pub fn with_details(mut self, details: bool) -> Self {
        self.details = Some(details);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListCommandInvocationsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_invocations: Option<Vec<CommandInvocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// A command as seen by one instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CommandInvocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub requested_date_time: Option<DateTime<Utc>>,
    /// See [`crate::CommandInvocationStatus`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_output_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_error_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_plugins: Option<Vec<CommandPlugin>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_config: Option<NotificationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch_output_config: Option<CloudWatchOutputConfig>,
}

/// Outcome of one plugin (document step) of an invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CommandPlugin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// See [`crate::CommandPluginStatus`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<i32>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub response_start_date_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub response_finish_date_time: Option<DateTime<Utc>>,
    /// First 2500 characters of the plugin output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_output_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_error_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_key_prefix: Option<String>,
}

// ============================================================================
// GetCommandInvocation / CancelCommand
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetCommandInvocationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Required when the document runs more than one plugin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_name: Option<String>,
}

impl GetCommandInvocationRequest {
    /// Set the command ID.
    pub fn with_command_id(mut self, command_id: impl Into<String>) -> Self {
        self.command_id = Some(command_id.into());
        self
    }

    /// Set the instance ID.
    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    /// Set the plugin name.
    pub fn with_plugin_name(mut self, plugin_name: impl Into<String>) -> Self {
        self.plugin_name = Some(plugin_name.into());
        self
    }
}

/// Detailed result of one command on one instance.
///
/// The execution times are strings on the wire, unlike most timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetCommandInvocationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_name: Option<String>,
    /// `-1` when the plugin has not run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_start_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_elapsed_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_end_date_time: Option<String>,
    /// See [`crate::CommandInvocationStatus`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_output_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_output_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_error_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_error_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch_output_config: Option<CloudWatchOutputConfig>,
}

/// Cancels a command on some or all of its instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CancelCommandRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    /// Absent cancels on every instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_ids: Option<Vec<String>>,
}

impl CancelCommandRequest {
    /// Set the command ID.
    pub fn with_command_id(mut self, command_id: impl Into<String>) -> Self {
        self.command_id = Some(command_id.into());
        self
    }

    /// Append instance IDs.
    pub fn with_instance_ids(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        append(&mut self.instance_ids, ids.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CancelCommandResult {}

impl_display!(
    SendCommandRequest,
    SendCommandResult,
    Command,
    CommandFilter,
    ListCommandsRequest,
    ListCommandsResult,
    ListCommandInvocationsRequest,
    ListCommandInvocationsResult,
    CommandInvocation,
    CommandPlugin,
    GetCommandInvocationRequest,
    GetCommandInvocationResult,
    CancelCommandRequest,
    CancelCommandResult,
);
