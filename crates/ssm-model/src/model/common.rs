// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Shapes shared across API areas.

use serde::{Deserialize, Serialize};

use crate::fluent::append;

/// Key-value criteria that select instances or resources for an operation.
///
/// For example `Key = "tag:Environment"`, `Values = ["prod"]`, or
/// `Key = "InstanceIds"` with explicit instance IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Target {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl Target {
    /// Set the key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Append values.
    pub fn with_values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        append(&mut self.values, values.into_iter().map(Into::into));
        self
    }
}

/// Resource tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    /// Set the tag key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the tag value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// SNS notification settings for a command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NotificationConfig {
    /// SNS topic ARN that receives the notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_arn: Option<String>,
    /// Events that trigger a notification (see [`crate::NotificationEvent`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_events: Option<Vec<String>>,
    /// See [`crate::NotificationType`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<String>,
}

impl NotificationConfig {
    /// Set the SNS topic ARN.
    pub fn with_notification_arn(mut self, arn: impl Into<String>) -> Self {
        self.notification_arn = Some(arn.into());
        self
    }

    /// Append notification events.
    pub fn with_notification_events(
        mut self,
        events: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        append(&mut self.notification_events, events.into_iter().map(Into::into));
        self
    }

    /// Set the notification type.
    pub fn with_notification_type(mut self, notification_type: impl Into<String>) -> Self {
        self.notification_type = Some(notification_type.into());
        self
    }
}

/// CloudWatch Logs destination for command output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CloudWatchOutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch_log_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch_output_enabled: Option<bool>,
}

impl CloudWatchOutputConfig {
    /// Set the log group name.
    pub fn with_cloud_watch_log_group_name(mut self, name: impl Into<String>) -> Self {
        self.cloud_watch_log_group_name = Some(name.into());
        self
    }

    /// Enable or disable CloudWatch output.
    pub fn with_cloud_watch_output_enabled(mut self, enabled: bool) -> Self {
        self.cloud_watch_output_enabled = Some(enabled);
        self
    }
}

/// Where association output is written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InstanceAssociationOutputLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_location: Option<S3OutputLocation>,
}

impl InstanceAssociationOutputLocation {
    /// Set the S3 location.
    pub fn with_s3_location(mut self, location: S3OutputLocation) -> Self {
        self.s3_location = Some(location);
        self
    }
}

/// S3 bucket and prefix for output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct S3OutputLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_key_prefix: Option<String>,
}

impl S3OutputLocation {
    /// Set the bucket region.
    pub fn with_output_s3_region(mut self, region: impl Into<String>) -> Self {
        self.output_s3_region = Some(region.into());
        self
    }

    /// Set the bucket name.
    pub fn with_output_s3_bucket_name(mut self, bucket: impl Into<String>) -> Self {
        self.output_s3_bucket_name = Some(bucket.into());
        self
    }

    /// Set the key prefix.
    pub fn with_output_s3_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_s3_key_prefix = Some(prefix.into());
        self
    }
}

/// Parameter values an automation resolved its targets to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResolvedTargets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_values: Option<Vec<String>>,
    /// `true` when the resolved list was cut short.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
}

/// Accounts and regions a multi-account automation runs in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TargetLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_location_max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_location_max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_role_name: Option<String>,
}

impl TargetLocation {
    /// Append account IDs.
    pub fn with_accounts(mut self, accounts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        append(&mut self.accounts, accounts.into_iter().map(Into::into));
        self
    }

    /// Append regions.
    pub fn with_regions(mut self, regions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        append(&mut self.regions, regions.into_iter().map(Into::into));
        self
    }

    /// Set the per-location concurrency limit.
    pub fn with_target_location_max_concurrency(mut self, max: impl Into<String>) -> Self {
        self.target_location_max_concurrency = Some(max.into());
        self
    }

    /// Set the per-location error threshold.
    pub fn with_target_location_max_errors(mut self, max: impl Into<String>) -> Self {
        self.target_location_max_errors = Some(max.into());
        self
    }

    /// Set the role assumed in each target account.
    pub fn with_execution_role_name(mut self, role: impl Into<String>) -> Self {
        self.execution_role_name = Some(role.into());
        self
    }
}

/// Step counters of an automation execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProgressCounters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_steps: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_steps: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_steps: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_steps: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timed_out_steps: Option<i32>,
}

impl_display!(
    Target,
    Tag,
    NotificationConfig,
    CloudWatchOutputConfig,
    InstanceAssociationOutputLocation,
    S3OutputLocation,
    ResolvedTargets,
    TargetLocation,
    ProgressCounters,
);
