// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Inventory collection and queries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fluent::{add_entry, append};

/// One inventory item of an instance, e.g. `AWS:Application`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InventoryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    /// ISO-8601 string, unlike most timestamps in the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_time: Option<String>,
    /// Skips the upload when unchanged since the previous put.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<BTreeMap<String, String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<BTreeMap<String, String>>,
}

impl InventoryItem {
    /// Set the inventory type.
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Set the schema version.
    pub fn with_schema_version(mut self, version: impl Into<String>) -> Self {
        self.schema_version = Some(version.into());
        self
    }

    /// Set the capture time.
    pub fn with_capture_time(mut self, capture_time: impl Into<String>) -> Self {
        self.capture_time = Some(capture_time.into());
        self
    }

    /// Set the content hash.
    pub fn with_content_hash(mut self, hash: impl Into<String>) -> Self {
        self.content_hash = Some(hash.into());
        self
    }

    /// Append content rows.
    pub fn with_content(
        mut self,
        rows: impl IntoIterator<Item = BTreeMap<String, String>>,
    ) -> Self {
        append(&mut self.content, rows);
        self
    }

    /// Replace the whole context.
    pub fn with_context(mut self, context: BTreeMap<String, String>) -> Self {
        self.context = Some(context);
        self
    }

    /// Add a single context entry. Fails if `key` is already set.
    pub fn add_context_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        add_entry(&mut self.context, "Context", key.into(), value.into())?;
        Ok(self)
    }

    /// Drop the context.
    pub fn clear_context_entries(&mut self) -> &mut Self {
        self.context = None;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PutInventoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<InventoryItem>>,
}

impl PutInventoryRequest {
    /// Set the managed instance.
    pub fn with_instance_id(mut self, id: impl Into<String>) -> Self {
        self.instance_id = Some(id.into());
        self
    }

    /// Append items.
    pub fn with_items(mut self, items: impl IntoIterator<Item = InventoryItem>) -> Self {
        append(&mut self.items, items);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PutInventoryResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ============================================================================
// GetInventory
// ============================================================================

/// Condition on an inventory attribute, e.g. `AWS:InstanceInformation.PlatformType`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InventoryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    /// See [`crate::InventoryQueryOperatorType`].
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<String>,
}

impl InventoryFilter {
    /// Set the attribute key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Append values.
    pub fn with_values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        append(&mut self.values, values.into_iter().map(Into::into));
        self
    }

    /// Set the comparison operator.
    pub fn with_type(mut self, filter_type: impl Into<String>) -> Self {
        self.filter_type = Some(filter_type.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResultAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

impl ResultAttribute {
    /// Set the inventory type to return.
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }
}

/// Aggregation over an attribute; nests to group by more than one level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InventoryAggregator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregators: Option<Vec<InventoryAggregator>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<InventoryGroup>>,
}

impl InventoryAggregator {
    /// Set the aggregation expression.
    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    /// Append nested aggregators.
    pub fn with_aggregators(
        mut self,
        aggregators: impl IntoIterator<Item = InventoryAggregator>,
    ) -> Self {
        append(&mut self.aggregators, aggregators);
        self
    }

    /// Append groups.
    pub fn with_groups(mut self, groups: impl IntoIterator<Item = InventoryGroup>) -> Self {
        append(&mut self.groups, groups);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InventoryGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<InventoryFilter>>,
}

impl InventoryGroup {
    /// Set the group name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append filters.
    pub fn with_filters(mut self, filters: impl IntoIterator<Item = InventoryFilter>) -> Self {
        append(&mut self.filters, filters);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetInventoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<InventoryFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregators: Option<Vec<InventoryAggregator>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_attributes: Option<Vec<ResultAttribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl GetInventoryRequest {
    /// Append filters.
    pub fn with_filters(mut self, filters: impl IntoIterator<Item = InventoryFilter>) -> Self {
        append(&mut self.filters, filters);
        self
    }

    /// Append aggregators.
    pub fn with_aggregators(
        mut self,
        aggregators: impl IntoIterator<Item = InventoryAggregator>,
    ) -> Self {
        append(&mut self.aggregators, aggregators);
        self
    }

    /// Append result attributes.
    pub fn with_result_attributes(
        mut self,
        attributes: impl IntoIterator<Item = ResultAttribute>,
    ) -> Self {
        append(&mut self.result_attributes, attributes);
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
pub struct GetInventoryResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<InventoryResultEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Inventory of one instance, keyed by inventory type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InventoryResultEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, InventoryResultItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InventoryResultItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<BTreeMap<String, String>>>,
}

impl_display!(
    InventoryItem,
    PutInventoryRequest,
    PutInventoryResult,
    InventoryFilter,
    ResultAttribute,
    InventoryAggregator,
    InventoryGroup,
    GetInventoryRequest,
    GetInventoryResult,
    InventoryResultEntity,
    InventoryResultItem,
);
