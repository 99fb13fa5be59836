// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Systems Manager (SSM) model
//!
//! Typed request, result and nested shapes for the AWS Systems Manager API,
//! plus the closed enumerations ("allowed values") its fields draw from.
//!
//! Every model is a plain value:
//! - all fields are optional and start absent (`Default`)
//! - `with_*` builders set a field or append to a list
//! - `add_*_entry` inserts into a map and rejects duplicate keys
//! - equality and hashing are structural
//! - `Display` renders a compact `{Field: value,...}` form of present fields
//! - serde uses the service's JSON member names
//!
//! # Example
//!
//! ```
//! use ssm_model::{PatchFilter, PatchFilterKey};
//!
//! let filter = PatchFilter::default()
//!     .with_key(PatchFilterKey::Product)
//!     .with_values(["Office 2013", "Office 2016"]);
//!
//! assert_eq!(
//!     filter.to_string(),
//!     "{Key: PRODUCT,Values: [Office 2013, Office 2016]}"
//! );
//! ```

#[macro_use]
mod macros;

mod enums;
mod error;
mod fluent;
mod model;
mod render;
pub mod timestamp;

pub use enums::*;
pub use error::{Result, SsmError};
pub use model::*;
