// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Request, result and nested shapes, grouped by API area.

mod association;
mod automation;
mod command;
mod common;
mod document;
mod instance;
mod inventory;
mod parameter;
mod patch;
mod session;
mod tagging;

pub use association::*;
pub use automation::*;
pub use command::*;
pub use common::*;
pub use document::*;
pub use instance::*;
pub use inventory::*;
pub use parameter::*;
pub use patch::*;
pub use session::*;
pub use tagging::*;
