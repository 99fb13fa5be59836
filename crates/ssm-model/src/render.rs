// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Diagnostic rendering shared by every model's `Display` impl.
//!
//! A model renders as `{Field1: value1,Field2: value2}` using its wire
//! field names. Absent fields are skipped by serialization, so only
//! populated fields show up and a fresh model renders as `{}`.

use std::fmt::{self, Write};

use serde::Serialize;
use serde_json::Value;

pub(crate) fn render<T: Serialize>(model: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let value = serde_json::to_value(model).map_err(|_| fmt::Error)?;
    write_value(&value, f)
}

fn write_value(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Number(n) => write!(f, "{n}"),
        Value::String(s) => f.write_str(s),
        Value::Array(items) => {
            f.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_value(item, f)?;
            }
            f.write_char(']')
        }
        Value::Object(fields) => {
            f.write_char('{')?;
            for (i, (name, field)) in fields.iter().enumerate() {
                if i > 0 {
                    f.write_char(',')?;
                }
                write!(f, "{name}: ")?;
                write_value(field, f)?;
            }
            f.write_char('}')
        }
    }
}
