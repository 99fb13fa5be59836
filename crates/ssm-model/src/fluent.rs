// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Shared helpers behind the `with_*` and `add_*_entry` builder methods.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::error::{Result, SsmError};

/// Appends `items` to a lazily created list.
///
/// The first call turns an absent list into a present one, later calls
/// extend it in order.
pub(crate) fn append<T>(list: &mut Option<Vec<T>>, items: impl IntoIterator<Item = T>) {
    list.get_or_insert_with(Vec::new).extend(items);
}

/// Inserts a map entry, rejecting keys that are already present.
///
/// On rejection the stored value is left untouched.
pub(crate) fn add_entry<V>(
    map: &mut Option<BTreeMap<String, V>>,
    field: &'static str,
    key: String,
    value: V,
) -> Result<()> {
    match map.get_or_insert_with(BTreeMap::new).entry(key) {
        Entry::Occupied(existing) => Err(SsmError::DuplicateKey {
            field,
            key: existing.key().clone(),
        }),
        Entry::Vacant(slot) => {
            slot.insert(value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_initializes_then_extends() {
        let mut list: Option<Vec<u32>> = None;
        append(&mut list, [1]);
        append(&mut list, [2, 3]);
        assert_eq!(list, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_append_with_nothing_still_initializes() {
        let mut list: Option<Vec<u32>> = None;
        append(&mut list, []);
        assert_eq!(list, Some(vec![]));
    }

    #[test]
    fn test_add_entry_rejects_duplicate() {
        let mut map: Option<BTreeMap<String, u32>> = None;
        add_entry(&mut map, "Counts", "a".to_string(), 1).unwrap();

        let err = add_entry(&mut map, "Counts", "a".to_string(), 2).unwrap_err();
        assert_eq!(
            err,
            SsmError::DuplicateKey {
                field: "Counts",
                key: "a".to_string()
            }
        );
        assert_eq!(map.unwrap().get("a"), Some(&1));
    }
}
