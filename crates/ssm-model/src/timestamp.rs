// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Timestamps travel as fractional epoch seconds.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

/// Serde adapter for `Option<DateTime<Utc>>` fields.
///
/// Millisecond precision; anything finer is dropped on the way out.
pub mod epoch_seconds {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_f64(to_epoch_seconds(ts)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<f64>::deserialize(deserializer)?
            .map(from_epoch_seconds)
            .transpose()
            .map_err(D::Error::custom)
    }
}

fn to_epoch_seconds(ts: &DateTime<Utc>) -> f64 {
    ts.timestamp_millis() as f64 / 1000.0
}

fn from_epoch_seconds(seconds: f64) -> Result<DateTime<Utc>, String> {
    if !seconds.is_finite() {
        return Err(format!("timestamp is not finite: {seconds}"));
    }
    DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64)
        .ok_or_else(|| format!("timestamp out of range: {seconds}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_epoch_seconds_keeps_millis() {
        let ts = Utc.timestamp_millis_opt(1_577_836_800_123).unwrap();
        let seconds = to_epoch_seconds(&ts);
        assert_eq!(from_epoch_seconds(seconds).unwrap(), ts);
    }

    #[test]
    fn test_whole_seconds() {
        let ts = from_epoch_seconds(1_577_836_800.0).unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(from_epoch_seconds(f64::NAN).is_err());
        assert!(from_epoch_seconds(f64::INFINITY).is_err());
    }
}
