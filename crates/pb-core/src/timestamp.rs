//! Wire format for record timestamps.
//!
//! Timestamps are UTC and rendered without a zone suffix at microsecond
//! precision, e.g. `2024-05-01T09:30:12.004211`. Use with
//! `#[serde(with = "pb_core::timestamp")]`.

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// `strftime` pattern for the wire format.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Current UTC time truncated to the precision that survives formatting.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Render a timestamp in the wire format.
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.format(FORMAT).to_string()
}

pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(ts))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}
