use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::time::Duration;

const NAIVE_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Parses RFC 3339, or an ISO-8601 timestamp without offset which is taken
/// as local time. Offset-less values are what older data files contain.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw, NAIVE_ISO_FORMAT).ok()?;
    let utc = match Local.from_local_datetime(&naive).earliest() {
        Some(local) => local.with_timezone(&Utc),
        // Skipped by a DST transition; fall back to reading it as UTC.
        None => Utc.from_utc_datetime(&naive),
    };
    Some(utc)
}

pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
}

pub fn deserialize_timestamp_map<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(key, value)| match parse_timestamp(&value) {
            Some(ts) => Ok((key, ts)),
            None => Err(de::Error::custom(format!(
                "invalid timestamp for {}: {}",
                key, value
            ))),
        })
        .collect()
}

/// Whole seconds still to wait before `last + window`, or `None` once the
/// window has passed. Partial seconds elapsed are dropped, so a running
/// window always reports at least one second.
pub fn remaining_in_window(
    last: DateTime<Utc>,
    now: DateTime<Utc>,
    window: Duration,
) -> Option<u64> {
    let window_secs = window.as_secs() as i64;
    let elapsed = now.signed_duration_since(last);
    if elapsed >= chrono::Duration::seconds(window_secs) {
        return None;
    }
    // A timestamp from the future counts as "just now".
    let elapsed_secs = elapsed.num_seconds().max(0);
    Some((window_secs - elapsed_secs) as u64)
}
