//! Timestamp utilities
//!
//! Server-assigned timestamps are stored as RFC 3339 text so they sort
//! lexicographically in the same order as chronologically.

use chrono::{DateTime, SecondsFormat, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Format a timestamp for storage (RFC 3339, millisecond precision, UTC)
pub fn to_stored(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current timestamp in stored form
pub fn now_stored() -> String {
    to_stored(now())
}

/// Parse a stored timestamp, if it parses
pub fn from_stored(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
