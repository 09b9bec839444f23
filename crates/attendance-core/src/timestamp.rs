//! Wire format for timestamps in JSON responses.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// `createdAt`-style field: RFC 3339, UTC `Z` suffix, millisecond precision.
///
/// Use as `#[serde(serialize_with = "attendance_core::timestamp::millis")]`.
pub fn millis<S: Serializer>(at: &DateTime<Utc>, out: S) -> Result<S::Ok, S::Error> {
    out.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}
