//! Time related utils.

use crate::{Error, Result};
use chrono::{NaiveDateTime, Utc};

/// DateTime is the alias of `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// RFC 1123 with the zone written as `UTC`: "Tue, 10 Nov 2009 23:00:00 UTC"
///
/// The PlaceNext server formats its own timestamps this way, so the value in
/// `Date` and `X-PlaceNext-Date` must match it byte for byte.
const RFC1123_UTC: &str = "%a, %d %b %Y %H:%M:%S UTC";

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into RFC 1123 as used by the `Date` headers.
pub fn format_rfc1123(t: DateTime) -> String {
    t.format(RFC1123_UTC).to_string()
}

/// Parse a RFC 1123 `UTC` timestamp.
pub fn parse_rfc1123(s: &str) -> Result<DateTime> {
    let t = NaiveDateTime::parse_from_str(s, RFC1123_UTC).map_err(|e| {
        Error::request_invalid(format!("parse rfc1123 date {s:?} failed")).with_source(e)
    })?;

    Ok(t.and_utc())
}

/// Nanoseconds since the unix epoch.
pub fn unix_nanos(t: DateTime) -> Result<i64> {
    t.timestamp_nanos_opt()
        .ok_or_else(|| Error::request_invalid(format!("{t} is out of the nanosecond range")))
}
