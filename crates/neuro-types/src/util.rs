use crate::{Error, Result};
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};

/// Parse an ISO-8601 timestamp as sent by the platform API.
///
/// Zoned timestamps (`2018-09-25T12:28:21.298672+00:00`) keep their offset.
/// Naive ones (`2018-09-25T12:28:21.298672`) are read as local time.
pub fn parse_timestamp(ts: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Ok(dt);
    }

    let naive = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|_| Error::Timestamp(ts.to_string()))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| Error::Timestamp(ts.to_string()))
}
