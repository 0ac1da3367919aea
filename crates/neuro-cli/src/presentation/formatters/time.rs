use chrono::{DateTime, Duration, FixedOffset, Local, TimeZone, Utc};
use neuro_types::parse_timestamp;

/// Formats job timestamps as "N minutes ago" while they are recent and as a
/// calendar date afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTime {
    window: Duration,
}

impl Default for RelativeTime {
    fn default() -> Self {
        Self::new(Duration::days(1))
    }
}

impl RelativeTime {
    pub fn new(window: Duration) -> Self {
        Self { window }
    }

    pub fn from_hours(hours: u32) -> Self {
        Self::new(Duration::hours(i64::from(hours)))
    }

    /// Render an ISO-8601 stamp; anything unparseable comes back verbatim.
    pub fn format_str(&self, ts: &str, now: DateTime<Utc>) -> String {
        match parse_timestamp(ts) {
            Ok(dt) => self.format(&dt, now),
            Err(_) => ts.to_string(),
        }
    }

    pub fn format(&self, ts: &DateTime<FixedOffset>, now: DateTime<Utc>) -> String {
        let delta = now.signed_duration_since(ts.with_timezone(&Utc));

        if delta >= self.window {
            return ts.format("%b %d %Y").to_string();
        }

        let seconds = delta.num_seconds();
        match seconds {
            ..=0 => "now".to_string(),
            1 => "a second ago".to_string(),
            2..=59 => format!("{} seconds ago", seconds),
            60..=119 => "a minute ago".to_string(),
            120..=3599 => format!("{} minutes ago", seconds / 60),
            3600..=7199 => "an hour ago".to_string(),
            7200..=86399 => format!("{} hours ago", seconds / 3600),
            86400..=172799 => "a day ago".to_string(),
            _ => format!("{} days ago", seconds / 86400),
        }
    }
}

/// Local wall-clock string in the classic `ctime` layout,
/// e.g. `Tue Sep 25 12:28:21 2018`.
pub fn format_ctime(unix_seconds: f64) -> String {
    let secs = unix_seconds.floor() as i64;
    let nanos = ((unix_seconds - unix_seconds.floor()) * 1e9) as u32;
    match Local.timestamp_opt(secs, nanos).earliest() {
        Some(dt) => dt.format("%a %b %e %H:%M:%S %Y").to_string(),
        None => unix_seconds.to_string(),
    }
}

/// `YYYY-MM-DD HH:MM:SS` in local time, as `ls -l` shows it.
pub fn format_local_datetime(unix_seconds: i64) -> String {
    match Local.timestamp_opt(unix_seconds, 0).earliest() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => unix_seconds.to_string(),
    }
}
