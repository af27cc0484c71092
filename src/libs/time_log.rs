//! Time log entry model shared by the db accessors and reporting.

use chrono::NaiveDateTime;

/// Storage format for timestamps: UTC, sub-second precision.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// One logged work interval.
///
/// `end_time` is absent while the task is active; at most one entry in the
/// whole log may be open at a time, and it is always the newest entry.
#[derive(Debug, Clone)]
pub struct TimeLogEntry {
    pub id: i64,
    pub pushed: bool,
    pub task: String,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
}

impl TimeLogEntry {
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Elapsed seconds of this interval, using `now` as the effective end
    /// while the interval is still open.
    pub fn duration_seconds(&self, now: NaiveDateTime) -> i64 {
        let end = self.end_time.unwrap_or(now);
        (end - self.start_time).num_seconds().max(0)
    }
}

/// Formats a timestamp for storage.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(DATETIME_FORMAT).to_string()
}

/// Parses a stored timestamp.
pub fn parse_timestamp(value: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
}
