//! Duration and timestamp formatting for user-facing output and the Jira API.
//!
//! All durations displayed by the application go through [`human_duration`],
//! which decomposes a number of seconds into days/hours/minutes and joins the
//! nonzero components with ", ". Seconds are only displayed when no larger
//! unit is present, so `125` renders as "2 mins" rather than "2 mins, 5 secs".
//!
//! [`round_seconds`] implements the ceiling-to-minute rule the Jira worklog
//! submission uses: a 1-second interval reports 60 seconds, an exact multiple
//! of 60 is unchanged.

use chrono::NaiveDateTime;

pub const SECONDS_IN_MINUTE: i64 = 60;
pub const SECONDS_IN_HOUR: i64 = 3600;
pub const SECONDS_IN_DAY: i64 = 86400;

/// Full workday used for the daily percentage metric: 6 hours.
pub const WORKDAY_SECONDS: i64 = 21600;

/// Timestamp representation required by the Jira worklog API:
/// ISO-8601 with millisecond precision and an explicit UTC offset token.
const DATETIME_FORMAT_JIRA: &str = "%Y-%m-%dT%H:%M:%S%.3f+0000";

const TIME_FORMAT: &str = "%H:%M";

/// Formats a duration in seconds as a human-readable string.
///
/// Components larger than zero are rendered largest to smallest and joined
/// with ", ". When every component is zero the seconds are rendered instead,
/// so a zero duration reads "0 secs".
///
/// ```
/// use timl::libs::formatter::human_duration;
///
/// assert_eq!(human_duration(0), "0 secs");
/// assert_eq!(human_duration(65), "1 min");
/// assert_eq!(human_duration(3661), "1 hr, 1 min");
/// ```
pub fn human_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let days = seconds / SECONDS_IN_DAY;
    let hours = seconds % SECONDS_IN_DAY / SECONDS_IN_HOUR;
    let minutes = seconds % SECONDS_IN_HOUR / SECONDS_IN_MINUTE;
    let secs = seconds % SECONDS_IN_MINUTE;

    let mut summary = Vec::new();
    if days > 0 {
        summary.push(format!("{} day{}", days, plural(days)));
    }
    if hours > 0 {
        summary.push(format!("{} hr{}", hours, plural(hours)));
    }
    if minutes > 0 {
        summary.push(format!("{} min{}", minutes, plural(minutes)));
    }

    if summary.is_empty() {
        format!("{} sec{}", secs, plural(secs))
    } else {
        summary.join(", ")
    }
}

/// Rounds seconds up to the next whole multiple of 60.
///
/// Exact multiples are unchanged: `round_seconds(60) == 60`.
pub fn round_seconds(seconds: i64) -> i64 {
    // Equivalent to `seconds.div_ceil(SECONDS_IN_MINUTE)`; the method is
    // feature-gated on this toolchain.
    let quotient = seconds / SECONDS_IN_MINUTE;
    let remainder = seconds % SECONDS_IN_MINUTE;
    let rounded = if remainder > 0 { quotient + 1 } else { quotient };
    rounded * SECONDS_IN_MINUTE
}

/// Converts a stored UTC timestamp into the Jira worklog `started` format.
pub fn jira_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(DATETIME_FORMAT_JIRA).to_string()
}

/// Formats the clock time of a timestamp as "HH:MM" for log display.
pub fn clock_time(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIME_FORMAT).to_string()
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
