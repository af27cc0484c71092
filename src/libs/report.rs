//! Daily log and summary aggregation.
//!
//! Both reports operate over the entries of the current day and use an
//! injected `now` timestamp as the effective end of a still-open interval,
//! which keeps the arithmetic deterministic in tests. An empty day yields
//! `None` rather than an empty report so callers can print the explicit
//! "Nothing logged today" sentinel.

use super::formatter::{clock_time, human_duration};
use super::time_log::TimeLogEntry;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Highlighting state of a displayed entry.
///
/// `Active` wins over `Pushed` when both would apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Active,
    Pushed,
    Plain,
}

impl EntryState {
    pub fn label(&self) -> &'static str {
        match self {
            EntryState::Active => "active",
            EntryState::Pushed => "pushed",
            EntryState::Plain => "",
        }
    }
}

/// One row of the chronological daily log.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub task: String,
    pub start: String,
    pub duration: String,
    pub state: EntryState,
}

/// One row of the per-task daily summary.
#[derive(Debug, Clone)]
pub struct SummaryLine {
    pub task: String,
    pub duration: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct DailyReport<T> {
    pub lines: Vec<T>,
    pub total_seconds: i64,
    pub percent: f64,
}

/// Builds the chronological daily log.
///
/// Entries are expected in creation order. Returns `None` when the day is
/// empty.
pub fn daily_log(entries: &[TimeLogEntry], active_task: Option<&str>, now: NaiveDateTime, workday_seconds: i64) -> Option<DailyReport<LogLine>> {
    if entries.is_empty() {
        return None;
    }

    let mut lines = Vec::new();
    let mut total_seconds = 0;
    for entry in entries {
        let seconds = entry.duration_seconds(now);
        total_seconds += seconds;
        let state = if active_task == Some(entry.task.as_str()) {
            EntryState::Active
        } else if entry.pushed {
            EntryState::Pushed
        } else {
            EntryState::Plain
        };
        lines.push(LogLine {
            task: entry.task.clone(),
            start: clock_time(&entry.start_time),
            duration: human_duration(seconds),
            state,
        });
    }

    Some(DailyReport {
        lines,
        total_seconds,
        percent: percent_of_workday(total_seconds, workday_seconds),
    })
}

/// Builds the per-task daily summary, tasks sorted lexicographically.
pub fn daily_summary(entries: &[TimeLogEntry], active_task: Option<&str>, now: NaiveDateTime, workday_seconds: i64) -> Option<DailyReport<SummaryLine>> {
    if entries.is_empty() {
        return None;
    }

    let mut durations: BTreeMap<&str, i64> = BTreeMap::new();
    for entry in entries {
        *durations.entry(entry.task.as_str()).or_insert(0) += entry.duration_seconds(now);
    }

    let mut lines = Vec::new();
    let mut total_seconds = 0;
    for (task, seconds) in durations {
        total_seconds += seconds;
        lines.push(SummaryLine {
            task: task.to_string(),
            duration: human_duration(seconds),
            active: active_task == Some(task),
        });
    }

    Some(DailyReport {
        lines,
        total_seconds,
        percent: percent_of_workday(total_seconds, workday_seconds),
    })
}

fn percent_of_workday(total_seconds: i64, workday_seconds: i64) -> f64 {
    total_seconds as f64 / workday_seconds as f64 * 100.0
}
