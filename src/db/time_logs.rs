//! Time log persistence and the interval tracker state machine.
//!
//! The tracker maintains the "current open interval" semantics over the
//! `timelogs` table: starting a task closes any open interval and opens a new
//! one, stopping closes the open interval without opening a new one. The open
//! interval, when it exists, is always the most recently created row, so
//! reading the last row is enough to find it.
//!
//! All mutating operations take an explicit `now` timestamp (UTC) instead of
//! consulting the database engine's clock, which keeps the day boundary and
//! the close/open ordering deterministic and testable.

use super::db::Db;
use crate::libs::error::AppError;
use crate::libs::time_log::{format_timestamp, parse_timestamp, TimeLogEntry};
use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SCHEMA_TIMELOGS: &str = "CREATE TABLE IF NOT EXISTS timelogs (
    id INTEGER PRIMARY KEY,
    pushed INTEGER NOT NULL DEFAULT 0,
    task TEXT NOT NULL,
    start_time TEXT NOT NULL,
    end_time TEXT
);";
const INSERT_LOG: &str = "INSERT INTO timelogs (task, start_time) VALUES (?1, ?2)";
const SELECT_COLUMNS: &str = "SELECT id, pushed, task, start_time, end_time FROM timelogs";
const UPDATE_END_TIME: &str = "UPDATE timelogs SET end_time = ?1 WHERE id = ?2";
const UPDATE_PUSHED: &str = "UPDATE timelogs SET pushed = 1 WHERE id = ?1";
const DELETE_ALL: &str = "DELETE FROM timelogs";
const DELETE_BY_TASK: &str = "DELETE FROM timelogs WHERE task = ?1";

pub struct TimeLogs {
    pub conn: Connection,
}

impl TimeLogs {
    pub fn new(db_file: &str) -> Result<TimeLogs, AppError> {
        let db = Db::new(db_file)?;
        db.conn.execute(SCHEMA_TIMELOGS, [])?;

        Ok(TimeLogs { conn: db.conn })
    }

    /// Starts logging time for `task`.
    ///
    /// Closes the open interval, if any, at `now` and creates a fresh entry
    /// with the uppercased task identifier. Starting the same task again opens
    /// a new interval rather than extending the old one. Returns the
    /// normalized task identifier.
    pub fn start(&mut self, task: &str, now: NaiveDateTime) -> Result<String, AppError> {
        let task = task.trim();
        if task.is_empty() {
            return Err(AppError::Validation("task is required when using start".to_string()));
        }

        self.stop(now)?;

        let task = task.to_uppercase();
        self.conn.execute(INSERT_LOG, params![task, format_timestamp(&now)])?;
        Ok(task)
    }

    /// Closes the open interval at `now`. No-op when nothing is active.
    pub fn stop(&mut self, now: NaiveDateTime) -> Result<(), AppError> {
        if let Some(entry) = self.last()? {
            if entry.is_open() {
                self.conn.execute(UPDATE_END_TIME, params![format_timestamp(&now), entry.id])?;
            }
        }
        Ok(())
    }

    /// The most recently created entry, open or not.
    pub fn last(&mut self) -> Result<Option<TimeLogEntry>, AppError> {
        let entry = self
            .conn
            .query_row(&format!("{} ORDER BY id DESC LIMIT 1", SELECT_COLUMNS), [], map_entry)
            .optional()?;
        Ok(entry)
    }

    /// Task identifier of the open interval, if any.
    pub fn active_task(&mut self) -> Result<Option<String>, AppError> {
        Ok(self.last()?.filter(|entry| entry.is_open()).map(|entry| entry.task))
    }

    /// All entries whose start time falls at or after `day_start`, in
    /// creation order. The caller decides where the day boundary lies.
    pub fn fetch_since(&mut self, day_start: NaiveDateTime) -> Result<Vec<TimeLogEntry>, AppError> {
        let mut stmt = self.conn.prepare(&format!("{} WHERE start_time >= ?1 ORDER BY id", SELECT_COLUMNS))?;
        let entry_iter = stmt.query_map(params![format_timestamp(&day_start)], map_entry)?;
        let mut entries = Vec::new();
        for entry in entry_iter {
            entries.push(entry?);
        }
        Ok(entries)
    }

    /// All entries not yet pushed to the remote tracker.
    pub fn fetch_unpushed(&mut self) -> Result<Vec<TimeLogEntry>, AppError> {
        let mut stmt = self.conn.prepare(&format!("{} WHERE pushed = 0 ORDER BY id", SELECT_COLUMNS))?;
        let entry_iter = stmt.query_map([], map_entry)?;
        let mut entries = Vec::new();
        for entry in entry_iter {
            entries.push(entry?);
        }
        Ok(entries)
    }

    /// Flags an entry as pushed. Never reversed.
    pub fn mark_pushed(&mut self, id: i64) -> Result<(), AppError> {
        self.conn.execute(UPDATE_PUSHED, params![id])?;
        Ok(())
    }

    /// Deletes all entries, or only those matching `task` (case-normalized).
    /// Returns the number of deleted rows.
    pub fn clear(&mut self, task: Option<&str>) -> Result<usize, AppError> {
        let deleted = match task {
            Some(task) => self.conn.execute(DELETE_BY_TASK, params![task.trim().to_uppercase()])?,
            None => self.conn.execute(DELETE_ALL, [])?,
        };
        Ok(deleted)
    }
}

fn map_entry(row: &Row) -> rusqlite::Result<TimeLogEntry> {
    let end_time = match row.get::<_, Option<String>>(4)? {
        Some(value) => Some(parse_column(4, &value)?),
        None => None,
    };
    Ok(TimeLogEntry {
        id: row.get(0)?,
        pushed: row.get::<_, i64>(1)? != 0,
        task: row.get(2)?,
        start_time: parse_column(3, &row.get::<_, String>(3)?)?,
        end_time,
    })
}

/// A malformed stored timestamp surfaces as a conversion failure instead of
/// a panic; the database file is user-visible and can be edited by hand.
fn parse_column(idx: usize, value: &str) -> rusqlite::Result<NaiveDateTime> {
    parse_timestamp(value).map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}
