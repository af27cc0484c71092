//! Push reconciliation: submit unpushed intervals to the remote worklog API.
//!
//! Pushing finalizes the day's work, so the open interval, if any, is closed
//! first. Each unpushed row is then submitted independently: on acceptance
//! its `pushed` flag is set, on failure the row is left untouched and the
//! remaining rows are still attempted. A failed row is retried only on the
//! next invocation.

use crate::api::{Jira, WorklogApi};
use crate::db::time_logs::TimeLogs;
use crate::libs::{
    config::Config,
    formatter::{human_duration, jira_timestamp, round_seconds},
    messages::Message,
};
use crate::{msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::{NaiveDateTime, Utc};

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let jira = Jira::new(config.jira()?);
    let mut logs = TimeLogs::new(config.db_file())?;

    push_unpushed(&mut logs, &jira, Utc::now().naive_utc()).await?;

    Ok(())
}

/// Runs the reconciliation flow against any worklog backend.
///
/// Durations are rounded up to the next whole minute before submission, so a
/// 45-second interval reports 60 seconds.
pub async fn push_unpushed<A: WorklogApi>(logs: &mut TimeLogs, api: &A, now: NaiveDateTime) -> Result<()> {
    logs.stop(now)?;

    let entries = logs.fetch_unpushed()?;
    if entries.is_empty() {
        msg_print!(Message::NothingToPush);
        return Ok(());
    }

    for entry in entries {
        let seconds = entry.duration_seconds(now);
        let started = jira_timestamp(&entry.start_time);

        match api.submit_worklog(&entry.task, &started, round_seconds(seconds)).await {
            Ok(()) => {
                logs.mark_pushed(entry.id)?;
                msg_success!(Message::WorklogPushed(entry.task, human_duration(seconds)));
            }
            Err(err) => {
                msg_warning!(Message::WorklogPushFailed(entry.task, err.to_string()));
            }
        }
    }

    Ok(())
}
