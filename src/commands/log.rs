use crate::db::time_logs::TimeLogs;
use crate::libs::{
    config::Config,
    formatter::{human_duration, WORKDAY_SECONDS},
    messages::Message,
    report::daily_log,
    view::View,
};
use crate::msg_print;
use anyhow::Result;
use chrono::Utc;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut logs = TimeLogs::new(config.db_file())?;

    // Stored timestamps are UTC, so the day boundary is UTC midnight.
    let now = Utc::now().naive_utc();
    let day_start = now.date().and_hms_opt(0, 0, 0).unwrap();

    let entries = logs.fetch_since(day_start)?;
    let active_task = logs.active_task()?;

    match daily_log(&entries, active_task.as_deref(), now, WORKDAY_SECONDS) {
        Some(report) => {
            msg_print!(Message::LoggedTodayHeader(human_duration(report.total_seconds), report.percent));
            View::log(&report);
        }
        None => msg_print!(Message::NothingLoggedToday),
    }

    Ok(())
}
