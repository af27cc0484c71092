use crate::db::time_logs::TimeLogs;
use crate::libs::{config::Config, formatter::human_duration, messages::Message};
use crate::msg_print;
use anyhow::Result;
use chrono::Utc;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut logs = TimeLogs::new(config.db_file())?;

    let now = Utc::now().naive_utc();
    match logs.last()?.filter(|entry| entry.is_open()) {
        Some(entry) => {
            let duration = human_duration(entry.duration_seconds(now));
            msg_print!(Message::ActiveTask(entry.task, duration));
        }
        None => msg_print!(Message::NoActiveTask),
    }

    Ok(())
}
