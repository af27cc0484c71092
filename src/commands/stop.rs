use crate::db::time_logs::TimeLogs;
use crate::libs::{config::Config, messages::Message};
use crate::msg_print;
use anyhow::Result;
use chrono::Utc;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut logs = TimeLogs::new(config.db_file())?;

    logs.stop(Utc::now().naive_utc())?;
    msg_print!(Message::TwiddlingThumbs);

    Ok(())
}
