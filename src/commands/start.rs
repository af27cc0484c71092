use crate::db::time_logs::TimeLogs;
use crate::libs::{config::Config, messages::Message};
use crate::msg_print;
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    #[arg(required = true, help = "The task to start logging time for")]
    task: String,
}

pub fn cmd(start_args: StartArgs) -> Result<()> {
    let config = Config::read()?;
    let mut logs = TimeLogs::new(config.db_file())?;

    let task = logs.start(&start_args.task, Utc::now().naive_utc())?;
    msg_print!(Message::WorkingOn(task));

    Ok(())
}
