use crate::db::time_logs::TimeLogs;
use crate::libs::{config::Config, messages::Message};
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClearArgs {
    #[arg(help = "Only delete intervals logged against this task")]
    task: Option<String>,
}

pub fn cmd(clear_args: ClearArgs) -> Result<()> {
    let target = clear_args.task.as_deref().map(str::to_uppercase).unwrap_or_else(|| "all".to_string());

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmClearLogs(target.clone()).to_string())
        .default(false)
        .interact()?;

    if !confirmed {
        msg_print!(Message::NothingDeleted);
        return Ok(());
    }

    let config = Config::read()?;
    let mut logs = TimeLogs::new(config.db_file())?;
    logs.clear(clear_args.task.as_deref())?;
    msg_success!(Message::LogsDeleted(target));

    Ok(())
}
