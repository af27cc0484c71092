use crate::api::Jira;
use crate::libs::{config::Config, messages::Message, view::View};
use crate::msg_print;
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let jira = Jira::new(config.jira()?);

    let tasks = jira.search_open_subtasks().await?;
    if tasks.is_empty() {
        msg_print!(Message::NoOpenSubtasks);
        return Ok(());
    }

    View::tasks(&tasks);

    Ok(())
}
