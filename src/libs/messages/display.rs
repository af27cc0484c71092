//! Display implementation converting [`Message`] variants into terminal text.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TRACKER MESSAGES ===
            Message::WorkingOn(task) => format!("Working on {}", task),
            Message::TwiddlingThumbs => "Twiddling thumbs".to_string(),
            Message::NoActiveTask => "No task".to_string(),
            Message::ActiveTask(task, duration) => format!("{} for {}", task, duration),

            // === REPORT MESSAGES ===
            Message::NothingLoggedToday => "Nothing logged today".to_string(),
            Message::LoggedTodayHeader(duration, percent) => format!("Logged today ({} - {:.0}%):", duration, percent),

            // === PUSH MESSAGES ===
            Message::NothingToPush => "Nothing to push".to_string(),
            Message::WorklogPushed(task, duration) => format!("Pushed work log for {}: {}", task, duration),
            Message::WorklogPushFailed(task, diagnostic) => format!("Failed to push work log for {} - {}", task, diagnostic),

            // === CLEAR MESSAGES ===
            Message::ConfirmClearLogs(target) => format!("Are you sure you want to clear logs for {}?", target),
            Message::LogsDeleted(target) => format!("Deleted logs for {}", target),
            Message::NothingDeleted => "Nothing deleted".to_string(),

            // === TASK LISTING MESSAGES ===
            Message::NoOpenSubtasks => "No assigned open subtasks".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleJira => "Jira settings".to_string(),
            Message::JiraNotConfigured => "Jira is not configured. Run `timl init` first".to_string(),
            Message::PromptJiraUrl => "Enter the Jira base URL".to_string(),
            Message::PromptJiraLogin => "Enter your Jira username".to_string(),
            Message::PromptJiraApiToken => "Enter your Jira API token".to_string(),
            Message::PromptDbFile => "Enter the database file name".to_string(),
        };
        write!(f, "{}", text)
    }
}
