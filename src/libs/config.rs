//! Configuration management.
//!
//! Settings are stored as JSON in the platform application-data directory
//! (resolved by [`DataStorage`]). The `init` command runs an interactive
//! wizard that fills in the Jira connection parameters and, optionally, a
//! custom database file name. There is no process-wide configuration
//! singleton: every command reads the file and passes the values along
//! explicitly.

use super::data_storage::DataStorage;
use crate::api::jira::JiraConfig;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Jira connection parameters; required for `push` and `tasks`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jira: Option<JiraConfig>,

    /// Database file name inside the application data directory.
    /// Falls back to the default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_file: Option<String>,
}

impl Config {
    /// Reads the configuration file, returning defaults when none exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    pub fn init() -> Result<Self> {
        let config = Self::read().unwrap_or_default();

        let jira = JiraConfig::init(&config.jira)?;
        let db_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDbFile.to_string())
            .default(config.db_file.unwrap_or_else(|| DB_FILE_NAME.to_string()))
            .interact_text()?;

        Ok(Config {
            jira: Some(jira),
            db_file: Some(db_file),
        })
    }

    /// Database file name to open, honoring the configured override.
    pub fn db_file(&self) -> &str {
        self.db_file.as_deref().unwrap_or(DB_FILE_NAME)
    }

    /// Jira configuration, or an error pointing the user at `timl init`.
    pub fn jira(&self) -> Result<&JiraConfig> {
        self.jira.as_ref().ok_or_else(|| msg_error_anyhow!(Message::JiraNotConfigured))
    }
}
