//! Jira REST client.
//!
//! Two stateless calls against the Jira Cloud v3 API, both authenticated with
//! HTTP basic credentials (username + API token): an issue search for the
//! user's open subtasks, and a worklog submission per logged interval.

use super::WorklogApi;
use crate::libs::error::AppError;
use crate::libs::messages::Message;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const SEARCH_URL: &str = "rest/api/3/search";
const WORKLOG_URL: &str = "rest/api/3/issue";
const SEARCH_JQL: &str = "assignee = currentUser() AND issuetype in subtaskIssueTypes() and status != done";

#[derive(Serialize, Deserialize, Debug)]
pub struct JiraIssue {
    pub key: String,
    pub fields: JiraIssueFields,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JiraIssueFields {
    pub summary: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JiraSearchResults {
    pub issues: Vec<JiraIssue>,
}

#[derive(Serialize, Debug)]
struct WorklogRequest<'a> {
    started: &'a str,
    #[serde(rename = "timeSpentSeconds")]
    time_spent_seconds: i64,
}

#[derive(Debug)]
pub struct Jira {
    client: Client,
    config: JiraConfig,
}

impl Jira {
    pub fn new(config: &JiraConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Assigned subtasks not in a done state, as (key, summary) pairs.
    ///
    /// A non-success response aborts the whole listing.
    pub async fn search_open_subtasks(&self) -> Result<Vec<(String, String)>, AppError> {
        let url = format!("{}/{}", self.config.base_url(), SEARCH_URL);
        let res = self
            .client
            .get(&url)
            .query(&[("jql", SEARCH_JQL)])
            .basic_auth(&self.config.login, Some(&self.config.api_token))
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(AppError::Remote {
                status: res.status().as_u16(),
                message: "failed to get assigned tasks".to_string(),
            });
        }

        let results = res.json::<JiraSearchResults>().await?;
        Ok(results.issues.into_iter().map(|issue| (issue.key, issue.fields.summary)).collect())
    }
}

impl WorklogApi for Jira {
    async fn submit_worklog(&self, task: &str, started: &str, seconds: i64) -> Result<(), AppError> {
        let url = format!("{}/{}/{}/worklog", self.config.base_url(), WORKLOG_URL, task);
        let body = WorklogRequest {
            started,
            time_spent_seconds: seconds,
        };
        let res = self
            .client
            .post(&url)
            .json(&body)
            .basic_auth(&self.config.login, Some(&self.config.api_token))
            .send()
            .await?;

        let status = res.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(AppError::Remote {
                status: status.as_u16(),
                message: res.text().await.unwrap_or_default(),
            })
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JiraConfig {
    pub api_url: String,
    pub login: String,
    pub api_token: String,
}

impl JiraConfig {
    pub fn init(config: &Option<Self>) -> anyhow::Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: "".to_string(),
            login: "".to_string(),
            api_token: "".to_string(),
        });
        println!("{}", Message::ConfigModuleJira);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptJiraUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            login: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptJiraLogin.to_string())
                .default(config.login)
                .interact_text()?,
            api_token: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptJiraApiToken.to_string())
                .default(config.api_token)
                .interact_text()?,
        })
    }

    fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}
