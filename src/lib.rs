//! # timl - Jira Time Logger
//!
//! A command-line utility for logging work intervals against Jira issues and
//! pushing the logged time to the Jira worklog API.
//!
//! ## Features
//!
//! - **Interval Tracking**: `start`/`stop` semantics with a single active task
//! - **Daily Reports**: chronological log and per-task summary for today
//! - **Worklog Push**: submits unpushed intervals to Jira, one row at a time
//! - **Task Listing**: assigned open subtasks straight from Jira
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timl::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
