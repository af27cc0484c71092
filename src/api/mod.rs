//! API client for the remote issue tracker.
//!
//! The [`WorklogApi`] trait is the seam between push reconciliation and the
//! concrete Jira client, so the reconciliation flow can be exercised in tests
//! against a simulated remote.

use crate::libs::error::AppError;

pub mod jira;

pub use jira::{Jira, JiraConfig};

/// Remote worklog submission interface.
#[allow(async_fn_in_trait)]
pub trait WorklogApi {
    /// Submits one worklog record: the interval's start in the remote's
    /// timestamp format and its duration in seconds.
    ///
    /// `Ok(())` means the remote acknowledged the record. A non-success
    /// response surfaces as [`AppError::Remote`] carrying the status code and
    /// whatever diagnostic the remote supplied.
    async fn submit_worklog(&self, task: &str, started: &str, seconds: i64) -> Result<(), AppError>;
}
