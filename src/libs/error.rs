//! Application error taxonomy.
//!
//! Every fallible layer (db, api, commands) surfaces one of these variants so
//! the process boundary can print a single message and pick an exit code.
//! Per-row push failures are deliberately NOT errors; they are reported inline
//! and the batch continues (see `commands::push`).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed user input, e.g. an empty task on `start`.
    #[error("error: {0}")]
    Validation(String),

    /// Failure resolving or creating the application data directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The local database could not be opened or a statement failed.
    #[error("error: failed to access db - {0}")]
    Storage(#[from] rusqlite::Error),

    /// Transport-level failure talking to the remote tracker.
    #[error("error: request failed - {0}")]
    Http(#[from] reqwest::Error),

    /// The remote tracker answered with a non-success status.
    #[error("error: {message} ({status})")]
    Remote { status: u16, message: String },
}
