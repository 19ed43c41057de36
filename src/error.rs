use std::io;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("failed to connect to Jira ({status}): {body}")]
    Connectivity { status: StatusCode, body: String },
    #[error("Jira {operation} failed ({status}): {body}")]
    Tracker {
        operation: &'static str,
        status: StatusCode,
        body: String,
    },
    #[error("request to Jira failed: {0}")]
    Http(String),
    #[error("unexpected Jira response: {0}")]
    Parse(String),
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("transition failed: {0}")]
    Transition(String),
    #[error("version control error: {0}")]
    VersionControl(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
