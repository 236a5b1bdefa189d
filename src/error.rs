//! Error handling for the resume match client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchClientError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Non-success answer from the analysis service. Displays as the
    /// server-supplied message so it can be shown to the user verbatim.
    #[error("{message}")]
    Service { status: u16, message: String },

    #[error("Failed to fetch jobs")]
    JobSearchFailed { status: u16 },

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

pub type Result<T> = std::result::Result<T, MatchClientError>;
