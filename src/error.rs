// src/error.rs
use thiserror::Error;

use crate::specs::standings::Field;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: reqwest::StatusCode, url: String },

    #[error("malformed standings page: {0}")]
    Structure(&'static str),

    #[error("required columns not found: {}", fields_list(.0))]
    MissingColumns(Vec<Field>),

    #[error("roster: {0}")]
    Roster(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    /// Network-side failure: nothing usable came back from the server.
    pub fn is_transport(&self) -> bool {
        matches!(self, ScrapeError::Http(_) | ScrapeError::Status { .. })
    }

    /// The page arrived but does not hold a standings table we can read.
    pub fn is_structural(&self) -> bool {
        matches!(self, ScrapeError::Structure(_) | ScrapeError::MissingColumns(_))
    }
}

fn fields_list(fields: &[Field]) -> String {
    fields.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
}
