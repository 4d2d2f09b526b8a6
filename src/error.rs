//! Crate-wide error type.
//!
//! ERROR HANDLING
//! ==============
//! Browser-facing helpers return `Result<_, SiteError>` so components can log
//! and degrade instead of faulting. Nothing here is shown to the user except
//! the project-load retry notice.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteError {
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error("dom error: {0}")]
    Dom(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    HttpStatus(u16),
    #[error("malformed document: {0}")]
    Parse(String),
    #[error("no element with class `{0}` in document")]
    MissingDetail(String),
    #[error("invalid config: {0}")]
    Config(String),
}

impl SiteError {
    /// Short text for the retry notice.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) | Self::HttpStatus(_) => "Couldn't load the project. Check your connection.".to_owned(),
            Self::Parse(_) => "The project page couldn't be read.".to_owned(),
            other => other.to_string(),
        }
    }
}
