//! Project-detail load status, used for the retry notice.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use crate::error::SiteError;
use crate::net::project::LoadOutcome;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProjectLoadStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

impl ProjectLoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Forget an in-flight load whose modal was closed.
    pub fn cancel_pending(&mut self) {
        if self.is_loading() {
            *self = Self::Idle;
        }
    }

    /// Status after a finished load, or `None` to leave it untouched.
    ///
    /// Superseded responses belong to a newer load. A page without a detail
    /// element aborts quietly; only fetch and parse failures offer a retry.
    pub fn from_load(result: &Result<LoadOutcome, SiteError>) -> Option<Self> {
        match result {
            Ok(LoadOutcome::Applied) | Err(SiteError::MissingDetail(_)) => Some(Self::Idle),
            Ok(LoadOutcome::Superseded) => None,
            Err(e) => Some(Self::Failed(e.user_message())),
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
