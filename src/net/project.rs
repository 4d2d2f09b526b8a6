//! Project-detail loading for the project modal.
//!
//! Client-side (csr): one `GET` via `gloo-net`, no headers, no retry.
//! Native builds: `fetch_document` reports a network error so the loader's
//! bookkeeping can still be exercised in tests.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned to the caller, which logs it and surfaces the
//! retry notice. The modal is only shown on success, and only if no newer
//! request or close happened while the fetch was in flight.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::modal::{ModalContent, ModalId, ModalsState, RequestToken};
use crate::util::fragment::extract_detail;

/// Fetch `path` and return the response body as text.
///
/// # Errors
///
/// `Network` when the request or body read fails, `HttpStatus` on non-2xx.
pub async fn fetch_document(path: &str) -> Result<String, SiteError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(path)
            .send()
            .await
            .map_err(|e| SiteError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(SiteError::HttpStatus(resp.status()));
        }
        resp.text().await.map_err(|e| SiteError::Network(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(SiteError::Network("fetch is only available in the browser".to_owned()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Content installed and modal shown.
    Applied,
    /// A newer request or a close made this response irrelevant.
    Superseded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectLoader {
    document: String,
    detail_class: String,
    back_href: String,
}

impl ProjectLoader {
    pub fn new(document: impl Into<String>, detail_class: impl Into<String>, back_href: impl Into<String>) -> Self {
        Self { document: document.into(), detail_class: detail_class.into(), back_href: back_href.into() }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.project_document.clone(), config.detail_class.clone(), config.back_link_href.clone())
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    /// Register a new load against the project modal.
    pub fn begin(&self, modals: &mut ModalsState) -> RequestToken {
        modals.begin_request(ModalId::Project)
    }

    /// Turn a fetch result into modal content.
    ///
    /// Superseded responses are dropped before parsing, successful or not.
    ///
    /// # Errors
    ///
    /// Propagates the fetch error, or `MissingDetail`/`Parse` from extraction.
    pub fn finish(
        &self,
        modals: &mut ModalsState,
        token: RequestToken,
        body: Result<String, SiteError>,
    ) -> Result<LoadOutcome, SiteError> {
        if !modals.is_current(token) {
            return Ok(LoadOutcome::Superseded);
        }
        let html = body?;
        let fragment = extract_detail(&html, &self.detail_class, &self.back_href)?;
        if fragment.removed_back_links > 0 {
            log::debug!("removed {} back link(s) from {}", fragment.removed_back_links, self.document);
        }
        if modals.complete_request(token, ModalContent::Fragment(fragment.html)) {
            Ok(LoadOutcome::Applied)
        } else {
            Ok(LoadOutcome::Superseded)
        }
    }
}
