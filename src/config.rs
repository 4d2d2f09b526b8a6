//! Site configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every name and path the page contract depends on (storage key, marker
//! classes, document paths, gallery page size) lives here. The host page may
//! override any subset by embedding a JSON object in
//! `<script type="application/json" id="site-config">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::SiteError;

pub const CONFIG_ELEMENT_ID: &str = "site-config";
pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_PROJECT_DOCUMENT: &str = "project-bank.html";

/// One gallery entry as described by the host page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GalleryItemConfig {
    pub href: String,
    pub image: String,
    #[serde(default)]
    pub alt: String,
}

/// Navigation link rendered inside the menu container.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub stylesheet: String,
    pub log_level: String,
    pub theme_storage_key: String,
    pub dark_class: String,
    pub nav_links: Vec<NavLink>,
    pub gallery_page_size: usize,
    pub gallery: Vec<GalleryItemConfig>,
    pub new_item: GalleryItemConfig,
    pub project_document: String,
    pub detail_class: String,
    pub back_link_href: String,
    pub show_unknown_profiles: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_owned(),
            stylesheet: "style.css".to_owned(),
            log_level: "info".to_owned(),
            theme_storage_key: DEFAULT_THEME_KEY.to_owned(),
            dark_class: "dark".to_owned(),
            nav_links: vec![
                nav_link("Home", "#home"),
                nav_link("About", "#about"),
                nav_link("Gallery", "#gallery"),
                nav_link("Team", "#team"),
            ],
            gallery_page_size: DEFAULT_PAGE_SIZE,
            gallery: Vec::new(),
            new_item: GalleryItemConfig {
                href: "project-new.html".to_owned(),
                image: "images/computer-program-coding-screen_53876-138060.avif".to_owned(),
                alt: "New Gallery Image".to_owned(),
            },
            project_document: DEFAULT_PROJECT_DOCUMENT.to_owned(),
            detail_class: "project-detail".to_owned(),
            back_link_href: "index.html".to_owned(),
            show_unknown_profiles: true,
        }
    }
}

fn nav_link(label: &str, href: &str) -> NavLink {
    NavLink { label: label.to_owned(), href: href.to_owned() }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override. Missing keys keep defaults.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Config` for malformed JSON or a zero page size.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| SiteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from the host page, falling back to defaults.
    pub fn load() -> Self {
        match read_embedded() {
            Ok(Some(raw)) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("config unavailable, using defaults: {e}");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), SiteError> {
        if self.gallery_page_size == 0 {
            return Err(SiteError::Config("gallery_page_size must be at least 1".to_owned()));
        }
        if self.theme_storage_key.is_empty() {
            return Err(SiteError::Config("theme_storage_key must not be empty".to_owned()));
        }
        Ok(())
    }

    /// Configured log level; unknown names fall back to `info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn read_embedded() -> Result<Option<String>, SiteError> {
    #[cfg(feature = "csr")]
    {
        let doc = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(SiteError::MissingElement("document"))?;
        Ok(doc
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
            .filter(|raw| !raw.trim().is_empty()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Ok(None)
    }
}
