//! Theme persistence and the dark-mode marker.
//!
//! Reads the visitor's preference from storage and toggles the configured
//! dark class on `<body>`. Toggling writes `"dark"` or `"light"` back under
//! the configured key. The marker only exists in a browser; elsewhere
//! `apply` is a no-op.
//!
//! TRADE-OFFS
//! ==========
//! Theme is cosmetic, so storage failures are logged and the page carries on
//! with the in-memory value.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::theme::Theme;
use crate::util::storage::PreferenceStorage;

#[derive(Clone, Debug)]
pub struct ThemeStore<S> {
    storage: S,
    key: String,
    dark_class: String,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    pub fn new(storage: S, key: impl Into<String>, dark_class: impl Into<String>) -> Self {
        Self { storage, key: key.into(), dark_class: dark_class.into() }
    }

    pub fn from_config(storage: S, config: &SiteConfig) -> Self {
        Self::new(storage, config.theme_storage_key.clone(), config.dark_class.clone())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the stored preference. Unreadable storage counts as light.
    pub fn read_preference(&self) -> Theme {
        match self.storage.read(&self.key) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(e) => {
                log::warn!("theme preference unreadable, using light: {e}");
                Theme::Light
            }
        }
    }

    /// Apply the stored preference to the page and return it.
    pub fn apply_persisted(&self) -> Theme {
        let theme = self.read_preference();
        if let Err(e) = apply(theme, &self.dark_class) {
            log::warn!("could not apply theme: {e}");
        }
        theme
    }

    /// Flip the theme, update the marker, and persist the result.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        if let Err(e) = apply(next, &self.dark_class) {
            log::warn!("could not apply theme: {e}");
        }
        if let Err(e) = self.persist(next) {
            log::warn!("theme preference not saved: {e}");
        }
        next
    }

    /// # Errors
    ///
    /// Propagates storage write failures.
    pub fn persist(&self, theme: Theme) -> Result<(), SiteError> {
        self.storage.write(&self.key, theme.as_str())
    }
}

/// Add or remove `dark_class` on `<body>`.
///
/// # Errors
///
/// Returns `MissingElement` when the document has no body.
pub fn apply(theme: Theme, dark_class: &str) -> Result<(), SiteError> {
    #[cfg(feature = "csr")]
    {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .ok_or(SiteError::MissingElement("body"))?;
        let class_list = body.class_list();
        let result = if theme.is_dark() { class_list.add_1(dark_class) } else { class_list.remove_1(dark_class) };
        result.map_err(|e| SiteError::Dom(format!("{e:?}")))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (theme, dark_class);
        Ok(())
    }
}
