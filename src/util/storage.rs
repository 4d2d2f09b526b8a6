//! Key-value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserStorage` wraps `window.localStorage` under `csr` and reports
//! `StorageUnavailable` everywhere else. `MemoryStorage` backs tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::SiteError;

pub trait PreferenceStorage {
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, SiteError>;

    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, SiteError> {
    web_sys::window()
        .ok_or(SiteError::StorageUnavailable)?
        .local_storage()
        .map_err(|e| SiteError::Storage(format!("{e:?}")))?
        .ok_or(SiteError::StorageUnavailable)
}

impl PreferenceStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, SiteError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| SiteError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(SiteError::StorageUnavailable)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SiteError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| SiteError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(SiteError::StorageUnavailable)
        }
    }
}

/// In-memory store. `read_only` makes every write fail.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        storage
    }

    pub fn read_only() -> Self {
        Self { read_only: true, ..Self::default() }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, SiteError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SiteError> {
        if self.read_only {
            return Err(SiteError::Storage("storage is read-only".to_owned()));
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
