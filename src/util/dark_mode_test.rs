use super::*;
use crate::util::storage::MemoryStorage;

fn store(storage: MemoryStorage) -> ThemeStore<MemoryStorage> {
    ThemeStore::new(storage, "theme", "dark")
}

// =============================================================
// Reading
// =============================================================

#[test]
fn read_preference_defaults_to_light() {
    assert_eq!(store(MemoryStorage::new()).read_preference(), Theme::Light);
}

#[test]
fn read_preference_honours_stored_dark() {
    let store = store(MemoryStorage::with_entry("theme", "dark"));
    assert_eq!(store.read_preference(), Theme::Dark);
}

#[test]
fn read_preference_treats_garbage_as_light() {
    let store = store(MemoryStorage::with_entry("theme", ":root"));
    assert_eq!(store.read_preference(), Theme::Light);
}

#[test]
fn apply_persisted_returns_stored_theme() {
    let store = store(MemoryStorage::with_entry("theme", "dark"));
    assert_eq!(store.apply_persisted(), Theme::Dark);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_falls_back_to_light_natively() {
    let store = ThemeStore::from_config(crate::util::storage::BrowserStorage, &SiteConfig::default());
    assert_eq!(store.read_preference(), Theme::Light);
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggle_persists_each_new_state() {
    let store = store(MemoryStorage::new());
    let after_first = store.toggle(Theme::Light);
    assert_eq!(after_first, Theme::Dark);
    assert_eq!(store.storage().get("theme").as_deref(), Some("dark"));

    let after_second = store.toggle(after_first);
    assert_eq!(after_second, Theme::Light);
    assert_eq!(store.storage().get("theme").as_deref(), Some("light"));
}

#[test]
fn toggle_twice_round_trips_and_matches_storage() {
    let store = store(MemoryStorage::with_entry("theme", "dark"));
    let start = store.read_preference();
    let end = store.toggle(store.toggle(start));
    assert_eq!(end, start);
    assert_eq!(store.read_preference(), end);
}

#[test]
fn toggle_survives_storage_failure() {
    let store = store(MemoryStorage::read_only());
    assert_eq!(store.toggle(Theme::Light), Theme::Dark);
    assert!(store.persist(Theme::Dark).is_err());
}

#[test]
fn from_config_uses_configured_key() {
    let config = SiteConfig { theme_storage_key: "folio-theme".to_owned(), ..SiteConfig::default() };
    let store = ThemeStore::from_config(MemoryStorage::new(), &config);
    store.toggle(Theme::Light);
    assert_eq!(store.storage().get("folio-theme").as_deref(), Some("dark"));
    assert_eq!(store.storage().get("theme"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn apply_is_noop_but_callable() {
    assert!(apply(Theme::Dark, "dark").is_ok());
    assert!(apply(Theme::Light, "dark").is_ok());
}
