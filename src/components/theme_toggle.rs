//! Dark/light theme switch.

use leptos::prelude::*;

use crate::state::theme::Theme;
use crate::util::dark_mode::ThemeStore;
use crate::util::storage::BrowserStorage;

/// Checkbox switch; checked means dark. Each change flips the theme and
/// persists it.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let store = StoredValue::new(expect_context::<ThemeStore<BrowserStorage>>());

    let on_change = move |_| {
        let next = store.with_value(|s| s.toggle(theme.get_untracked()));
        theme.set(next);
    };

    view! {
        <label class="theme-switch" title="Toggle dark mode">
            <input
                type="checkbox"
                id="theme-toggle"
                prop:checked=move || theme.get().is_dark()
                on:change=on_change
            />
            <span class="slider"></span>
        </label>
    }
}
