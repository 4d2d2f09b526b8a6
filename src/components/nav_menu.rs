//! Site header navigation with the collapsible burger menu.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::SiteConfig;
use crate::state::nav::NavState;

/// Header navigation and theme switch. The burger flips the menu open/closed; following any
/// link closes it.
#[component]
pub fn NavMenu() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let links = expect_context::<SiteConfig>().nav_links;

    let on_burger = move |_| {
        let mut open = false;
        nav.update(|n| open = n.toggle());
        log::debug!("nav menu {}", if open { "opened" } else { "closed" });
    };

    let items = links
        .into_iter()
        .map(|link| {
            view! {
                <li>
                    <a href=link.href on:click=move |_| nav.update(NavState::close)>
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="site-header">
            <button
                id="burger"
                class="burger"
                class:active=move || nav.get().open
                on:click=on_burger
                title="Menu"
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <nav id="nav-menu" class="nav-menu" class:active=move || nav.get().open>
                <ul>{items}</ul>
            </nav>
            <ThemeToggle/>
        </header>
    }
}
