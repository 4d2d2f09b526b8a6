//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::SiteConfig;
use crate::net::project::ProjectLoader;
use crate::pages::home::HomePage;
use crate::state::{
    gallery::GalleryState, modal::ModalsState, nav::NavState, profiles::ProfileDirectory, project::ProjectLoadStatus,
};
use crate::util::dark_mode::ThemeStore;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Applies the persisted theme before the first render, provides all shared
/// state contexts, and sets up client-side routing.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    let theme_store = ThemeStore::from_config(BrowserStorage, &config);
    let theme = RwSignal::new(theme_store.apply_persisted());

    provide_context(RwSignal::new(NavState::default()));
    provide_context(theme);
    provide_context(RwSignal::new(GalleryState::from_config(&config)));
    provide_context(RwSignal::new(ModalsState::default()));
    provide_context(RwSignal::new(ProjectLoadStatus::default()));

    provide_context(ProfileDirectory::builtin());
    provide_context(ProjectLoader::from_config(&config));
    provide_context(theme_store);

    let title = config.title.clone();
    let stylesheet = config.stylesheet.clone();
    provide_context(config);

    view! {
        <Stylesheet id="site" href=stylesheet/>
        <Title text=title/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("index.html") view=HomePage/>
            </Routes>
        </Router>
    }
}
