//! Team member profile dialog and its card triggers.

use leptos::prelude::*;

use crate::components::modal_shell::ModalShell;
use crate::config::SiteConfig;
use crate::state::modal::{ModalId, ModalsState};
use crate::state::profiles::{Profile, ProfileDirectory, target_slug};

/// Two-part profile layout rendered into the profile modal's slot.
#[component]
pub fn ProfileContent(profile: Profile) -> impl IntoView {
    view! {
        <div class="profile-content">
            <div class="profile-image">
                <img src=profile.image alt=profile.name/>
            </div>
            <div class="profile-text">
                <h1>"Hello, I'm " <br/> {profile.name}</h1>
                <p>{profile.description}</p>
            </div>
        </div>
    }
}

/// Profile modal instance.
#[component]
pub fn ProfileModal(backdrop_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    view! { <ModalShell id=ModalId::Profile backdrop_ref=backdrop_ref/> }
}

/// Card grid linking to each member's profile via `#<id>` targets.
#[component]
pub fn TeamCards() -> impl IntoView {
    let modals = expect_context::<RwSignal<ModalsState>>();
    let directory = expect_context::<ProfileDirectory>();
    let show_unknown = expect_context::<SiteConfig>().show_unknown_profiles;
    let lookup = StoredValue::new(directory.clone());

    let open_target = move |href: &str| {
        let slug = target_slug(href);
        log::debug!("opening profile modal for `{slug}`");
        let found = lookup.with_value(|dir| modals.try_update(|m| m.open_profile(dir, slug, show_unknown)));
        if found.flatten().is_none() {
            log::info!("no profile for `{slug}`");
        }
    };

    let cards = directory
        .members()
        .map(|(id, profile)| {
            let href = id.target();
            let target = href.clone();
            let profile = *profile;
            view! {
                <a
                    class="card-link"
                    href=href
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        open_target(&target);
                    }
                >
                    <div class="card">
                        <img src=profile.image alt=profile.name/>
                        <h3>{profile.name}</h3>
                    </div>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="team-grid">{cards}</div> }
}
