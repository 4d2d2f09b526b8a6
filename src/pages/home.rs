//! Portfolio landing page: navigation, theme switch, gallery, team, dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It composes the components and owns the
//! page-level click listener that dismisses a modal when the click lands on
//! its backdrop rather than inside its content box.

use leptos::prelude::*;

use crate::components::gallery::Gallery;
use crate::components::nav_menu::NavMenu;
use crate::components::profile_modal::{ProfileModal, TeamCards};
use crate::components::project_modal::{ProjectLoadNotice, ProjectModal};
use crate::state::modal::ModalsState;
use crate::state::project::ProjectLoadStatus;

#[component]
pub fn HomePage() -> impl IntoView {
    let modals = expect_context::<RwSignal<ModalsState>>();
    let status = expect_context::<RwSignal<ProjectLoadStatus>>();
    let project_backdrop = NodeRef::<leptos::html::Div>::new();
    let profile_backdrop = NodeRef::<leptos::html::Div>::new();

    install_backdrop_dismissal(modals, status, project_backdrop, profile_backdrop);

    view! {
        <NavMenu/>
        <main class="site-main">
            <section id="projects" class="section">
                <h2>"Projects"</h2>
                <ProjectLoadNotice/>
                <Gallery/>
            </section>
            <section id="team" class="section">
                <h2>"Team"</h2>
                <TeamCards/>
            </section>
        </main>
        <ProjectModal backdrop_ref=project_backdrop/>
        <ProfileModal backdrop_ref=profile_backdrop/>
    }
}

/// Close a modal when a click lands exactly on its backdrop element.
#[cfg(feature = "csr")]
fn install_backdrop_dismissal(
    modals: RwSignal<ModalsState>,
    status: RwSignal<ProjectLoadStatus>,
    project_backdrop: NodeRef<leptos::html::Div>,
    profile_backdrop: NodeRef<leptos::html::Div>,
) {
    use crate::state::modal::ModalId;

    let backdrop = move |id: ModalId| match id {
        ModalId::Project => project_backdrop,
        ModalId::Profile => profile_backdrop,
    };
    let handle = window_event_listener(leptos::ev::click, move |ev| {
        let Some(target) = ev.target() else {
            return;
        };
        let is_hit = |id: ModalId| {
            backdrop(id).get_untracked().is_some_and(|el| {
                let el: &web_sys::EventTarget = el.as_ref();
                *el == target
            })
        };
        let closed = modals.try_update(|m| m.dismiss_backdrop_hits(is_hit)).unwrap_or_default();
        for id in closed {
            log::debug!("closed {} from backdrop", id.element_id());
            if id == ModalId::Project {
                status.update(ProjectLoadStatus::cancel_pending);
            }
        }
    });
    on_cleanup(move || handle.remove());
}

#[cfg(not(feature = "csr"))]
fn install_backdrop_dismissal(
    _modals: RwSignal<ModalsState>,
    _status: RwSignal<ProjectLoadStatus>,
    _project_backdrop: NodeRef<leptos::html::Div>,
    _profile_backdrop: NodeRef<leptos::html::Div>,
) {
}
