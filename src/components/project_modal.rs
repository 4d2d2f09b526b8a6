//! Project detail dialog, its loader task, and the retry notice.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opening fetches the project bank document, extracts the detail fragment,
//! and installs it in the project modal. Fetch and parse failures keep the
//! modal closed and switch the notice into its retry state; a page without a
//! detail element is only logged.

use leptos::prelude::*;

use crate::components::modal_shell::ModalShell;
use crate::error::SiteError;
use crate::net::project::{LoadOutcome, ProjectLoader, fetch_document};
use crate::state::modal::{ModalId, ModalsState};
use crate::state::project::ProjectLoadStatus;

/// Start loading the project detail into the project modal.
pub fn open_project_modal(loader: ProjectLoader, modals: RwSignal<ModalsState>, status: RwSignal<ProjectLoadStatus>) {
    let Some(token) = modals.try_update(|m| loader.begin(m)) else {
        return;
    };
    status.set(ProjectLoadStatus::Loading);

    leptos::task::spawn_local(async move {
        let body = fetch_document(loader.document()).await;
        let Some(result) = modals.try_update(|m| loader.finish(m, token, body)) else {
            return;
        };
        match &result {
            Ok(LoadOutcome::Applied) => {}
            Ok(LoadOutcome::Superseded) => {
                log::debug!("discarding superseded response for {}", loader.document());
            }
            Err(SiteError::MissingDetail(class)) => {
                log::warn!("{} has no `.{class}` element, nothing to show", loader.document());
            }
            Err(e) => log::error!("error loading project from {}: {e}", loader.document()),
        }
        if let Some(next) = ProjectLoadStatus::from_load(&result) {
            status.set(next);
        }
    });
}

/// Project modal instance.
#[component]
pub fn ProjectModal(backdrop_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    view! { <ModalShell id=ModalId::Project backdrop_ref=backdrop_ref/> }
}

/// Inline notice shown while a project load is failing, with a retry button.
#[component]
pub fn ProjectLoadNotice() -> impl IntoView {
    let modals = expect_context::<RwSignal<ModalsState>>();
    let status = expect_context::<RwSignal<ProjectLoadStatus>>();
    let loader = StoredValue::new(expect_context::<ProjectLoader>());

    let message = move || status.with(|s| s.failure().map(str::to_owned));
    let on_retry = move |_| open_project_modal(loader.get_value(), modals, status);
    let on_dismiss = move |_| status.set(ProjectLoadStatus::Idle);

    view! {
        <Show when=move || message().is_some()>
            <div class="project-load-error" role="alert">
                <span class="project-load-error__message">{move || message().unwrap_or_default()}</span>
                <button class="btn project-load-error__retry" on:click=on_retry>
                    "Retry"
                </button>
                <button class="btn project-load-error__dismiss" on:click=on_dismiss title="Dismiss">
                    "×"
                </button>
            </div>
        </Show>
        <Show when=move || status.with(ProjectLoadStatus::is_loading)>
            <div class="project-load-status">"Loading project…"</div>
        </Show>
    }
}
