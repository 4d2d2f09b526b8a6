//! Shared modal shell: backdrop, permanent close control, content slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both dialogs render through `ModalShell`. The close control is part of the
//! shell markup and the slot is driven only by `ModalState::content`, so no
//! content change can remove the control.

use leptos::prelude::*;

use crate::components::profile_modal::ProfileContent;
use crate::state::modal::{ModalContent, ModalId, ModalsState};
use crate::state::profiles::ProfileDirectory;
use crate::state::project::ProjectLoadStatus;

/// Hide `id`, reset its content, and drop any pending project load.
pub fn close_modal(id: ModalId, modals: RwSignal<ModalsState>, status: RwSignal<ProjectLoadStatus>) {
    modals.update(|m| m.clear_and_close(id));
    if id == ModalId::Project {
        status.update(ProjectLoadStatus::cancel_pending);
    }
}

/// Modal backdrop with a close control and the content slot for `id`.
///
/// `backdrop_ref` lets the page-level click listener recognise clicks that
/// land on the backdrop itself rather than inside the dialog.
#[component]
pub fn ModalShell(id: ModalId, backdrop_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let modals = expect_context::<RwSignal<ModalsState>>();
    let status = expect_context::<RwSignal<ProjectLoadStatus>>();
    let directory = StoredValue::new(expect_context::<ProfileDirectory>());

    let is_open = move || modals.with(|m| m.is_open(id));
    let content = move || modals.with(|m| m.get(id).content().clone());

    view! {
        <div id=id.element_id() class="modal" class:show=is_open node_ref=backdrop_ref>
            <div class="modal-content">
                <span class="close" title="Close" on:click=move |_| close_modal(id, modals, status)>
                    "×"
                </span>
                {move || directory.with_value(|dir| render_content(content(), dir))}
            </div>
        </div>
    }
}

fn render_content(content: ModalContent, directory: &ProfileDirectory) -> AnyView {
    match content {
        ModalContent::Empty => ().into_any(),
        ModalContent::Fragment(html) => view! { <div class="modal-fragment" inner_html=html></div> }.into_any(),
        ModalContent::Profile(member) => match directory.get(member) {
            Some(profile) => view! { <ProfileContent profile=*profile/> }.into_any(),
            None => ().into_any(),
        },
    }
}
