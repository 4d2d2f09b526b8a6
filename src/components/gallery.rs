//! Paginated gallery grid with the "add" sentinel and "Show More" control.

use leptos::prelude::*;

use crate::components::project_modal::open_project_modal;
use crate::config::SiteConfig;
use crate::net::project::ProjectLoader;
use crate::state::gallery::{GalleryItem, GalleryState};
use crate::state::modal::ModalsState;
use crate::state::project::ProjectLoadStatus;

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

/// Gallery grid. Items keep document order; the add control always renders
/// last, and clicking an item opens the project modal.
#[component]
pub fn Gallery() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let modals = expect_context::<RwSignal<ModalsState>>();
    let status = expect_context::<RwSignal<ProjectLoadStatus>>();
    let loader = StoredValue::new(expect_context::<ProjectLoader>());
    let template = StoredValue::new(expect_context::<SiteConfig>().new_item);

    let on_add = move |_| {
        let item = template.with_value(GalleryItem::from_config);
        gallery.update(|g| {
            let index = g.add_item(item);
            log::debug!("gallery item added at {index}, {} visible", g.visible_count());
        });
    };
    let on_show_more = move |_| gallery.update(GalleryState::reveal_all);

    view! {
        <div class="gallery-grid">
            <For
                each=move || gallery.get().items
                key=|item| item.id
                children=move |item: GalleryItem| {
                    let id = item.id;
                    let visible = move || gallery.with(|g| g.is_visible(id));
                    view! {
                        <div class="gallery-item" style:display=move || display(visible())>
                            <a
                                href=item.href
                                on:click=move |ev: leptos::ev::MouseEvent| {
                                    ev.prevent_default();
                                    open_project_modal(loader.get_value(), modals, status);
                                }
                            >
                                <img src=item.image alt=item.alt/>
                            </a>
                        </div>
                    }
                }
            />
            <div class="gallery-item button-div">
                <button class="ewan-button" on:click=on_add title="Add project">
                    "+"
                </button>
            </div>
        </div>
        <button
            id="show-more"
            class="btn"
            style:display=move || display(gallery.with(|g| g.show_more_visible))
            on:click=on_show_more
        >
            "Show More"
        </button>
    }
}
