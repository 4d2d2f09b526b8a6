//! Gallery pagination state.
//!
//! DESIGN
//! ======
//! Items are kept in document order; the "add" sentinel control is rendered
//! after the list, so appending to `items` always lands immediately before
//! it. Only the first `page_size` items are visible while the set is larger
//! than a page and the reveal action has not fired. Reveal lasts for the
//! page lifetime, including across later insertions.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use uuid::Uuid;

use crate::config::{DEFAULT_PAGE_SIZE, GalleryItemConfig, SiteConfig};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: Uuid,
    pub href: String,
    pub image: String,
    pub alt: String,
    pub visible: bool,
}

impl GalleryItem {
    pub fn from_config(item: &GalleryItemConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            href: item.href.clone(),
            image: item.image.clone(),
            alt: item.alt.clone(),
            visible: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryState {
    pub items: Vec<GalleryItem>,
    pub page_size: usize,
    pub revealed: bool,
    pub show_more_visible: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, Vec::new())
    }
}

impl GalleryState {
    pub fn new(page_size: usize, items: Vec<GalleryItem>) -> Self {
        let mut state = Self { items, page_size, revealed: false, show_more_visible: false };
        state.refresh_visibility();
        state
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        let items = config.gallery.iter().map(GalleryItem::from_config).collect();
        Self::new(config.gallery_page_size, items)
    }

    /// Re-apply the paging rule to every item and to the reveal control.
    pub fn refresh_visibility(&mut self) {
        let paged = !self.revealed && self.items.len() > self.page_size;
        for (index, item) in self.items.iter_mut().enumerate() {
            item.visible = !paged || index < self.page_size;
        }
        self.show_more_visible = paged;
    }

    /// Show every item and hide the reveal control. One-way.
    pub fn reveal_all(&mut self) {
        self.revealed = true;
        self.refresh_visibility();
    }

    /// Append `item` before the sentinel control and re-page. Returns its index.
    pub fn add_item(&mut self, item: GalleryItem) -> usize {
        self.items.push(item);
        self.refresh_visibility();
        self.items.len() - 1
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the item with `id` is currently shown. Unknown ids are hidden.
    pub fn is_visible(&self, id: Uuid) -> bool {
        self.items.iter().any(|item| item.id == id && item.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|item| item.visible).count()
    }
}
