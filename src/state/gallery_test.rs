use super::*;

fn item(n: usize) -> GalleryItem {
    GalleryItem::from_config(&GalleryItemConfig {
        href: format!("project-{n}.html"),
        image: format!("images/project-{n}.png"),
        alt: format!("Project {n}"),
    })
}

fn gallery(n: usize) -> GalleryState {
    GalleryState::new(12, (0..n).map(item).collect())
}

// =============================================================
// refresh_visibility
// =============================================================

#[test]
fn visible_count_is_min_of_len_and_page_size() {
    for n in [0, 1, 5, 11, 12, 13, 20, 40] {
        let state = gallery(n);
        assert_eq!(state.visible_count(), n.min(12), "n = {n}");
        assert_eq!(state.show_more_visible, n > 12, "n = {n}");
    }
}

#[test]
fn exactly_page_size_hides_reveal_control() {
    let state = gallery(12);
    assert!(!state.show_more_visible);
    assert!(state.items.iter().all(|i| i.visible));
}

#[test]
fn overflow_hides_items_after_first_page() {
    let state = gallery(15);
    assert!(state.items[..12].iter().all(|i| i.visible));
    assert!(state.items[12..].iter().all(|i| !i.visible));
}

#[test]
fn refresh_honours_custom_page_size() {
    let state = GalleryState::new(3, (0..5).map(item).collect());
    assert_eq!(state.visible_count(), 3);
    assert!(state.show_more_visible);
}

// =============================================================
// reveal_all
// =============================================================

#[test]
fn reveal_all_shows_everything_and_hides_control() {
    let mut state = gallery(20);
    state.reveal_all();
    assert_eq!(state.visible_count(), 20);
    assert!(!state.show_more_visible);
}

#[test]
fn refresh_after_reveal_keeps_all_visible() {
    let mut state = gallery(20);
    state.reveal_all();
    state.refresh_visibility();
    assert_eq!(state.visible_count(), 20);
    assert!(!state.show_more_visible);
}

#[test]
fn insertion_after_reveal_does_not_rehide() {
    let mut state = gallery(20);
    state.reveal_all();
    state.add_item(item(99));
    assert_eq!(state.visible_count(), 21);
    assert!(!state.show_more_visible);
}

// =============================================================
// add_item
// =============================================================

#[test]
fn add_item_grows_by_one_and_lands_last() {
    let mut state = gallery(4);
    let new_item = item(99);
    let id = new_item.id;
    let index = state.add_item(new_item);
    assert_eq!(state.len(), 5);
    assert_eq!(index, 4);
    assert_eq!(state.items.last().map(|i| i.id), Some(id));
}

#[test]
fn add_item_crossing_page_boundary_shows_control() {
    let mut state = gallery(12);
    assert!(!state.show_more_visible);
    let index = state.add_item(item(12));
    assert!(state.show_more_visible);
    assert!(!state.items[index].visible);
    assert_eq!(state.visible_count(), 12);
}

#[test]
fn items_get_distinct_ids() {
    let state = gallery(3);
    assert_ne!(state.items[0].id, state.items[1].id);
    assert_ne!(state.items[1].id, state.items[2].id);
}

// =============================================================
// Construction
// =============================================================

#[test]
fn default_is_empty_with_standard_page() {
    let state = GalleryState::default();
    assert!(state.is_empty());
    assert_eq!(state.page_size, 12);
    assert!(!state.show_more_visible);
}

#[test]
fn from_config_copies_items_in_order() {
    let config = SiteConfig {
        gallery: (0..14)
            .map(|n| GalleryItemConfig { href: format!("p{n}.html"), image: format!("p{n}.png"), alt: String::new() })
            .collect(),
        ..SiteConfig::default()
    };
    let state = GalleryState::from_config(&config);
    assert_eq!(state.len(), 14);
    assert_eq!(state.items[0].href, "p0.html");
    assert_eq!(state.items[13].href, "p13.html");
    assert!(state.show_more_visible);
}

#[test]
fn is_visible_follows_paging() {
    let mut state = gallery(13);
    let last = state.items[12].id;
    assert!(state.is_visible(state.items[0].id));
    assert!(!state.is_visible(last));

    state.reveal_all();
    assert!(state.is_visible(last));
    assert!(!state.is_visible(Uuid::new_v4()));
}
