//! Detail-view DOM application.
//!
//! The controller decides *when* the detail view opens or closes; these
//! helpers apply *what* that means in the markup: panel visibility, the
//! item highlight, the frame zoom and the frozen carousel class.

use crate::dom::{self, GalleryDom};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Show `item`'s detail view. The panels are populated from the item's data
/// attributes and its thumbnail image before they become visible.
pub fn reveal(gallery: &GalleryDom, item: &web::Element) {
    dom::add_class(&gallery.container, "paused");
    dom::set_animation_play_state(&gallery.container, false);

    for s in &gallery.items {
        dom::remove_class(s, "active");
    }
    dom::add_class(item, "active");

    let title = item.get_attribute("data-title").unwrap_or_default();
    let description = item.get_attribute("data-description").unwrap_or_default();
    gallery.text_title.set_text_content(Some(&title));
    gallery.text_desc.set_text_content(Some(&description));
    dom::add_class(&gallery.text_area, "visible");

    if let Some(img) = item
        .query_selector("img")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
    {
        gallery.main_image.set_src(&img.src());
    }
    dom::add_class(&gallery.image_box, "visible");
    dom::add_class(&gallery.frame, "zoomed-in");
}

/// Hide the detail view and let the carousel run again. `active_id` names
/// the item whose highlight drops. Class removal is a no-op when a class is
/// absent, so clearing an already-clear gallery changes nothing.
pub fn clear(gallery: &GalleryDom, active_id: &str) {
    dom::remove_class(&gallery.container, "paused");
    dom::set_animation_play_state(&gallery.container, true);
    dom::remove_class(&gallery.text_area, "visible");
    dom::remove_class(&gallery.image_box, "visible");
    dom::remove_class(&gallery.frame, "zoomed-in");
    if let Some(item) = gallery.items.iter().find(|s| s.id() == active_id) {
        dom::remove_class(item, "active");
    }
}
