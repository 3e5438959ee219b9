//! Music player toggle.
//!
//! The audio element is a collaborator: the page only inverts its
//! paused state and keeps the button art in sync.

use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_player(document: &web::Document) {
    let track = match document
        .get_element_by_id("music-track")
        .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok())
    {
        Some(t) => t,
        None => {
            log::debug!("[audio] player markup missing, toggle disabled");
            return;
        }
    };
    let button = document.get_element_by_id("play-pause-btn");

    dom::add_click_listener(document, "custom-player", move |_| {
        if track.paused() {
            _ = track.play();
            if let Some(b) = &button {
                b.set_class_name("play-btn pause");
            }
        } else {
            _ = track.pause();
            if let Some(b) = &button {
                b.set_class_name("play-btn play");
            }
        }
    });
}
