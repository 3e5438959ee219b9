#![cfg(target_arch = "wasm32")]
use crate::core::GalleryController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod fireworks;
mod overlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("anniversary-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

// Each page feature wires independently behind its own markup guard; a page
// variant that ships without one of them just skips it.
fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    fireworks::start(&document);
    audio::wire_player(&document);
    wire_gallery(&document);

    Ok(())
}

fn wire_gallery(document: &web::Document) {
    let gallery = match dom::GalleryDom::collect(document) {
        Some(g) => g,
        None => {
            log::debug!("[gallery] markup missing, interactions disabled");
            return;
        }
    };
    let controller = Rc::new(RefCell::new(GalleryController::new()));
    let wiring = events::pointer::GestureWiring {
        controller,
        gallery,
    };
    events::pointer::wire_gesture_handlers(&wiring);
    events::wire_close_control(&wiring, document);
    events::wire_body_dismiss(&wiring, document);
    events::wire_blur_release(&wiring);
    log::info!("[gallery] wired {} items", wiring.gallery.items.len());
}
