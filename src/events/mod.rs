//! Dismissal and lifecycle wiring around the gesture handlers.

pub mod pointer;

use crate::dom;
use crate::overlay;
use pointer::GestureWiring;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Clicks inside any of these regions never dismiss the detail view.
const DISMISS_KEEP_SELECTORS: &[&str] = &[
    "#gallery-container span",
    "#text-display-area",
    "#display-image-box",
    "#custom-player",
];

/// Explicit close control. Stops propagation so the body dismiss handler
/// never observes the same click; the close control always wins that race.
pub fn wire_close_control(w: &GestureWiring, document: &web::Document) {
    let wc = w.clone();
    dom::add_click_listener(document, "close-display-btn", move |ev| {
        ev.stop_propagation();
        let closed = wc.controller.borrow_mut().close();
        if let Some(id) = closed {
            overlay::clear(&wc.gallery, &id);
            log::info!("[gallery] closed detail on #{}", id);
        }
    });
}

/// Tap-outside-to-close convention: any click on neutral page area while a
/// detail view is open resumes the carousel. The controller refuses the
/// dismissal while a gesture is in flight.
pub fn wire_body_dismiss(w: &GestureWiring, document: &web::Document) {
    let body = match document.body() {
        Some(b) => b,
        None => return,
    };
    let wb = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let target = ev.target();
        for selector in DISMISS_KEEP_SELECTORS {
            if dom::target_within(target.as_ref(), selector) {
                return;
            }
        }
        let closed = wb.controller.borrow_mut().dismiss();
        if let Some(id) = closed {
            overlay::clear(&wb.gallery, &id);
            log::info!("[gallery] dismissed detail on #{}", id);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = body.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Safety release: a drag whose `up` never arrives (the page loses focus
/// mid-gesture) would leave the carousel frozen, so focus loss releases it.
pub fn wire_blur_release(w: &GestureWiring) {
    let wb = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        if wb.controller.borrow().is_dragging() {
            pointer::on_release(&wb, None);
        }
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
