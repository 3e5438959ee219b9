//! Mouse and touch gesture wiring.
//!
//! Both input devices normalize to a horizontal page coordinate and feed
//! the same three controller entry points, so drag-vs-tap policy lives in
//! one place regardless of device.

use crate::constants::PERSPECTIVE_PX;
use crate::core::{rotation_from_transform, GalleryController, ReleaseAction};
use crate::dom::{self, GalleryDom};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct GestureWiring {
    pub controller: Rc<RefCell<GalleryController>>,
    pub gallery: GalleryDom,
}

pub fn wire_gesture_handlers(w: &GestureWiring) {
    wire_mouse(w);
    wire_touch(w);
}

fn on_press(w: &GestureWiring, page_x: f32) {
    let live = live_rotation(&w.gallery.container);
    if w.controller.borrow_mut().pointer_down(page_x, live) {
        dom::set_animation_play_state(&w.gallery.container, false);
    }
}

// Returns true when the move belonged to a drag, so the caller can suppress
// scrolling/selection for the gesture.
fn on_move(w: &GestureWiring, page_x: f32) -> bool {
    let rotated = w.controller.borrow_mut().pointer_move(page_x);
    if let Some(deg) = rotated {
        let _ = w.gallery.container.style().set_property(
            "transform",
            &format!("perspective({}px) rotateY({}deg)", PERSPECTIVE_PX, deg),
        );
        true
    } else {
        false
    }
}

pub(crate) fn on_release(w: &GestureWiring, item: Option<web::Element>) {
    let action = {
        let id = item.as_ref().map(|el| el.id());
        w.controller.borrow_mut().pointer_up(id.as_deref())
    };
    match action {
        ReleaseAction::OpenDetail(id) => {
            if let Some(el) = item {
                overlay::reveal(&w.gallery, &el);
                log::info!("[gallery] open detail on #{}", id);
            }
        }
        ReleaseAction::ResumeAmbient => {
            dom::set_animation_play_state(&w.gallery.container, true);
        }
        ReleaseAction::None => {}
    }
}

// The ambient animation moves the carousel between gestures, so the angle a
// drag continues from has to come from the element's effective matrix.
fn live_rotation(container: &web::HtmlElement) -> f32 {
    web::window()
        .and_then(|win| win.get_computed_style(container).ok().flatten())
        .and_then(|style| style.get_property_value("transform").ok())
        .map(|t| rotation_from_transform(&t))
        .unwrap_or(0.0)
}

fn wire_mouse(w: &GestureWiring) {
    let wd = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        on_press(&wd, ev.page_x() as f32);
    }) as Box<dyn FnMut(_)>);
    let _ = w
        .gallery
        .container
        .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();

    let wm = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if on_move(&wm, ev.page_x() as f32) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();

    let wu = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        on_release(&wu, dom::closest_gallery_item(ev.target()));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touch(w: &GestureWiring) {
    let wd = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            on_press(&wd, x);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = w
        .gallery
        .container
        .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
    closure.forget();

    let wm = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            if on_move(&wm, x) {
                ev.prevent_default();
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    }
    closure.forget();

    // A touchend carries no touch points; the target is still the element
    // the touch started on, which is what the tap path needs.
    let wu = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        on_release(&wu, dom::closest_gallery_item(ev.target()));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[inline]
fn first_touch_x(ev: &web::TouchEvent) -> Option<f32> {
    ev.touches().get(0).map(|t| t.page_x() as f32)
}
