//! Binding to the page-global fireworks library.
//!
//! The effect is a collaborator: constructed over a mount point with a
//! fixed options record, started once, never touched again.

use crate::constants::*;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(js_namespace = Fireworks)]
extern "C" {
    /// `Fireworks.default` from the page's fireworks bundle.
    #[wasm_bindgen(js_name = "default")]
    type FireworksEffect;

    #[wasm_bindgen(constructor, js_class = "default")]
    fn new(mount: &web::Element, options: &JsValue) -> FireworksEffect;

    #[wasm_bindgen(method, js_class = "default")]
    fn start(this: &FireworksEffect);
}

fn options() -> JsValue {
    let mouse = js_sys::Object::new();
    _ = js_sys::Reflect::set(&mouse, &"click".into(), &FIREWORKS_MOUSE_CLICK.into());
    _ = js_sys::Reflect::set(&mouse, &"move".into(), &FIREWORKS_MOUSE_MOVE.into());
    _ = js_sys::Reflect::set(&mouse, &"max".into(), &FIREWORKS_MOUSE_MAX.into());

    let opts = js_sys::Object::new();
    _ = js_sys::Reflect::set(&opts, &"opacity".into(), &FIREWORKS_OPACITY.into());
    _ = js_sys::Reflect::set(&opts, &"acceleration".into(), &FIREWORKS_ACCELERATION.into());
    _ = js_sys::Reflect::set(&opts, &"friction".into(), &FIREWORKS_FRICTION.into());
    _ = js_sys::Reflect::set(&opts, &"gravity".into(), &FIREWORKS_GRAVITY.into());
    _ = js_sys::Reflect::set(&opts, &"particles".into(), &FIREWORKS_PARTICLES.into());
    _ = js_sys::Reflect::set(&opts, &"explosion".into(), &FIREWORKS_EXPLOSION.into());
    _ = js_sys::Reflect::set(&opts, &"mouse".into(), &mouse);
    opts.into()
}

/// Start the ambient fireworks when their mount point exists.
pub fn start(document: &web::Document) {
    if let Some(mount) = document.get_element_by_id("fireworks-canvas") {
        FireworksEffect::new(&mount, &options()).start();
    } else {
        log::debug!("[fireworks] no #fireworks-canvas, effect disabled");
    }
}
