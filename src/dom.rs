use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(
            Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>,
        );
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// Drive the CSS keyframe animation on `el` without touching its class list.
#[inline]
pub fn set_animation_play_state(el: &web::HtmlElement, running: bool) {
    let value = if running { "running" } else { "paused" };
    let _ = el.style().set_property("animation-play-state", value);
}

/// The gallery item containing the event target, if the event landed on one.
#[inline]
pub fn closest_gallery_item(target: Option<web::EventTarget>) -> Option<web::Element> {
    let el = target?.dyn_into::<web::Element>().ok()?;
    el.closest("#gallery-container span").ok().flatten()
}

/// True when the event target sits inside an element matched by `selector`.
#[inline]
pub fn target_within(target: Option<&web::EventTarget>, selector: &str) -> bool {
    target
        .and_then(|t| t.dyn_ref::<web::Element>())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// Every element the gallery interaction touches, resolved once at startup.
///
/// Lookup is all-or-nothing: if any piece of the markup is missing, the
/// gallery wiring is skipped and the page degrades to its static form.
#[derive(Clone)]
pub struct GalleryDom {
    pub container: web::HtmlElement,
    pub items: Vec<web::Element>,
    pub text_area: web::Element,
    pub text_title: web::Element,
    pub text_desc: web::Element,
    pub image_box: web::Element,
    pub main_image: web::HtmlImageElement,
    pub frame: web::Element,
}

impl GalleryDom {
    pub fn collect(document: &web::Document) -> Option<Self> {
        let container = document
            .get_element_by_id("gallery-container")?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        let nodes = document.query_selector_all("#gallery-container span").ok()?;
        let mut items = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                items.push(el);
            }
        }
        Some(Self {
            container,
            items,
            text_area: document.get_element_by_id("text-display-area")?,
            text_title: document.get_element_by_id("text-title")?,
            text_desc: document.get_element_by_id("text-description")?,
            image_box: document.get_element_by_id("display-image-box")?,
            main_image: document
                .get_element_by_id("main-display-image")?
                .dyn_into::<web::HtmlImageElement>()
                .ok()?,
            frame: document.get_element_by_id("anniversary-container")?,
        })
    }
}
