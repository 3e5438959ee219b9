// Host-side sanity checks on tuning constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/core/gallery.rs"]
mod gallery;

use constants::*;
use gallery::ROTATE_SENSITIVITY_DEG_PER_PX;

#[test]
#[allow(clippy::assertions_on_constants)]
fn drag_tuning_is_within_reasonable_bounds() {
    // A full-screen drag should turn the carousel, not spin it wildly
    assert!(ROTATE_SENSITIVITY_DEG_PER_PX > 0.0);
    assert!(ROTATE_SENSITIVITY_DEG_PER_PX <= 1.0);
    assert!(PERSPECTIVE_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fireworks_config_is_within_reasonable_bounds() {
    assert!(FIREWORKS_OPACITY > 0.0 && FIREWORKS_OPACITY <= 1.0);
    assert!(FIREWORKS_ACCELERATION >= 1.0);
    assert!(FIREWORKS_FRICTION > 0.0 && FIREWORKS_FRICTION < 1.0);
    assert!(FIREWORKS_GRAVITY > 0.0);
    assert!(FIREWORKS_PARTICLES > 0.0);
    assert!(FIREWORKS_EXPLOSION > 0.0);
    assert!(FIREWORKS_MOUSE_MAX >= 0.0);

    // The effect must not intercept pointer input meant for the carousel
    assert!(!FIREWORKS_MOUSE_CLICK);
    assert!(!FIREWORKS_MOUSE_MOVE);
}
