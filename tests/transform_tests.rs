// Host-side tests for transform-matrix rotation recovery.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/transform.rs"]
mod transform;

use transform::rotation_from_transform;

// Serialize rotateY(deg) the way computed style does (column-major).
fn matrix3d_rotate_y(deg: f32) -> String {
    let (s, c) = deg.to_radians().sin_cos();
    format!(
        "matrix3d({}, 0, {}, 0, 0, 1, 0, 0, {}, 0, {}, 0, 0, 0, 0, 1)",
        c, -s, s, c
    )
}

// perspective(d) composed with rotateY(deg), as the live drag transform is
fn matrix3d_perspective_rotate_y(deg: f32, d: f32) -> String {
    let (s, c) = deg.to_radians().sin_cos();
    format!(
        "matrix3d({}, 0, {}, {}, 0, 1, 0, 0, {}, 0, {}, {}, 0, 0, 0, 1)",
        c,
        -s,
        s / d,
        s,
        c,
        -c / d
    )
}

#[test]
fn none_and_empty_are_zero() {
    assert_eq!(rotation_from_transform("none"), 0.0);
    assert_eq!(rotation_from_transform(""), 0.0);
}

#[test]
fn identity_is_zero() {
    assert_eq!(rotation_from_transform("matrix(1, 0, 0, 1, 0, 0)"), 0.0);
}

#[test]
fn matrix3d_recovers_y_rotation() {
    for deg in [50.0_f32, 10.0, -30.0, 85.0] {
        let rot = rotation_from_transform(&matrix3d_rotate_y(deg));
        assert!(
            (rot - deg).abs() < 1e-3,
            "expected {} got {} for {}",
            deg,
            rot,
            matrix3d_rotate_y(deg)
        );
    }
}

#[test]
fn recovery_is_stable_under_perspective() {
    let rot = rotation_from_transform(&matrix3d_perspective_rotate_y(42.0, 1000.0));
    assert!((rot - 42.0).abs() < 1e-3, "got {}", rot);
}

#[test]
fn two_d_rotation_carries_no_y_component() {
    // rotate(45deg) serializes as a 2D matrix; that spin is about Z
    let rot = rotation_from_transform("matrix(0.7071, 0.7071, -0.7071, 0.7071, 0, 0)");
    assert_eq!(rot, 0.0);
}

#[test]
fn translation_is_ignored() {
    assert_eq!(rotation_from_transform("matrix(1, 0, 0, 1, 120, -40)"), 0.0);
}

#[test]
fn whitespace_is_tolerated() {
    let rot = rotation_from_transform(&format!("  {}  ", matrix3d_rotate_y(25.0)));
    assert!((rot - 25.0).abs() < 1e-3);
}

#[test]
fn garbage_is_zero() {
    assert_eq!(rotation_from_transform("rotateY(50deg)"), 0.0);
    assert_eq!(rotation_from_transform("matrix(1, 2, 3)"), 0.0);
    assert_eq!(rotation_from_transform("matrix3d(1, 2)"), 0.0);
    assert_eq!(rotation_from_transform("matrix(a, b, c, d, e, f)"), 0.0);
    assert_eq!(rotation_from_transform("totally broken"), 0.0);
}
