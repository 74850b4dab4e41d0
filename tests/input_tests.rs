// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use floaty_core::MotionMode;
use glam::Vec2;
use input::*;

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).abs().max_element() < 1e-3
}

#[test]
fn css_to_canvas_offsets_by_rect_origin() {
    let p = css_to_canvas_px(
        Vec2::new(110.0, 60.0),
        Vec2::new(10.0, 20.0),
        Vec2::new(800.0, 600.0),
        Vec2::new(800.0, 600.0),
    );
    assert!(approx(p, Vec2::new(100.0, 40.0)), "p={p:?}");
}

#[test]
fn css_to_canvas_scales_to_backing_store() {
    // 2x backing store (e.g. devicePixelRatio = 2)
    let p = css_to_canvas_px(
        Vec2::new(100.0, 50.0),
        Vec2::ZERO,
        Vec2::new(400.0, 300.0),
        Vec2::new(800.0, 600.0),
    );
    assert!(approx(p, Vec2::new(200.0, 100.0)), "p={p:?}");
}

#[test]
fn css_to_canvas_handles_collapsed_rect() {
    let p = css_to_canvas_px(
        Vec2::new(30.0, 40.0),
        Vec2::new(10.0, 10.0),
        Vec2::ZERO,
        Vec2::new(800.0, 600.0),
    );
    assert_eq!(p, Vec2::new(20.0, 30.0));
}

#[test]
fn motion_sample_fills_missing_axes() {
    let s = motion_sample(Some(1.5), None, Some(9.8), 42.0).unwrap();
    assert_eq!(s.acceleration, glam::Vec3::new(1.5, 0.0, 9.8_f64 as f32));
    assert_eq!(s.timestamp_ms, 42.0);
    assert!(motion_sample(None, None, None, 0.0).is_none());
}

#[test]
fn motion_mode_attribute_falls_back_to_default() {
    assert_eq!(parse_motion_mode(None), MotionMode::Momentum);
    assert_eq!(parse_motion_mode(Some("bobbing")), MotionMode::Bobbing);
    assert_eq!(parse_motion_mode(Some("Momentum")), MotionMode::Momentum);
    assert_eq!(parse_motion_mode(Some("wobble")), MotionMode::Momentum);
}

#[test]
fn image_list_defaults_when_missing_or_blank() {
    let defaults: Vec<String> = constants::DEFAULT_IMAGE_PATHS
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(parse_image_list(None), defaults);
    assert_eq!(parse_image_list(Some(" , ,")), defaults);
}

#[test]
fn image_list_is_split_and_trimmed() {
    assert_eq!(
        parse_image_list(Some(" a.png, ./b.jpg ,,c.gif")),
        vec!["a.png".to_string(), "./b.jpg".to_string(), "c.gif".to_string()]
    );
}
