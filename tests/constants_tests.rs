// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use floaty_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_within_reasonable_bounds() {
    // Damping and friction must shed energy, never add it
    assert!(BOUNCE_DAMPING > 0.0 && BOUNCE_DAMPING < 1.0);
    assert!(FRICTION > 0.0 && FRICTION < 1.0);

    assert!(MOMENTUM_DIVISOR > 0.0);
    assert!(MOMENTUM_CAP > 0.0);
    assert!(THROW_SCALE > 0.0);
    assert!(SHAKE_THRESHOLD > 0.0);
    assert!(SHAKE_COOLDOWN_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    assert!(BOB_SPEED_MIN > 0.0 && BOB_SPEED_MIN <= BOB_SPEED_MAX);
    assert!(BOB_AMPLITUDE_MIN >= 0.0 && BOB_AMPLITUDE_MIN <= BOB_AMPLITUDE_MAX);
    assert!(TILT_MAX_RADIANS > 0.0 && TILT_MAX_RADIANS < std::f32::consts::FRAC_PI_4);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn geometry_constants_are_consistent() {
    // Rounded corners must fit inside the square
    assert!(CORNER_RADIUS * 2.0 <= IMAGE_SIZE);
    // Bobbing should not swing an image further than its own height
    assert!(BOB_AMPLITUDE_MAX < IMAGE_SIZE);
    // The momentum anchor sits inside the lower area
    assert!(MOMENTUM_AREA_TOP + MOMENTUM_AREA_HEIGHT <= 1.0);
    assert!(MOMENTUM_AREA_ANCHOR >= 0.0 && MOMENTUM_AREA_ANCHOR <= 1.0);
    assert!(CLUSTER_RADIUS_FRACTION > 0.0 && CLUSTER_RADIUS_FRACTION <= 0.5);
}

#[test]
fn palette_entries_are_hex_colors() {
    assert_eq!(BACKGROUND_PALETTE.len(), 10);
    for color in BACKGROUND_PALETTE {
        assert_eq!(color.len(), 7, "{color}");
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()), "{color}");
    }
}

#[test]
fn default_assets_are_distinct() {
    assert!(!CANVAS_ID.is_empty());
    assert!(MOTION_ATTR.starts_with("data-"));
    assert!(IMAGES_ATTR.starts_with("data-"));
    for (i, a) in DEFAULT_IMAGE_PATHS.iter().enumerate() {
        for b in &DEFAULT_IMAGE_PATHS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
