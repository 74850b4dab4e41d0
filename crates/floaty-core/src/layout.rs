//! One-time placement of freshly loaded images.

use crate::config::{MotionConfig, MotionMode};
use crate::constants::*;
use crate::image::{Bob, TrackedImage};
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

pub fn cluster_radius(viewport: Viewport) -> f32 {
    CLUSTER_RADIUS_MAX.min(viewport.width.min(viewport.height) * CLUSTER_RADIUS_FRACTION)
}

/// Centre of the placement disc for `mode`.
pub fn anchor_point(mode: MotionMode, viewport: Viewport) -> Vec2 {
    match mode {
        MotionMode::Momentum => {
            let area_top = viewport.height * MOMENTUM_AREA_TOP;
            let area_height = viewport.height * MOMENTUM_AREA_HEIGHT;
            Vec2::new(
                viewport.width * 0.5,
                area_top + area_height * MOMENTUM_AREA_ANCHOR,
            )
        }
        MotionMode::Bobbing => viewport.center(),
    }
}

/// Top-left position sampled uniformly by angle and radius around the anchor,
/// clamped into the viewport.
pub fn place<R: Rng + ?Sized>(
    rng: &mut R,
    mode: MotionMode,
    viewport: Viewport,
    size: Vec2,
) -> Vec2 {
    let angle = rng.gen::<f32>() * TAU;
    let distance = rng.gen::<f32>() * cluster_radius(viewport);
    let center = anchor_point(mode, viewport) + Vec2::from_angle(angle) * distance;
    viewport.clamp_position(center - size * 0.5, size)
}

pub fn random_tilt<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    (rng.gen::<f32>() - 0.5) * 2.0 * TILT_MAX_RADIANS
}

fn lerp_range<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}

pub fn random_bob<R: Rng + ?Sized>(rng: &mut R, config: &MotionConfig, base_y: f32) -> Bob {
    Bob {
        base_y,
        speed: lerp_range(rng, config.bob_speed),
        amplitude: lerp_range(rng, config.bob_amplitude),
        phase: rng.gen::<f32>() * TAU,
    }
}

/// Build a placed, tilted image for `asset`, ready for either mode.
pub fn spawn<R: Rng + ?Sized>(
    rng: &mut R,
    asset: usize,
    config: &MotionConfig,
    viewport: Viewport,
) -> TrackedImage {
    let size = Vec2::splat(config.image_size);
    let position = place(rng, config.mode, viewport, size);
    let tilt = random_tilt(rng);
    let bob = random_bob(rng, config, position.y);
    let mut image = TrackedImage::new(asset, position, tilt).with_bob(bob);
    image.size = size;
    image.bounce_damping = config.bounce_damping;
    image
}
