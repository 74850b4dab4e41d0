//! Per-frame integration for the two motion modes.
//!
//! Both steps leave dragged images untouched; the pointer owns them until
//! release. Every other image ends the step inside the viewport.

use crate::image::TrackedImage;
use crate::viewport::{reflect_axis, Viewport};
use glam::Vec2;
use std::f32::consts::TAU;

/// Momentum mode: integrate, bounce off edges, then apply friction.
pub fn step_momentum(image: &mut TrackedImage, viewport: Viewport, friction: f32) {
    if image.is_dragged {
        return;
    }
    image.position += image.velocity;

    let max = viewport.max_position(image.size);
    let damping = image.bounce_damping;
    reflect_axis(&mut image.position.x, &mut image.velocity.x, max.x, damping);
    reflect_axis(&mut image.position.y, &mut image.velocity.y, max.y, damping);

    image.velocity *= friction;
}

/// Bobbing mode: advance the sine phase and place the image around its base.
///
/// With `tilt_offset` set and an anchor present, both axes follow the anchor
/// shifted by the offset; otherwise only `y` moves.
pub fn step_bobbing(image: &mut TrackedImage, viewport: Viewport, tilt_offset: Option<Vec2>) {
    if image.is_dragged {
        return;
    }
    image.bob.phase = (image.bob.phase + image.bob.speed) % TAU;
    let bob = image.bob.offset();

    match (tilt_offset, image.tilt_anchor) {
        (Some(offset), Some(anchor)) => {
            image.position.x = anchor.x + offset.x;
            image.position.y = anchor.base_y + offset.y + bob;
        }
        _ => {
            image.position.y = image.bob.base_y + bob;
        }
    }
    image.position = viewport.clamp_position(image.position, image.size);
}

/// Throw velocity from the last pointer displacement before release.
///
/// The factor grows with distance up to `cap`; zero-duration or zero-distance
/// releases leave the image at rest.
pub fn throw_velocity(
    last_pointer: Vec2,
    release: Vec2,
    duration_ms: f64,
    divisor: f32,
    cap: f32,
    scale: f32,
) -> Vec2 {
    if duration_ms <= 0.0 {
        return Vec2::ZERO;
    }
    let delta = release - last_pointer;
    let distance = delta.length();
    if distance <= f32::EPSILON {
        return Vec2::ZERO;
    }
    let momentum = (distance / divisor).min(cap);
    delta * momentum * scale
}
