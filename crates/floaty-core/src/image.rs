//! The per-asset entity moved by the engine.

use crate::constants::{BOUNCE_DAMPING, IMAGE_SIZE};
use glam::Vec2;

/// Sine-wave vertical oscillation used by bobbing mode.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bob {
    pub base_y: f32,
    /// Radians added to `phase` every frame.
    pub speed: f32,
    pub amplitude: f32,
    pub phase: f32,
}

impl Bob {
    #[inline]
    pub fn offset(&self) -> f32 {
        self.phase.sin() * self.amplitude
    }
}

/// Base position captured when tilt control switches on and restored verbatim
/// when it switches off.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltAnchor {
    pub x: f32,
    pub y: f32,
    pub base_y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackedImage {
    /// Index of the loaded bitmap this entry draws.
    pub asset: usize,
    /// Top-left corner in canvas pixels.
    pub position: Vec2,
    pub size: Vec2,
    /// Fixed rotation in radians, assigned at load.
    pub tilt: f32,
    pub velocity: Vec2,
    pub is_dragged: bool,
    pub bounce_damping: f32,
    pub bob: Bob,
    pub tilt_anchor: Option<TiltAnchor>,
}

impl TrackedImage {
    pub fn new(asset: usize, position: Vec2, tilt: f32) -> Self {
        Self {
            asset,
            position,
            size: Vec2::splat(IMAGE_SIZE),
            tilt,
            velocity: Vec2::ZERO,
            is_dragged: false,
            bounce_damping: BOUNCE_DAMPING,
            bob: Bob {
                base_y: position.y,
                ..Bob::default()
            },
            tilt_anchor: None,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_bob(mut self, bob: Bob) -> Self {
        self.bob = bob;
        self
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Axis-aligned hit test, edges inclusive. Rotation is ignored.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.position + self.size;
        point.x >= self.position.x
            && point.x <= max.x
            && point.y >= self.position.y
            && point.y <= max.y
    }

    pub fn snapshot_anchor(&mut self) {
        self.tilt_anchor = Some(TiltAnchor {
            x: self.position.x,
            y: self.position.y,
            base_y: self.bob.base_y,
        });
    }

    pub fn restore_anchor(&mut self) {
        if let Some(anchor) = self.tilt_anchor.take() {
            self.position = Vec2::new(anchor.x, anchor.y);
            self.bob.base_y = anchor.base_y;
        }
    }
}
