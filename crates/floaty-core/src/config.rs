//! Runtime configuration for the motion engine.
//!
//! `MotionConfig::default()` reproduces the tuning constants in
//! [`crate::constants`]; hosts override individual fields when they need a
//! livelier or calmer scene.

use crate::constants::*;
use crate::error::FloatyError;
use std::fmt;
use std::str::FromStr;

/// Which per-frame update drives the images. Chosen once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionMode {
    /// Throwable images that bounce off the viewport edges and slow down.
    #[default]
    Momentum,
    /// Images bob in place and follow device tilt when tilt control is on.
    Bobbing,
}

impl FromStr for MotionMode {
    type Err = FloatyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "momentum" | "bounce" => Ok(Self::Momentum),
            "bobbing" | "bob" | "tilt" => Ok(Self::Bobbing),
            other => Err(FloatyError::UnknownMotionMode(other.to_string())),
        }
    }
}

impl fmt::Display for MotionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Momentum => f.write_str("momentum"),
            Self::Bobbing => f.write_str("bobbing"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MotionConfig {
    pub mode: MotionMode,
    pub image_size: f32,
    pub bounce_damping: f32,
    pub friction: f32,
    pub momentum_divisor: f32,
    pub momentum_cap: f32,
    pub throw_scale: f32,
    pub bob_speed: (f32, f32),
    pub bob_amplitude: (f32, f32),
    pub tilt_offset_scale: f32,
    pub shake_threshold: f32,
    pub shake_cooldown_ms: f64,
    pub color_drag_sensitivity: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            mode: MotionMode::default(),
            image_size: IMAGE_SIZE,
            bounce_damping: BOUNCE_DAMPING,
            friction: FRICTION,
            momentum_divisor: MOMENTUM_DIVISOR,
            momentum_cap: MOMENTUM_CAP,
            throw_scale: THROW_SCALE,
            bob_speed: (BOB_SPEED_MIN, BOB_SPEED_MAX),
            bob_amplitude: (BOB_AMPLITUDE_MIN, BOB_AMPLITUDE_MAX),
            tilt_offset_scale: TILT_OFFSET_SCALE,
            shake_threshold: SHAKE_THRESHOLD,
            shake_cooldown_ms: SHAKE_COOLDOWN_MS,
            color_drag_sensitivity: COLOR_DRAG_SENSITIVITY,
        }
    }
}

impl MotionConfig {
    pub fn with_mode(mode: MotionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}
