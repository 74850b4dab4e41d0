// Shared motion/layout tuning constants used by the engine and the web frontend.

// Image geometry
pub const IMAGE_SIZE: f32 = 100.0; // every image is drawn as a fixed square
pub const CORNER_RADIUS: f32 = 15.0; // rounded-rect clip radius
pub const TILT_MAX_RADIANS: f32 = 0.15; // fixed rotation lies in [-max, max]

// Momentum mode
pub const BOUNCE_DAMPING: f32 = 0.8; // fraction of speed kept after hitting an edge
pub const FRICTION: f32 = 0.99; // per-frame velocity multiplier
pub const MOMENTUM_DIVISOR: f32 = 10.0; // release distance is divided by this
pub const MOMENTUM_CAP: f32 = 3.0; // upper bound on the momentum factor
pub const THROW_SCALE: f32 = 0.3; // final scale applied to the throw velocity

// Bobbing mode
pub const BOB_SPEED_MIN: f32 = 0.02; // radians per frame
pub const BOB_SPEED_MAX: f32 = 0.04;
pub const BOB_AMPLITUDE_MIN: f32 = 5.0; // pixels
pub const BOB_AMPLITUDE_MAX: f32 = 15.0;
pub const TILT_OFFSET_SCALE: f32 = 12.0; // pixels per m/s^2 of device tilt

// Shake detection
pub const SHAKE_THRESHOLD: f32 = 15.0; // summed per-axis delta in m/s^2
pub const SHAKE_COOLDOWN_MS: f64 = 1000.0;

// Placement
pub const CLUSTER_RADIUS_MAX: f32 = 150.0;
pub const CLUSTER_RADIUS_FRACTION: f32 = 0.25; // of the shorter viewport side
pub const MOMENTUM_AREA_TOP: f32 = 0.25; // lower three quarters start here
pub const MOMENTUM_AREA_HEIGHT: f32 = 0.75;
pub const MOMENTUM_AREA_ANCHOR: f32 = 0.3; // anchor depth within the lower area

// Background color gestures
pub const COLOR_DRAG_SENSITIVITY: f32 = 50.0; // pixels of vertical drag per step

pub const BACKGROUND_PALETTE: [&str; 10] = [
    "#e0e0e0", // gray
    "#90caf9", // blue
    "#ce93d8", // purple
    "#81c784", // green
    "#ffb74d", // orange
    "#f48fb1", // pink
    "#80cbc4", // teal
    "#c5e1a5", // lime
    "#ffd54f", // yellow
    "#bcaaa4", // brown
];
