// DOM hooks and asset defaults for the web frontend.
// Motion tuning lives in `floaty_core::constants`.

// Canvas element the scene is drawn into
pub const CANVAS_ID: &str = "canvas";

// Canvas data attributes read once at startup
pub const MOTION_ATTR: &str = "data-motion"; // "momentum" | "bobbing"
pub const IMAGES_ATTR: &str = "data-images"; // comma-separated image URLs

// Images loaded when the canvas does not list its own
pub const DEFAULT_IMAGE_PATHS: [&str; 3] = [
    "./images/Flag_of_Ukraine.svg.png",
    "./images/simmons-university.jpg",
    "./images/IMG_2358.JPG",
];

// Canvas styling applied on every resize so it pins to the viewport
pub const CANVAS_Z_INDEX: u32 = 1;
