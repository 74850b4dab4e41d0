use crate::constants::DEFAULT_IMAGE_PATHS;
use floaty_core::{MotionMode, MotionSample};
use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    css_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// Map a client-space point into the canvas backing store. A collapsed rect
/// (zero width or height) falls back to plain CSS offsets.
#[inline]
pub fn css_to_canvas_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    canvas_size: Vec2,
) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        local / rect_size * canvas_size
    } else {
        local
    }
}

// ---------------- Device motion ----------------
/// Build an engine sample from the nullable axes of a devicemotion reading.
/// Returns None when the device reported no axes at all.
pub fn motion_sample(
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
    timestamp_ms: f64,
) -> Option<MotionSample> {
    if x.is_none() && y.is_none() && z.is_none() {
        return None;
    }
    Some(MotionSample::new(
        x.unwrap_or(0.0) as f32,
        y.unwrap_or(0.0) as f32,
        z.unwrap_or(0.0) as f32,
        timestamp_ms,
    ))
}

// ---------------- Canvas attributes ----------------
pub fn parse_motion_mode(attr: Option<&str>) -> MotionMode {
    match attr.map(str::parse::<MotionMode>) {
        Some(Ok(mode)) => mode,
        Some(Err(e)) => {
            log::warn!("[config] {}; using {}", e, MotionMode::default());
            MotionMode::default()
        }
        None => MotionMode::default(),
    }
}

pub fn parse_image_list(attr: Option<&str>) -> Vec<String> {
    let listed: Vec<String> = attr
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    if listed.is_empty() {
        DEFAULT_IMAGE_PATHS.iter().map(|s| s.to_string()).collect()
    } else {
        listed
    }
}
