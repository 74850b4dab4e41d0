use crate::constants::CANVAS_Z_INDEX;
use floaty_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window_viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width as f32, height as f32))
}

/// Size the canvas backing store to the window (one canvas pixel per CSS
/// pixel) and pin it over the viewport. Returns the resulting viewport.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Viewport {
    let viewport = window_viewport().unwrap_or_else(|| {
        Viewport::new(canvas.width() as f32, canvas.height() as f32)
    });
    let w_px = viewport.width as u32;
    let h_px = viewport.height as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    _ = canvas.set_attribute(
        "style",
        &format!(
            "position:fixed;top:0;left:0;z-index:{};display:block;visibility:visible;width:{}px;height:{}px;touch-action:none",
            CANVAS_Z_INDEX, w_px, h_px
        ),
    );
    viewport
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?;
    ctx.dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn set_background(document: &web::Document, color: &str) {
    if let Some(body) = document.body() {
        if let Err(e) = body.style().set_property("background-color", color) {
            log::warn!("[dom] background not applied: {:?}", e);
        }
    }
}
