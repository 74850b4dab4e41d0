use floaty_core::DrawCommand;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Clear the canvas and draw `commands` in order (later ones on top).
pub fn draw_scene(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    commands: impl Iterator<Item = DrawCommand>,
    bitmaps: &[web::HtmlImageElement],
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    // resizing the canvas resets context state
    ctx.set_image_smoothing_enabled(true);
    // web-sys has no binding for imageSmoothingQuality
    _ = js_sys::Reflect::set(
        ctx,
        &JsValue::from_str("imageSmoothingQuality"),
        &JsValue::from_str("high"),
    );
    for cmd in commands {
        let Some(bitmap) = bitmaps.get(cmd.asset) else {
            continue;
        };
        ctx.save();
        let drawn = draw_image(ctx, &cmd, bitmap);
        ctx.restore();
        drawn?;
    }
    Ok(())
}

/// Draw one image rotated about its centre and clipped to a rounded rect.
fn draw_image(
    ctx: &web::CanvasRenderingContext2d,
    cmd: &DrawCommand,
    bitmap: &web::HtmlImageElement,
) -> Result<(), JsValue> {
    let w = cmd.size.x as f64;
    let h = cmd.size.y as f64;
    ctx.translate(cmd.center.x as f64, cmd.center.y as f64)?;
    ctx.rotate(cmd.rotation as f64)?;
    trace_rounded_rect(ctx, -w / 2.0, -h / 2.0, w, h, cmd.corner_radius as f64)?;
    ctx.clip();
    ctx.draw_image_with_html_image_element_and_dw_and_dh(bitmap, -w / 2.0, -h / 2.0, w, h)
}

fn trace_rounded_rect(
    ctx: &web::CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    radius: f64,
) -> Result<(), JsValue> {
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.arc_to(x + w, y, x + w, y + h, r)?;
    ctx.arc_to(x + w, y + h, x, y + h, r)?;
    ctx.arc_to(x, y + h, x, y, r)?;
    ctx.arc_to(x, y, x + w, y, r)?;
    ctx.close_path();
    Ok(())
}
