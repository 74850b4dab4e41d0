#![cfg(target_arch = "wasm32")]
use floaty_core::{MotionConfig, Scene};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("floaty-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    // `start` can be re-entered when the module is instantiated twice
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[init] already started; ignoring");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let mode = input::parse_motion_mode(canvas.get_attribute(constants::MOTION_ATTR).as_deref());
    let image_paths =
        input::parse_image_list(canvas.get_attribute(constants::IMAGES_ATTR).as_deref());
    let ctx = dom::context_2d(&canvas)?;

    let viewport = dom::sync_canvas_to_window(&canvas);
    let scene = Rc::new(RefCell::new(Scene::new(MotionConfig::with_mode(mode), viewport)));
    dom::set_background(&document, scene.borrow().background());
    log::info!(
        "[scene] mode={} viewport={}x{} images={}",
        mode,
        viewport.width as u32,
        viewport.height as u32,
        image_paths.len()
    );

    // Gestures work while images are still loading
    let epoch = Instant::now();
    events::wire_canvas_resize(&canvas, scene.clone());
    events::wire_device_motion(scene.clone(), epoch);
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        scene: scene.clone(),
        epoch,
        motion_permission_asked: Rc::new(Cell::new(false)),
    });

    let bitmaps = assets::load_all(&image_paths).await;
    if bitmaps.is_empty() {
        return Err(anyhow::anyhow!("none of {} images loaded", image_paths.len()));
    }
    {
        let mut rng = rand::thread_rng();
        let mut s = scene.borrow_mut();
        for asset in 0..bitmaps.len() {
            s.spawn_image(asset, &mut rng);
        }
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        document,
        canvas,
        ctx,
        bitmaps: Rc::new(bitmaps),
        started: epoch,
        frames: 0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
