use crate::dom;
use crate::render;
use floaty_core::Scene;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub bitmaps: Rc<Vec<web::HtmlImageElement>>,

    pub started: Instant,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let report = self.scene.borrow_mut().step();
        if let Some(color) = report.background {
            dom::set_background(&self.document, color);
        }
        if let Some(on) = report.tilt_control {
            log::info!("[motion] shake: tilt control {}", if on { "on" } else { "off" });
        }

        let scene = self.scene.borrow();
        let drawn =
            render::draw_scene(&self.ctx, &self.canvas, scene.draw_commands(), &self.bitmaps);
        if let Err(e) = drawn {
            log::error!("render error: {:?}", e);
        }
        drop(scene);

        self.frames += 1;
        if self.frames == 1 {
            log::info!(
                "[frame] first frame after {:.0} ms",
                self.started.elapsed().as_secs_f64() * 1000.0
            );
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
