use crate::dom;
use crate::events::motion;
use crate::input;
use floaty_core::{PointerTarget, Scene};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub scene: Rc<RefCell<Scene>>,
    pub epoch: Instant,
    pub motion_permission_asked: Rc<Cell<bool>>,
}

impl InputWiring {
    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointercancel(&w);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // iOS only grants motion access from inside a user gesture
        if !w.motion_permission_asked.replace(true) {
            motion::request_motion_permission();
        }

        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let target = w.scene.borrow_mut().pointer_down(pos, w.now_ms());
        if let PointerTarget::Image(i) = target {
            log::info!("[pointer] grab image {} at ({:.0},{:.0})", i, pos.x, pos.y);
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let color = w.scene.borrow_mut().pointer_move(pos);
        if let Some(color) = color {
            dom::set_background(&w.document, color);
        }
        if ev.buttons() != 0 {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let mut scene = w.scene.borrow_mut();
        if let Some(i) = scene.dragged_index() {
            log::info!("[pointer] release image {}", i);
        }
        scene.pointer_up(pos, w.now_ms());
        drop(scene);
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointercancel(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.scene.borrow_mut().pointer_cancel();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let document = w.document.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let color = w.scene.borrow_mut().wheel(ev.delta_y() as f32);
        dom::set_background(&w.document, color);
    }) as Box<dyn FnMut(_)>);

    // non-passive so the page does not scroll underneath the canvas
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );

    closure.forget();
}
