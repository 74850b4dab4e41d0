use crate::dom;
use crate::input;
use floaty_core::{Scene, SceneEvent};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// Device motion only queues samples; the frame loop drains them.
pub fn wire_device_motion(scene: Rc<RefCell<Scene>>, epoch: Instant) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::DeviceMotionEvent| {
            let Some(acc) = ev.acceleration_including_gravity() else {
                return;
            };
            let now_ms = epoch.elapsed().as_secs_f64() * 1000.0;
            if let Some(sample) = input::motion_sample(acc.x(), acc.y(), acc.z(), now_ms) {
                scene
                    .borrow_mut()
                    .push_event(SceneEvent::DeviceMotion(sample));
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("devicemotion", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<Scene>>) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let viewport = dom::sync_canvas_to_window(&canvas_resize);
        scene.borrow_mut().push_event(SceneEvent::Resize(viewport));
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Ask for motion access where the browser gates it behind
/// `DeviceMotionEvent.requestPermission` (iOS Safari). A refusal only means
/// tilt never arrives; it is logged and otherwise ignored.
pub fn request_motion_permission() {
    let Some(window) = web::window() else {
        return;
    };
    let ctor = match js_sys::Reflect::get(&window, &JsValue::from_str("DeviceMotionEvent")) {
        Ok(c) if !c.is_undefined() => c,
        _ => return,
    };
    let request = match js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission")) {
        Ok(f) => match f.dyn_into::<js_sys::Function>() {
            Ok(f) => f,
            Err(_) => return,
        },
        Err(_) => return,
    };
    let promise = match request.call0(&ctor) {
        Ok(p) => js_sys::Promise::from(p),
        Err(e) => {
            log::warn!("[motion] permission request failed: {:?}", e);
            return;
        }
    };
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(state) if state.as_string().as_deref() == Some("granted") => {
                log::info!("[motion] device motion permission granted");
            }
            Ok(state) => log::warn!("[motion] device motion permission: {:?}", state),
            Err(e) => log::warn!("[motion] device motion permission denied: {:?}", e),
        }
    });
}
