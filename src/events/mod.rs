pub mod motion;
pub mod pointer;

pub use motion::{wire_canvas_resize, wire_device_motion};
pub use pointer::{wire_input_handlers, InputWiring};
