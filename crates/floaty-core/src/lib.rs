pub mod config;
pub mod constants;
pub mod error;
pub mod gesture;
pub mod image;
pub mod layout;
pub mod motion;
pub mod palette;
pub mod scene;
pub mod viewport;

pub use config::*;
pub use constants::*;
pub use error::FloatyError;
pub use gesture::*;
pub use image::*;
pub use motion::*;
pub use palette::*;
pub use scene::*;
pub use viewport::*;
