//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler, window management and the tick loop
//! - `input` - Keyboard event to message mapping

pub mod app;
pub mod input;

pub use app::App;
