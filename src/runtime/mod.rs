//! Runtime: winit event loop, mouse/keyboard dispatch

pub mod app;
pub mod input;
pub mod mouse;

pub use app::App;
