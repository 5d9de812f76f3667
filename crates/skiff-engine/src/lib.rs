//! Skiff engine crate.
//!
//! Owns the window/runtime loop, the GPU device layer and the immediate-mode
//! textured-quad API used by games built on top of it.

pub mod assets;
pub mod core;
pub mod coords;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod texture;
pub mod time;
pub mod window;
