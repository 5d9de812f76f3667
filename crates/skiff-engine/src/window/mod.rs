//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer
//! and the game callbacks.

mod keymap;
mod runtime;

pub use runtime::{Lifecycle, Runtime, RuntimeConfig};
