//! Color model shared between games and the sprite renderer.
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Color;
