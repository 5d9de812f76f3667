//! Coordinate and geometry types shared by the renderer and games.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;
mod viewport;

pub use rect::{overlaps, Rect};
pub use vec2::Vec2;
pub use viewport::Viewport;
