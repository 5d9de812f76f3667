//! GPU rendering subsystem.
//!
//! Games record sprites through the immediate-mode [`draw_texture`] call; the
//! runtime renders the recorded [`SpriteBatch`] once per frame.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC with an orthographic projection uniform.

mod ctx;
pub mod sprite;

pub use ctx::{RenderCtx, RenderTarget};
pub use sprite::{
    build_quad, draw_texture, normalize_source, DrawOptions, Quad, QuadSink, SpriteBatch,
    SpriteRenderer, SpriteTexture, SpriteVertex,
};
