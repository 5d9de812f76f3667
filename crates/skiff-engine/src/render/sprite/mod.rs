//! Textured quads ("sprites").
//!
//! - `options`: per-call draw configuration
//! - `geometry`: pure CPU quad construction (uv normalization, rotation, tint)
//! - `draw`: the `draw_texture` primitive over the `QuadSink` seam
//! - `batch`: per-frame quad recording
//! - `renderer`: wgpu pipeline that draws a batch

mod batch;
mod draw;
mod geometry;
mod options;
mod renderer;

pub use batch::SpriteBatch;
pub use draw::{draw_texture, QuadSink, SpriteTexture};
pub use geometry::{build_quad, normalize_source, Quad, SpriteVertex};
pub use options::DrawOptions;
pub use renderer::SpriteRenderer;
