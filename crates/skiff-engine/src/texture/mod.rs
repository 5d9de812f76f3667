//! GPU textures.
//!
//! Loading pipeline: bytes (file / embedded asset / caller) -> `image` decode
//! to RGBA8 -> upload into an `Rgba8Unorm` texture with a nearest,
//! border-clamped sampler.

mod decode;
mod error;
mod loader;
#[allow(clippy::module_inception)]
mod texture;

pub use decode::{decode_rgba, DecodedImage};
pub use error::TextureError;
pub use loader::TextureLoader;
pub use texture::{Texture, TextureId, SPRITE_TEXTURE_FORMAT};
