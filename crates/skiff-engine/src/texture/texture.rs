use std::path::Path;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::assets::EmbeddedAssets;

use super::decode::{decode_rgba, validate_rgba};
use super::{TextureError, TextureLoader};

static NEXT_TEXTURE_ID: AtomicU64 = AtomicU64::new(1);

/// Storage format of sprite textures.
///
/// Not sRGB: texels are sampled as stored, so tint and blending happen on
/// the encoded values, paired with the non-sRGB surface `GpuInit` selects
/// by default.
pub const SPRITE_TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Process-unique texture identity.
///
/// Used by the sprite batch to group consecutive quads that sample the same
/// texture into one draw call.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(u64);

impl TextureId {
    /// Allocates a fresh id.
    pub fn next() -> Self {
        Self(NEXT_TEXTURE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// GPU-resident RGBA texture.
///
/// Sampled with nearest-neighbour filtering and border clamping. Pixel data
/// is immutable after creation. GPU memory is released when the texture is
/// dropped, or right away through [`Texture::release`].
pub struct Texture {
    id: TextureId,
    width: u32,
    height: u32,
    texture: wgpu::Texture,
    bind_group: Rc<wgpu::BindGroup>,
}

impl Texture {
    /// Reads an encoded image file and uploads it.
    pub fn load_from_file(
        loader: &TextureLoader<'_>,
        path: impl AsRef<Path>,
    ) -> Result<Self, TextureError> {
        let bytes = read_texture_file(path.as_ref())?;
        Self::load_from_bytes(loader, &bytes)
    }

    /// Uploads an image registered in `assets` under `id`.
    pub fn load_from_resource(
        loader: &TextureLoader<'_>,
        assets: &EmbeddedAssets,
        id: &str,
    ) -> Result<Self, TextureError> {
        let bytes = resource_bytes(assets, id)?;
        Self::load_from_bytes(loader, bytes)
    }

    /// Decodes an encoded image (PNG, JPEG, ...) and uploads it.
    pub fn load_from_bytes(loader: &TextureLoader<'_>, bytes: &[u8]) -> Result<Self, TextureError> {
        let image = decode_rgba(bytes)?;
        Self::from_rgba(loader, image.width, image.height, &image.rgba)
    }

    /// Uploads raw RGBA8 pixels, rows top to bottom.
    pub fn from_rgba(
        loader: &TextureLoader<'_>,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) -> Result<Self, TextureError> {
        validate_rgba(width, height, rgba)?;

        let id = TextureId::next();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = loader.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("skiff sprite texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: SPRITE_TEXTURE_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        loader.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = loader.create_sampler();

        let bind_group = loader.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("skiff sprite texture bind group"),
            layout: loader.layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        log::debug!("uploaded texture {id:?} ({width}x{height})");

        Ok(Self {
            id,
            width,
            height,
            texture,
            bind_group: Rc::new(bind_group),
        })
    }

    #[inline]
    pub fn id(&self) -> TextureId {
        self.id
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)` in pixels.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Frees the GPU allocation now instead of waiting for the last
    /// outstanding bind-group reference to go away.
    ///
    /// Must not be called from `Game::render` for a texture drawn in the
    /// same frame: the recorded quads still sample it at submission.
    pub fn release(self) {
        log::debug!("releasing texture {:?}", self.id);
        self.texture.destroy();
    }

    pub(crate) fn bind_group(&self) -> &Rc<wgpu::BindGroup> {
        &self.bind_group
    }
}

fn read_texture_file(path: &Path) -> Result<Vec<u8>, TextureError> {
    log::debug!("loading texture from {}", path.display());
    std::fs::read(path).map_err(|source| TextureError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn resource_bytes(assets: &EmbeddedAssets, id: &str) -> Result<&'static [u8], TextureError> {
    log::debug!("loading texture from embedded resource '{id}'");
    assets
        .get(id)
        .ok_or_else(|| TextureError::ResourceNotFound(id.to_string()))
}

impl std::fmt::Debug for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture")
            .field("id", &self.id)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = TextureId::next();
        let b = TextureId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn missing_file_is_an_io_error_with_its_path() {
        let path = std::env::temp_dir().join("skiff-no-such-texture.png");
        let err = read_texture_file(&path).unwrap_err();

        match &err {
            TextureError::Io { path: reported, source } => {
                assert_eq!(reported, &path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io, got {other:?}"),
        }
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn absent_resource_id_is_reported() {
        let assets = EmbeddedAssets::new().with("/ship.png", b"\x89PNG");

        let err = resource_bytes(&assets, "/missing.png").unwrap_err();
        assert!(matches!(&err, TextureError::ResourceNotFound(id) if id == "/missing.png"));

        assert_eq!(resource_bytes(&assets, "/ship.png").unwrap(), b"\x89PNG");
    }
}
