use std::fmt;
use std::path::PathBuf;

/// Error returned by the texture loading functions.
#[derive(Debug)]
pub enum TextureError {
    /// The image file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// No embedded asset is registered under this id.
    ResourceNotFound(String),
    /// The bytes are not a recognized or intact image; carries the decoder's reason.
    Decode(String),
    /// Width or height is zero.
    InvalidDimensions { width: u32, height: u32 },
    /// Raw pixel buffer does not hold `width * height` RGBA texels.
    PixelBufferSize { expected: usize, actual: usize },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::Io { path, source } => {
                write!(f, "unable to read texture file {}: {source}", path.display())
            }
            TextureError::ResourceNotFound(id) => {
                write!(f, "embedded texture resource '{id}' not found")
            }
            TextureError::Decode(reason) => write!(f, "failed to decode texture: {reason}"),
            TextureError::InvalidDimensions { width, height } => {
                write!(f, "invalid texture dimensions {width}x{height}")
            }
            TextureError::PixelBufferSize { expected, actual } => write!(
                f,
                "pixel buffer holds {actual} bytes, expected {expected} for RGBA8"
            ),
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextureError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
