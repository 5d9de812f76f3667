use super::TextureError;

/// Decoded image as tightly packed RGBA8 rows, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Decodes an encoded raster image (PNG, JPEG, BMP, GIF) into RGBA8.
///
/// Images are never flipped; row 0 is the top of the picture.
pub fn decode_rgba(bytes: &[u8]) -> Result<DecodedImage, TextureError> {
    let image = image::load_from_memory(bytes).map_err(|e| TextureError::Decode(e.to_string()))?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Checks that `rgba` is a non-empty `width x height` RGBA8 buffer.
pub(crate) fn validate_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<(), TextureError> {
    if width == 0 || height == 0 {
        return Err(TextureError::InvalidDimensions { width, height });
    }

    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        return Err(TextureError::PixelBufferSize {
            expected,
            actual: rgba.len(),
        });
    }

    Ok(())
}
