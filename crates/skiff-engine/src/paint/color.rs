/// Straight-alpha RGBA color, channels in `[0, 1]`.
///
/// Sprites are blended as `src.a * src + (1 - src.a) * dst`, so colors are
/// never premultiplied here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Decodes a packed `0xAARRGGBB` value.
    #[inline]
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_rgba_u8(r, g, b, a)
    }

    /// Creates a color from 8-bit channels (`0`–`255`).
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Packs back into `0xAARRGGBB`, clamping and rounding each channel.
    #[inline]
    pub fn to_argb(self) -> u32 {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        u32::from_be_bytes([q(self.a), q(self.r), q(self.g), q(self.b)])
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    /// Opaque white: the tint that leaves a sampled texel unchanged.
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_opaque_green() {
        let c = Color::from_argb(0xFF00FF00);
        assert_eq!(c, Color::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn channel_order_is_alpha_red_green_blue() {
        let c = Color::from_argb(0x80FF0033);
        assert_eq!(c.a, 128.0 / 255.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 51.0 / 255.0);
    }

    #[test]
    fn white_is_default_and_all_ones() {
        assert_eq!(Color::default(), Color::from_argb(0xFFFFFFFF));
        assert_eq!(Color::WHITE.to_array(), [1.0; 4]);
    }

    #[test]
    fn packs_back_to_argb() {
        for argb in [0xFF00FF00, 0x00000000, 0x12345678, 0xFFFFFFFF] {
            assert_eq!(Color::from_argb(argb).to_argb(), argb);
        }
        assert_eq!(Color::new(2.0, -1.0, 0.5, 1.0).to_argb(), 0xFFFF0080);
    }
}
