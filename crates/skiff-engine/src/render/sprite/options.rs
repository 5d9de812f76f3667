use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// Options for a single `draw_texture` call.
///
/// Every field has a neutral default, so `DrawOptions::default()` draws the
/// whole texture, unrotated and untinted.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawOptions {
    /// Sub-region of the texture in texture pixels. `None` = whole texture.
    pub source: Option<Rect>,

    /// Clockwise rotation in degrees.
    pub rotation_degrees: f32,

    /// Rotation pivot relative to the target rect's top-left corner.
    /// `None` = the rect's centre.
    pub pivot: Option<Vec2>,

    /// Multiplied into every sampled texel.
    pub tint: Color,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            source: None,
            rotation_degrees: 0.0,
            pivot: None,
            tint: Color::WHITE,
        }
    }
}

impl DrawOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_source(mut self, source: Rect) -> Self {
        self.source = Some(source);
        self
    }

    #[inline]
    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    #[inline]
    pub fn with_pivot(mut self, x: f32, y: f32) -> Self {
        self.pivot = Some(Vec2::new(x, y));
        self
    }

    #[inline]
    pub fn tinted(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    /// Tint from a packed `0xAARRGGBB` value.
    #[inline]
    pub fn tinted_argb(self, argb: u32) -> Self {
        self.tinted(Color::from_argb(argb))
    }
}
