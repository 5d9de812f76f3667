/// Viewport size in logical pixels.
///
/// The sprite renderer maps `(0, 0)-(width, height)` onto the whole surface
/// with [`Viewport::ortho_projection`], +Y down.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Column-major orthographic projection (top-left origin, +Y down).
    ///
    /// Degenerate sizes are clamped to one pixel so the matrix stays finite
    /// while the window is minimized.
    pub fn ortho_projection(self) -> [[f32; 4]; 4] {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        [
            [2.0 / w, 0.0, 0.0, 0.0],
            [0.0, -2.0 / h, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [-1.0, 1.0, 0.0, 1.0],
        ]
    }
}
