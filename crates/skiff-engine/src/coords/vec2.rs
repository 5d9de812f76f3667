use core::ops::{Add, Div, Mul, Sub};

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotates `self` around `pivot` by `degrees`.
    ///
    /// With +Y pointing down, a positive angle turns clockwise on screen.
    #[inline]
    pub fn rotated_about(self, pivot: Vec2, degrees: f32) -> Vec2 {
        if degrees == 0.0 {
            return self;
        }
        let (sin, cos) = degrees.to_radians().sin_cos();
        let d = self - pivot;
        Vec2::new(
            pivot.x + d.x * cos - d.y * sin,
            pivot.y + d.x * sin + d.y * cos,
        )
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn zero_rotation_is_identity() {
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(p.rotated_about(Vec2::new(1.0, 1.0), 0.0), p);
    }

    #[test]
    fn quarter_turn_is_clockwise_on_screen() {
        // Right of the pivot ends up below it.
        let p = Vec2::new(1.0, 0.0).rotated_about(Vec2::default(), 90.0);
        assert!(close(p, Vec2::new(0.0, 1.0)), "{p:?}");
    }

    #[test]
    fn full_turn_returns_home() {
        let p = Vec2::new(7.0, -2.0);
        assert!(close(p.rotated_about(Vec2::new(2.0, 2.0), 360.0), p));
    }
}
