use skiff_engine::coords::Rect;

/// Side length of the drawn ship, logical pixels.
pub const SHIP_SIZE: f32 = 100.0;

/// Horizontal speed, logical pixels per second.
const SPEED: f32 = 400.0;

/// Player ship, tracked as a horizontal offset from the screen centre.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Ship {
    offset: f32,
}

impl Ship {
    /// Moves the ship for one frame. `axis` is -1 (left), 0 or 1 (right).
    ///
    /// The offset is clamped so the rect returned by [`Ship::rect`] for the
    /// same `texture_width` stays inside a window of `window_width`. A window
    /// narrower than the ship pins it to the left edge.
    pub fn steer(&mut self, axis: f32, delta: f32, window_width: f32, texture_width: u32) {
        let anchor = window_width / 2.0 - texture_width as f32 / 2.0;
        let min = -anchor;
        let max = (window_width - SHIP_SIZE - anchor).max(min);
        self.offset = (self.offset + axis * SPEED * delta).clamp(min, max);
    }

    /// Ship rectangle, anchored to the bottom edge of the window.
    ///
    /// The sprite is centred using the texture's own width, so a texture
    /// wider or narrower than the drawn size shifts it.
    pub fn rect(&self, window: (f32, f32), texture_width: u32) -> Rect {
        let (width, height) = window;
        Rect::new(
            width / 2.0 - texture_width as f32 / 2.0 + self.offset,
            height - SHIP_SIZE,
            SHIP_SIZE,
            SHIP_SIZE,
        )
    }
}

/// Steering axis from two opposing inputs.
pub fn axis(left: bool, right: bool) -> f32 {
    match (left, right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_bottom_centre() {
        let rect = Ship::default().rect((1440.0, 900.0), 100);
        assert_eq!(rect, Rect::new(670.0, 800.0, 100.0, 100.0));
    }

    #[test]
    fn steering_scales_with_delta() {
        let mut ship = Ship::default();
        ship.steer(1.0, 0.5, 1440.0, 100);
        assert_eq!(ship.rect((1440.0, 900.0), 100).x(), 870.0);

        ship.steer(-1.0, 0.25, 1440.0, 100);
        assert_eq!(ship.rect((1440.0, 900.0), 100).x(), 770.0);
    }

    #[test]
    fn stays_inside_window() {
        let mut ship = Ship::default();
        ship.steer(-1.0, 10.0, 1440.0, 100);
        assert_eq!(ship.rect((1440.0, 900.0), 100).left(), 0.0);

        ship.steer(1.0, 10.0, 1440.0, 100);
        assert_eq!(ship.rect((1440.0, 900.0), 100).right(), 1440.0);
    }

    #[test]
    fn narrow_texture_still_stays_inside_window() {
        let window = (1440.0, 900.0);
        let mut ship = Ship::default();

        ship.steer(1.0, 10.0, window.0, 64);
        assert_eq!(ship.rect(window, 64).right(), 1440.0);

        ship.steer(-1.0, 10.0, window.0, 64);
        assert_eq!(ship.rect(window, 64).left(), 0.0);
    }

    #[test]
    fn window_narrower_than_ship_pins_left() {
        let mut ship = Ship::default();
        ship.steer(1.0, 1.0, 80.0, 100);
        assert_eq!(ship.rect((80.0, 600.0), 100).left(), 0.0);
    }

    #[test]
    fn opposing_keys_cancel() {
        assert_eq!(axis(true, true), 0.0);
        assert_eq!(axis(true, false), -1.0);
        assert_eq!(axis(false, true), 1.0);
        assert_eq!(axis(false, false), 0.0);
    }
}
