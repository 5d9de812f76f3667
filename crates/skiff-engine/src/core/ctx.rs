use crate::coords::Rect;
use crate::input::{InputState, Key};
use crate::render::{self, DrawOptions, SpriteBatch};
use crate::texture::{Texture, TextureLoader};

/// Context handed to `Game::init`.
pub struct InitCtx<'a> {
    textures: TextureLoader<'a>,
    window_size: (f32, f32),
}

impl<'a> InitCtx<'a> {
    pub(crate) fn new(textures: TextureLoader<'a>, window_size: (f32, f32)) -> Self {
        Self {
            textures,
            window_size,
        }
    }

    /// Loader for textures drawable by this runtime.
    pub fn textures(&self) -> &TextureLoader<'a> {
        &self.textures
    }

    /// Logical window size at initialization, `(width, height)`.
    pub fn window_size(&self) -> (f32, f32) {
        self.window_size
    }
}

/// Immutable per-frame snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameInfo {
    /// Seconds since the previous frame (first frame: since the loop started).
    pub delta: f32,
    /// Logical window width.
    pub width: f32,
    /// Logical window height.
    pub height: f32,
    /// Zero-based frame counter.
    pub frame_index: u64,
}

/// Per-frame context passed to `Game::render`.
pub struct FrameCtx<'a> {
    input: &'a InputState,
    batch: &'a mut SpriteBatch,
    close_requested: bool,
}

impl<'a> FrameCtx<'a> {
    pub(crate) fn new(input: &'a InputState, batch: &'a mut SpriteBatch) -> Self {
        Self {
            input,
            batch,
            close_requested: false,
        }
    }

    /// Draws `texture` into `target` (logical pixels, Y down).
    ///
    /// Silently does nothing when either is `None`.
    pub fn draw_texture(
        &mut self,
        texture: Option<&Texture>,
        target: Option<Rect>,
        options: &DrawOptions,
    ) {
        render::draw_texture(&mut *self.batch, texture, target, options);
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.input.is_key_down(key)
    }

    /// Ends the loop after the current frame is presented.
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, KeyState};

    #[test]
    fn absent_texture_records_nothing() {
        let input = InputState::default();
        let mut batch = SpriteBatch::new();

        let mut ctx = FrameCtx::new(&input, &mut batch);
        ctx.draw_texture(None, Some(Rect::new(0.0, 0.0, 10.0, 10.0)), &DrawOptions::default());
        assert!(!ctx.close_requested());

        assert!(batch.is_empty());
    }

    #[test]
    fn forwards_key_queries_and_close_requests() {
        let mut input = InputState::default();
        input.apply_event(&InputEvent::Key {
            key: Key::ArrowRight,
            state: KeyState::Pressed,
            repeat: false,
        });
        let mut batch = SpriteBatch::new();

        let mut ctx = FrameCtx::new(&input, &mut batch);
        assert!(ctx.is_key_down(Key::ArrowRight));
        assert!(!ctx.is_key_down(Key::ArrowLeft));

        ctx.request_close();
        assert!(ctx.close_requested());
    }
}
