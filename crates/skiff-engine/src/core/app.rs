use anyhow::Result;

use super::ctx::{FrameCtx, FrameInfo, InitCtx};

/// Game contract driven by `window::Runtime`.
pub trait Game {
    /// Called exactly once, after the window and GPU exist and before the
    /// first frame. Load textures here.
    ///
    /// Returning an error aborts the runtime; `Runtime::run` returns it.
    fn init(&mut self, ctx: &mut InitCtx<'_>) -> Result<()>;

    /// Called once per frame, after the framebuffer is cleared and before
    /// it is presented.
    fn render(&mut self, frame: FrameInfo, ctx: &mut FrameCtx<'_>);
}
