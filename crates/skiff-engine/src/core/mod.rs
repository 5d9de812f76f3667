//! Core engine-facing contracts.
//!
//! The stable interface between the window runtime and games: the `Game`
//! trait and the contexts passed to its callbacks.

mod app;
mod ctx;

pub use app::Game;
pub use ctx::{FrameCtx, FrameInfo, InitCtx};
