//! Frame timing.
//!
//! Call `FrameClock::tick()` once per rendered frame; the resulting
//! `FrameTime` feeds the delta handed to games.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
