//! Frame loop and pacing

pub mod clock;
pub mod game_loop;

pub use clock::{FrameClock, Sleeper, ThreadSleeper};
pub use game_loop::{GameLoop, LoopState, RunFlag};
