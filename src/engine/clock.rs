//! Frame pacing
//!
//! Best-effort fixed frame rate: whatever is left of the frame budget after
//! update and render is slept away. Overruns sleep for zero and the next
//! frame starts immediately; there is no catch-up.

use std::time::{Duration, Instant};

use crate::EngineError;

/// Measures one loop iteration against the frame budget
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    started: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Mark the start of an iteration
    pub fn start(&mut self) {
        self.started = Instant::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Time left to sleep this iteration at `target_fps`
    pub fn tick(&self, target_fps: u32) -> Duration {
        Self::budget(self.elapsed(), target_fps)
    }

    /// Whole-millisecond frame slice, `1000 / fps`
    pub fn frame_time(target_fps: u32) -> Duration {
        Duration::from_millis(1000 / u64::from(target_fps.max(1)))
    }

    /// `max(0, 1000 / fps - elapsed_ms)` with elapsed truncated to milliseconds
    pub fn budget(elapsed: Duration, target_fps: u32) -> Duration {
        let elapsed_ms = Duration::from_millis(elapsed.as_millis() as u64);
        Self::frame_time(target_fps).saturating_sub(elapsed_ms)
    }
}

/// Suspends the calling thread between frames
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration) -> Result<(), EngineError>;
}

/// Sleeps until a monotonic deadline
///
/// Early wake-ups go back to sleep for the remainder.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) -> Result<(), EngineError> {
        if duration.is_zero() {
            return Ok(());
        }

        let deadline = Instant::now()
            .checked_add(duration)
            .ok_or_else(|| EngineError::Sleep(format!("{duration:?} overflows the monotonic clock")))?;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(());
            }
            std::thread::sleep(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_at_60_fps() {
        assert_eq!(FrameClock::budget(Duration::ZERO, 60), Duration::from_millis(16));
        assert_eq!(FrameClock::budget(Duration::from_millis(10), 60), Duration::from_millis(6));
    }

    #[test]
    fn test_budget_truncates_elapsed_to_millis() {
        // 10.9ms counts as 10ms
        assert_eq!(
            FrameClock::budget(Duration::from_micros(10_900), 60),
            Duration::from_millis(6)
        );
    }

    #[test]
    fn test_overrun_clamps_to_zero() {
        assert_eq!(FrameClock::budget(Duration::from_millis(16), 60), Duration::ZERO);
        assert_eq!(FrameClock::budget(Duration::from_millis(250), 60), Duration::ZERO);
        assert_eq!(FrameClock::budget(Duration::from_millis(1), 1000), Duration::ZERO);
    }

    #[test]
    fn test_frame_time() {
        assert_eq!(FrameClock::frame_time(60), Duration::from_millis(16));
        assert_eq!(FrameClock::frame_time(30), Duration::from_millis(33));
        assert_eq!(FrameClock::frame_time(1), Duration::from_secs(1));
    }

    #[test]
    fn test_fresh_clock_has_most_of_the_budget() {
        let mut clock = FrameClock::new();
        clock.start();
        assert!(clock.tick(1) > Duration::from_millis(500));
    }

    #[test]
    fn test_thread_sleeper_reaches_deadline() {
        let start = Instant::now();
        ThreadSleeper.sleep(Duration::from_millis(5)).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(5));

        ThreadSleeper.sleep(Duration::ZERO).unwrap();
    }
}
