//! Platform hosts
//!
//! A host owns the presentation surface and the key state and hands them to
//! the game loop:
//! - headless: frames are counted and dropped, no keys are ever held
//! - `window` feature: a winit window with a `pixels` surface

#[cfg(feature = "window")]
pub mod window;

use crate::engine::{GameLoop, ThreadSleeper};
use crate::renderer::{FrameBuffer, Renderer};
use crate::sim::{DeskCollision, KeyState};
use crate::{EngineError, GameConfig};

/// Renderer with no surface; reports progress through the log
#[derive(Debug, Clone)]
pub struct HeadlessRenderer {
    report_every: u64,
    presented: u64,
    visible: bool,
}

impl HeadlessRenderer {
    /// Log a progress line every `report_every` frames
    pub fn new(report_every: u32) -> Self {
        Self {
            report_every: u64::from(report_every.max(1)),
            presented: 0,
            visible: true,
        }
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Renderer for HeadlessRenderer {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), EngineError> {
        self.presented += 1;
        if self.presented % self.report_every == 0 {
            log::debug!(
                "Presented {} frames ({}x{})",
                self.presented,
                frame.width(),
                frame.height()
            );
        }
        Ok(())
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

/// Run the desk game without a window until the process is terminated
pub fn run_headless(config: &GameConfig) -> Result<(), EngineError> {
    let mut game = GameLoop::new(DeskCollision, config);
    let keys = KeyState::new();
    let mut renderer = HeadlessRenderer::new(config.fps);
    game.run(&keys, &mut renderer, &mut ThreadSleeper);
    Ok(())
}
