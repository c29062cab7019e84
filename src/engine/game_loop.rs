//! Fixed-timestep game loop
//!
//! One thread, strictly sequential ticks:
//!
//! ```text
//! poll input -> simulation.update -> apply move -> simulation.render
//!            -> renderer.present -> clock.tick -> sleep
//! ```
//!
//! The loop only stops when its [`RunFlag`] is cleared from outside. Normal
//! play never clears it, so a headless session runs until the process is
//! killed. The flag is raised once, in [`GameLoop::new`]; a stop requested
//! before `run` still holds.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::clock::{FrameClock, Sleeper};
use crate::GameConfig;
use crate::renderer::{FrameBuffer, Renderer};
use crate::sim::{InputSource, Player, Simulation, World};

/// Lifecycle of a loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

/// Shared quit signal
///
/// Cloning hands out another handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct RunFlag(Arc<AtomicBool>);

impl RunFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Ask the loop to stop after the current tick
    pub fn stop(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Owns the world and drives a [`Simulation`] at a target frame rate
pub struct GameLoop<S> {
    simulation: S,
    world: World,
    frame: FrameBuffer,
    clock: FrameClock,
    target_fps: u32,
    size: (u32, u32),
    state: LoopState,
    run_flag: RunFlag,
    frames: u64,
}

impl<S: Simulation> GameLoop<S> {
    pub fn new(simulation: S, config: &GameConfig) -> Self {
        let run_flag = RunFlag::new();
        run_flag.raise();
        Self {
            simulation,
            world: World::new(config.obstacles.clone()),
            frame: FrameBuffer::default(),
            clock: FrameClock::new(),
            target_fps: config.fps,
            size: (config.width, config.height),
            state: LoopState::Stopped,
            run_flag,
            frames: 0,
        }
    }

    /// One-time setup: frame buffer, player at the origin, running
    pub fn start(&mut self) {
        let (width, height) = self.size;
        self.frame = FrameBuffer::new(width, height);
        self.world.player = Player::default();
        self.frames = 0;
        self.state = LoopState::Running;
        log::info!(
            "Game loop started: {}x{} @ {} fps, {} desks",
            width,
            height,
            self.target_fps,
            self.world.obstacles.len()
        );
    }

    /// Run one iteration and return how long to sleep before the next
    pub fn tick(&mut self, input: &dyn InputSource, renderer: &mut dyn Renderer) -> Duration {
        self.clock.start();

        let intent = self.simulation.update(&self.world, input);
        self.world.player.apply(intent);

        self.simulation.render(&self.world, &mut self.frame);
        if let Err(err) = renderer.present(&self.frame) {
            log::warn!("Frame {}: {err}", self.frames);
        }
        self.frames += 1;

        let pause = self.clock.tick(self.target_fps);
        if pause.is_zero() {
            log::debug!(
                "Frame {} overran its budget ({:?} elapsed)",
                self.frames,
                self.clock.elapsed()
            );
        }
        pause
    }

    /// Start, tick until the run flag is cleared, then shut down
    pub fn run(
        &mut self,
        input: &dyn InputSource,
        renderer: &mut dyn Renderer,
        sleeper: &mut dyn Sleeper,
    ) {
        self.start();
        while self.is_running() {
            let pause = self.tick(input, renderer);
            if let Err(err) = sleeper.sleep(pause) {
                log::warn!("{err}; continuing");
            }
        }
        self.finish(renderer);
    }

    /// Terminal transition: hide the surface and stop
    pub fn finish(&mut self, renderer: &mut dyn Renderer) {
        if self.state == LoopState::Stopped {
            return;
        }
        renderer.hide();
        self.run_flag.stop();
        self.state = LoopState::Stopped;
        log::info!("Game loop stopped after {} frames", self.frames);
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running && self.run_flag.is_raised()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Handle for stopping the loop from a host
    pub fn run_flag(&self) -> RunFlag {
        self.run_flag.clone()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.world.player
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Frames presented since `start`
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
