//! Desk Escape - a fixed-timestep 2D escape game
//!
//! Core modules:
//! - `sim`: Player/obstacle state, keyboard input, desk collision
//! - `engine`: Frame clock and the single-threaded game loop
//! - `renderer`: Software frame buffer, scene painting, proximity glow
//! - `platform`: Headless and windowed hosts
//! - `config`: JSON-backed game configuration

pub mod config;
pub mod engine;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::EngineError;

/// Game configuration constants
pub mod consts {
    /// Target frame rate
    pub const TARGET_FPS: u32 = 60;

    /// Window defaults
    pub const WINDOW_TITLE: &str = "Test";
    pub const WINDOW_WIDTH: u32 = 1800;
    pub const WINDOW_HEIGHT: u32 = 900;

    /// An obstacle can become active while the player's signed offset from its
    /// origin is below this on either axis
    pub const PROXIMITY_THRESHOLD: i32 = 5;

    /// Player visuals
    pub const HALO_RADIUS: i32 = 15;
    pub const PLAYER_DOT_RADIUS: i32 = 5;
    /// Halo oval is drawn this far up-left of the player position
    pub const HALO_OFFSET: i32 = 10;

    /// Proximity glow around obstacles
    pub const GLOW_RADIUS: i32 = 15;
    /// Glow window coordinates are shifted by this much when plotted
    pub const GLOW_OFFSET: i32 = 15;
}
