//! Desk Escape entry point
//!
//! Loads the config, runs the game loop on the main thread, exits with 0
//! once the loop stops.

use desk_escape::{EngineError, GameConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load_or_default();
    log::info!(
        "{} starting ({}x{} @ {} fps)",
        config.title,
        config.width,
        config.height,
        config.fps
    );

    if let Err(err) = run(&config) {
        log::error!("{err}");
        std::process::exit(1);
    }
    std::process::exit(0);
}

#[cfg(feature = "window")]
fn run(config: &GameConfig) -> Result<(), EngineError> {
    desk_escape::platform::window::run(config)
}

#[cfg(not(feature = "window"))]
fn run(config: &GameConfig) -> Result<(), EngineError> {
    log::info!("Running headless; build with `--features window` for a native window");
    desk_escape::platform::run_headless(config)
}
