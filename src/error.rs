//! Engine error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the engine and its hosts.
///
/// Only configuration and window setup errors are fatal; the game loop logs
/// present and sleep failures and keeps ticking.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid JSON for `GameConfig`
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The host could not show a finished frame
    #[error("failed to present frame: {0}")]
    Present(String),

    /// End-of-tick suspension did not complete
    #[error("frame sleep interrupted: {0}")]
    Sleep(String),

    /// Window or surface creation failed
    #[error("window error: {0}")]
    Window(String),
}
