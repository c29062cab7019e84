//! Game configuration
//!
//! Fixed session parameters: frame rate, window, and the desk layout.
//! Optionally loaded from a JSON file named by `DESK_ESCAPE_CONFIG`.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::EngineError;
use crate::consts::*;
use crate::engine::FrameClock;
use crate::sim::Obstacle;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "DESK_ESCAPE_CONFIG";

/// Session configuration
///
/// Values are taken as given; nothing here is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Target frames per second
    pub fps: u32,
    /// Window title
    pub title: String,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Desks, in draw and scan order
    pub obstacles: Vec<Obstacle>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: TARGET_FPS,
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            obstacles: vec![Obstacle::new(200, 300, 20, 50), Obstacle::new(500, 700, 20, 50)],
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let json = std::fs::read_to_string(path).map_err(|source| EngineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from `DESK_ESCAPE_CONFIG` if set, falling back to defaults
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            log::info!("Using default config");
            return Self::default();
        };

        match Self::load(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                log::warn!("{err}; using default config");
                Self::default()
            }
        }
    }

    /// Full time slice for one frame
    pub fn frame_budget(&self) -> Duration {
        FrameClock::frame_time(self.fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_session() {
        let config = GameConfig::default();
        assert_eq!(config.fps, 60);
        assert_eq!(config.title, "Test");
        assert_eq!((config.width, config.height), (1800, 900));
        assert_eq!(
            config.obstacles,
            vec![Obstacle::new(200, 300, 20, 50), Obstacle::new(500, 700, 20, 50)]
        );
        assert_eq!(config.frame_budget(), Duration::from_millis(16));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "fps": 30, "title": "Escape" }"#).unwrap();
        assert_eq!(config.fps, 30);
        assert_eq!(config.title, "Escape");
        assert_eq!(config.width, WINDOW_WIDTH);
        assert_eq!(config.obstacles.len(), 2);
    }

    #[test]
    fn test_obstacles_from_json() {
        let json = r#"{ "obstacles": [ { "pos": [10, 20], "width": 80, "length": 40 } ] }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.obstacles, vec![Obstacle::new(10, 20, 80, 40)]);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = GameConfig::from_json("{ fps: ").unwrap_err();
        assert!(matches!(err, EngineError::ConfigParse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("desk-escape-missing-config.json");
        let err = GameConfig::load(&path).unwrap_err();
        assert!(matches!(err, EngineError::ConfigRead { .. }));
    }

    #[test]
    fn test_load_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("desk-escape-config-{}.json", std::process::id()));
        let mut config = GameConfig::default();
        config.fps = 120;
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = GameConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }
}
