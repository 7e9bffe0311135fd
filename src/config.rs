//! Application configuration loaded from environment variables.
//!
//! Every setting has a default, so the dashboard runs with no setup.

use std::env;
use std::path::PathBuf;

pub const SCORED_FILE_NAME: &str = "eco_zones_scored.geojson";
pub const ROUTES_FILE_NAME: &str = "vessel_routes_scored.geojson";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the GeoJSON inputs
    pub data_dir: PathBuf,
    /// Server port
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            port: 8501,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        let data_dir = match env::var("DATA_DIR") {
            Ok(dir) if dir.trim().is_empty() => return Err(ConfigError::Invalid("DATA_DIR")),
            Ok(dir) => PathBuf::from(dir.trim()),
            Err(_) => defaults.data_dir,
        };

        let port = match env::var("PORT") {
            Ok(port) => port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => defaults.port,
        };

        Ok(Self { data_dir, port })
    }

    /// Required scored-segments file (self-seeded when absent).
    pub fn scored_path(&self) -> PathBuf {
        self.data_dir.join(SCORED_FILE_NAME)
    }

    /// Optional routes file.
    pub fn routes_path(&self) -> PathBuf {
        self.data_dir.join(ROUTES_FILE_NAME)
    }

    /// Routes path as shown to the user while the file is missing.
    pub fn routes_display_path(&self) -> String {
        self.routes_path().display().to_string()
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
