//! Mission file loading.
//!
//! A mission file is a single JSON document:
//!
//! ```json
//! {
//!   "mission": { "type": "PrecisionNavigation" },
//!   "waypoints": [[42.444241, -76.481933], [42.444600, -76.481500]],
//!   "config": { "arrival_radius": 5.0 },
//!   "sim": { "seed": 7, "wind_deg": 90.0 }
//! }
//! ```
//!
//! `config` and `sim` are optional and fall back to their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sailnav_core::config::NavConfig;
use sailnav_core::error::ConfigError;
use sailnav_core::mission::Mission;

/// Errors surfaced by the runner binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid mission file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parameters of the kinematic stand-in boat used for dry runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    /// RNG seed. Same seed, same run.
    pub seed: u64,
    /// Boat speed inside the sailable envelope (m/s).
    pub speed: f64,
    /// Mean true wind direction (degrees, 0 = East, CCW).
    pub wind_deg: f64,
    /// Uniform wind jitter half-width (degrees).
    pub wind_jitter_deg: f64,
    /// Uniform GPS noise half-width per axis (meters).
    pub gps_noise_m: f64,
    /// Start position relative to the first waypoint (meters east, north).
    pub start: (f64, f64),
    /// Stop the dry run after this many cycles.
    pub max_cycles: u64,
    /// Sleep for real between cycles instead of advancing virtual time.
    pub realtime: bool,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            speed: 2.0,
            wind_deg: 90.0,
            wind_jitter_deg: 3.0,
            gps_noise_m: 0.3,
            start: (-40.0, -40.0),
            max_cycles: 20_000,
            realtime: false,
        }
    }
}

/// Contents of a mission file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionFile {
    pub mission: Mission,
    /// `[lat, lon]` pairs in degrees. The first one anchors the frame.
    pub waypoints: Vec<(f64, f64)>,
    #[serde(default)]
    pub config: NavConfig,
    #[serde(default)]
    pub sim: SimSettings,
}

impl MissionFile {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let file: MissionFile = serde_json::from_str(json)?;
        file.config.validate()?;
        file.mission.validate(file.waypoints.len())?;
        Ok(file)
    }
}

/// Read and validate a mission file.
pub fn load_mission(path: impl AsRef<Path>) -> Result<MissionFile, AppError> {
    let json = fs::read_to_string(path)?;
    MissionFile::from_json(&json)
}
