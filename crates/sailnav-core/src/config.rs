//! Navigator tuning parameters.
//!
//! Every field has a default from [`constants`](crate::constants), so a
//! partial JSON object is a valid configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::mission::{non_negative, positive};

/// Tunables shared by the optimizer, the navigator and sensor fusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Waypoint arrival radius (meters).
    pub arrival_radius: f64,
    /// Hysteresis numerator: h = 1 + beating_constant / distance.
    pub beating_constant: f64,
    /// Candidate heading scan step (degrees).
    pub scan_step_deg: f64,
    /// No-go half-width around dead upwind (degrees).
    pub upwind_dead_zone_deg: f64,
    /// No-go half-width around dead downwind (degrees).
    pub downwind_dead_zone_deg: f64,
    /// Cycle dwell for waypoint-following missions (seconds).
    pub fast_dwell_secs: f64,
    /// Cycle dwell for detection-driven missions (seconds).
    pub detection_dwell_secs: f64,
    /// Samples held by the wind decay filter.
    pub wind_window: usize,
    /// Obstacle extrapolation horizon (seconds).
    pub avoidance_lookahead_secs: f64,
    /// Passing distance from a predicted obstacle (meters).
    pub avoidance_clearance: f64,
    /// Maximum gap between two sightings of the same obstacle (seconds).
    pub max_track_gap_secs: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            arrival_radius: DEFAULT_ARRIVAL_RADIUS,
            beating_constant: BEATING_CONSTANT,
            scan_step_deg: SCAN_STEP_DEG,
            upwind_dead_zone_deg: UPWIND_DEAD_ZONE_DEG,
            downwind_dead_zone_deg: DOWNWIND_DEAD_ZONE_DEG,
            fast_dwell_secs: FAST_DWELL_SECS,
            detection_dwell_secs: DETECTION_DWELL_SECS,
            wind_window: WIND_FILTER_WINDOW,
            avoidance_lookahead_secs: AVOIDANCE_LOOKAHEAD_SECS,
            avoidance_clearance: AVOIDANCE_CLEARANCE,
            max_track_gap_secs: MAX_TRACK_GAP_SECS,
        }
    }
}

impl NavConfig {
    /// Reject values that would make the control loop meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("arrival_radius", self.arrival_radius)?;
        non_negative("beating_constant", self.beating_constant)?;
        positive("scan_step_deg", self.scan_step_deg)?;
        if !(0.0..90.0).contains(&self.upwind_dead_zone_deg) {
            return Err(ConfigError::InvalidParameter {
                name: "upwind_dead_zone_deg",
                value: self.upwind_dead_zone_deg,
            });
        }
        if !(0.0..90.0).contains(&self.downwind_dead_zone_deg) {
            return Err(ConfigError::InvalidParameter {
                name: "downwind_dead_zone_deg",
                value: self.downwind_dead_zone_deg,
            });
        }
        dwell_duration("fast_dwell_secs", self.fast_dwell_secs)?;
        dwell_duration("detection_dwell_secs", self.detection_dwell_secs)?;
        if self.wind_window == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "wind_window",
                value: 0.0,
            });
        }
        non_negative("avoidance_lookahead_secs", self.avoidance_lookahead_secs)?;
        positive("avoidance_clearance", self.avoidance_clearance)?;
        positive("max_track_gap_secs", self.max_track_gap_secs)?;
        Ok(())
    }

    /// Dwell for the mission's cadence class. An unrepresentable value
    /// (only possible on an unvalidated config) falls back to the default.
    pub fn dwell(&self, detection: bool) -> Duration {
        let (secs, default) = if detection {
            (self.detection_dwell_secs, DETECTION_DWELL_SECS)
        } else {
            (self.fast_dwell_secs, FAST_DWELL_SECS)
        };
        Duration::try_from_secs_f64(secs).unwrap_or_else(|_| Duration::from_secs_f64(default))
    }
}

/// Positive and representable as a `Duration`.
fn dwell_duration(name: &'static str, value: f64) -> Result<Duration, ConfigError> {
    positive(name, value)?;
    Duration::try_from_secs_f64(value).map_err(|_| ConfigError::InvalidParameter { name, value })
}
