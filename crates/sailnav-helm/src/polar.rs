//! Simplified single-vessel polar diagram.
//!
//! Unit speed everywhere in the sailable envelope, zero inside the upwind
//! and downwind no-go zones. Zone boundaries are themselves unsailable.

use serde::{Deserialize, Serialize};

use sailnav_core::config::NavConfig;
use sailnav_core::constants::{DOWNWIND_DEAD_ZONE_DEG, UPWIND_DEAD_ZONE_DEG};
use sailnav_core::types::{wrap_360, Planar, Vector2};

/// Sailing envelope of the vessel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarModel {
    /// Half-width of the no-go zone around 0° relative (degrees).
    pub upwind_dead_zone_deg: f64,
    /// Half-width of the no-go zone around 180° relative (degrees).
    pub downwind_dead_zone_deg: f64,
}

impl Default for PolarModel {
    fn default() -> Self {
        Self {
            upwind_dead_zone_deg: UPWIND_DEAD_ZONE_DEG,
            downwind_dead_zone_deg: DOWNWIND_DEAD_ZONE_DEG,
        }
    }
}

impl PolarModel {
    pub fn from_config(config: &NavConfig) -> Self {
        Self {
            upwind_dead_zone_deg: config.upwind_dead_zone_deg,
            downwind_dead_zone_deg: config.downwind_dead_zone_deg,
        }
    }

    /// True when a heading `relative_deg` off the wind produces thrust.
    pub fn is_sailable(&self, relative_deg: f64) -> bool {
        let rel = wrap_360(relative_deg);
        let up = self.upwind_dead_zone_deg;
        let down = self.downwind_dead_zone_deg;
        (rel > up && rel < 180.0 - down) || (rel > 180.0 + down && rel < 360.0 - up)
    }

    /// Velocity (global frame) when sailing `relative_deg` off a wind
    /// coming from `wind_deg`. Zero vector inside the dead zones.
    pub fn velocity_at(&self, relative_deg: f64, wind_deg: f64) -> Vector2 {
        let rel = wrap_360(relative_deg);
        if self.is_sailable(rel) {
            Vector2::from_heading(rel + wind_deg)
        } else {
            Vector2::ZERO
        }
    }
}
