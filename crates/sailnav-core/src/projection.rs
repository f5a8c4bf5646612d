//! Local metric frame for a mission.
//!
//! The first mission waypoint becomes the origin and every GPS fix is
//! flattened onto an east/north plane around it with a plate carrée
//! (equirectangular) mapping. A course spans a few hundred meters, where
//! the flattening error stays well inside GPS noise.

use serde::{Deserialize, Serialize};

use crate::types::Vector2;

/// Length of one degree of latitude, and of longitude at the equator.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// East/north frame in meters around `origin`, which projects to (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoFrame {
    lat0: f64,
    lon0: f64,
    /// Meters per degree of longitude along the origin's parallel.
    east_per_degree: f64,
}

impl GeoFrame {
    pub fn new(lat0: f64, lon0: f64) -> Self {
        Self {
            lat0,
            lon0,
            east_per_degree: METERS_PER_DEGREE * lat0.to_radians().cos(),
        }
    }

    /// `(lat, lon)` in degrees to meters east and north of the origin.
    pub fn project(&self, lat: f64, lon: f64) -> Vector2 {
        Vector2::new(
            (lon - self.lon0) * self.east_per_degree,
            (lat - self.lat0) * METERS_PER_DEGREE,
        )
    }

    /// Inverse of [`project`](Self::project).
    pub fn to_geo(&self, pos: &Vector2) -> (f64, f64) {
        (
            self.lat0 + pos.y / METERS_PER_DEGREE,
            self.lon0 + pos.x / self.east_per_degree,
        )
    }

    /// Origin `(lat, lon)` in degrees.
    pub fn origin(&self) -> (f64, f64) {
        (self.lat0, self.lon0)
    }
}
