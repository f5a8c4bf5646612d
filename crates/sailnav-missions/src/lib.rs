//! Procedural waypoint generators for the rectangle-based missions.
//!
//! Every generator is a pure function: it reads the corner slice, never
//! mutates it, and returns a fresh waypoint sequence for the navigator to
//! queue. Corners are expected in NW, NE, SE, SW order.

pub mod endurance;
pub mod station;

pub use endurance::endurance_loop;
pub use station::{station_entry, station_exit, station_exit_candidates, station_keep};

use sailnav_core::constants::RECTANGLE_CORNERS;
use sailnav_core::error::ConfigError;
use sailnav_core::mission::Mission;
use sailnav_core::types::Vector2;

/// Check that `corners` holds enough points for `mission`.
pub fn validate_corners(mission: &Mission, corners: &[Vector2]) -> Result<(), ConfigError> {
    mission.validate(corners.len())
}

/// First four corners, or the error naming the mission that needed them.
pub(crate) fn rectangle(
    mission: &'static str,
    corners: &[Vector2],
) -> Result<[Vector2; RECTANGLE_CORNERS], ConfigError> {
    match corners {
        [a, b, c, d, ..] => Ok([*a, *b, *c, *d]),
        _ => Err(ConfigError::InsufficientCorners {
            mission,
            required: RECTANGLE_CORNERS,
            found: corners.len(),
        }),
    }
}

/// Mean of the corner positions.
pub(crate) fn centroid(corners: &[Vector2]) -> Vector2 {
    if corners.is_empty() {
        return Vector2::ZERO;
    }
    corners.iter().fold(Vector2::ZERO, |acc, c| acc + *c) / corners.len() as f64
}

/// Move `point` away from `center` by `offset` meters.
pub(crate) fn push_outward(point: Vector2, center: Vector2, offset: f64) -> Vector2 {
    point + (point - center).normalize_or_zero() * offset
}

#[cfg(test)]
mod tests;
