//! Fundamental planar types: vectors, boat state and waypoints.
//!
//! All positions are meters in a [`GeoFrame`](crate::projection::GeoFrame).
//! x = East, y = North. Angles are degrees, 0 = East, counter-clockwise.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::WaypointKind;

/// Planar vector in meters (or a free direction / velocity vector).
pub type Vector2 = DVec2;

/// Wrap an angle in degrees into [0, 360).
pub fn wrap_360(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Shortest angular separation between two headings, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = wrap_360(a - b);
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Heading-oriented helpers on top of glam's vector algebra.
///
/// Magnitude, dot product, difference, scaling, normalization and distance
/// come straight from `DVec2` (`length`, `dot`, `-`, `*`, `normalize_or_zero`,
/// `distance`).
pub trait Planar {
    /// Unit vector pointing at `deg` (0 = East, counter-clockwise).
    fn from_heading(deg: f64) -> Self;

    /// Angle of this vector in degrees, wrapped into [0, 360).
    ///
    /// Undefined for the zero vector; callers must check first.
    fn heading_deg(&self) -> f64;

    /// Point halfway between `self` and `other`.
    fn midpoint_to(&self, other: Self) -> Self;
}

impl Planar for DVec2 {
    fn from_heading(deg: f64) -> Self {
        let rad = deg.to_radians();
        DVec2::new(rad.cos(), rad.sin())
    }

    fn heading_deg(&self) -> f64 {
        wrap_360(self.y.atan2(self.x).to_degrees())
    }

    fn midpoint_to(&self, other: Self) -> Self {
        (*self + other) * 0.5
    }
}

/// Fused boat state, refreshed once per control cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoatState {
    /// Position in the local frame. `None` until the first GPS fix.
    pub position: Option<Vector2>,
    /// Velocity (m/s). `None` until two fixes have been received.
    pub velocity: Option<Vector2>,
    /// IMU heading in the planar convention (degrees, 0 = East, CCW).
    pub imu_heading: Option<f64>,
    /// Smoothed true wind direction in the global frame (degrees).
    pub wind_direction: f64,
    /// Timestamp (seconds) of the last accepted fix.
    pub last_fix_time: Option<f64>,
}

impl BoatState {
    /// Current heading: velocity angle when moving, otherwise the IMU heading.
    pub fn heading(&self) -> Option<f64> {
        match self.velocity {
            Some(v) if v.length_squared() > 0.0 => Some(v.heading_deg()),
            _ => self.imu_heading,
        }
    }

    /// True once position and velocity are both known.
    pub fn has_velocity(&self) -> bool {
        self.position.is_some() && self.velocity.is_some()
    }

    /// Planar distance to a point, if the position is known.
    pub fn distance_to(&self, point: Vector2) -> Option<f64> {
        self.position.map(|p| p.distance(point))
    }
}

/// A navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub position: Vector2,
    pub kind: WaypointKind,
}

impl Waypoint {
    /// A regular mission waypoint.
    pub fn new(position: Vector2) -> Self {
        Self {
            position,
            kind: WaypointKind::Mission,
        }
    }

    /// A waypoint inserted to steer around an obstacle.
    pub fn avoidance(position: Vector2) -> Self {
        Self {
            position,
            kind: WaypointKind::Avoidance,
        }
    }

    /// A waypoint placed on a detected buoy.
    pub fn buoy(position: Vector2) -> Self {
        Self {
            position,
            kind: WaypointKind::Buoy,
        }
    }

    /// Strictly inside the arrival radius.
    pub fn is_reached(&self, boat: Vector2, arrival_radius: f64) -> bool {
        boat.distance(self.position) < arrival_radius
    }
}
