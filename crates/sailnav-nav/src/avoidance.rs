//! Detection observations and two-sighting obstacle avoidance.
//!
//! An obstacle's motion is estimated from its last two sightings and
//! extrapolated linearly a fixed horizon ahead. If the predicted position
//! comes within the clearance of the boat's straight path to its target, a
//! waypoint is proposed that passes the prediction at exactly the clearance.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use sailnav_core::types::Vector2;

/// What the detection collaborator saw this cycle, in frame coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Seconds on the same clock as the GPS fixes.
    pub timestamp: f64,
    pub buoy: Option<Vector2>,
    pub obstacle: Option<Vector2>,
}

impl Observation {
    pub fn obstacle(timestamp: f64, position: Vector2) -> Self {
        Self {
            timestamp,
            obstacle: Some(position),
            ..Default::default()
        }
    }

    pub fn buoy(timestamp: f64, position: Vector2) -> Self {
        Self {
            timestamp,
            buoy: Some(position),
            ..Default::default()
        }
    }
}

/// One timestamped obstacle position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    pub position: Vector2,
    pub timestamp: f64,
}

/// Result of feeding a sighting to the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackUpdate {
    /// Not newer than the previous sighting; ignored.
    Dropped,
    /// First sighting of a (possibly restarted) track.
    Started,
    /// Two usable sightings, oldest first.
    Paired(Sighting, Sighting),
}

/// Remembers the previous obstacle sighting.
#[derive(Debug, Clone)]
pub struct ObstacleTracker {
    previous: Option<Sighting>,
    max_gap_secs: f64,
}

impl ObstacleTracker {
    pub fn new(max_gap_secs: f64) -> Self {
        Self {
            previous: None,
            max_gap_secs,
        }
    }

    pub fn observe(&mut self, sighting: Sighting) -> TrackUpdate {
        let Some(previous) = self.previous else {
            self.previous = Some(sighting);
            return TrackUpdate::Started;
        };

        let dt = sighting.timestamp - previous.timestamp;
        if dt <= 0.0 {
            warn!(
                "dropping out-of-order obstacle sighting at t={} (last t={})",
                sighting.timestamp, previous.timestamp
            );
            return TrackUpdate::Dropped;
        }

        self.previous = Some(sighting);
        if dt > self.max_gap_secs {
            debug!("obstacle track restarted after {:.1} s gap", dt);
            TrackUpdate::Started
        } else {
            TrackUpdate::Paired(previous, sighting)
        }
    }
}

/// Closest point to `point` on the segment `a`..`b`.
fn closest_on_segment(a: Vector2, b: Vector2, point: Vector2) -> Vector2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Avoidance waypoint for an obstacle seen at `first` then `second`, or
/// `None` when the predicted position stays clear of the boat's path.
///
/// `second` must be strictly newer than `first`.
pub fn assess_collision(
    first: Sighting,
    second: Sighting,
    boat: Vector2,
    target: Vector2,
    lookahead_secs: f64,
    clearance: f64,
) -> Option<Vector2> {
    let dt = second.timestamp - first.timestamp;
    if dt <= 0.0 {
        return None;
    }
    let velocity = (second.position - first.position) / dt;
    let predicted = second.position + velocity * lookahead_secs;

    let closest = closest_on_segment(boat, target, predicted);
    let offset = closest - predicted;
    let gap = offset.length();
    if gap >= clearance {
        return None;
    }

    let away = if gap > 1e-9 {
        offset / gap
    } else {
        // Dead on the path: pass it to starboard
        let path = (target - boat).normalize_or_zero();
        Vector2::new(path.y, -path.x)
    };
    if away == Vector2::ZERO {
        return None;
    }

    let waypoint = predicted + away * clearance;
    debug!(
        "obstacle predicted at ({:.1}, {:.1}), {:.1} m off path; avoid via ({:.1}, {:.1})",
        predicted.x, predicted.y, gap, waypoint.x, waypoint.y
    );
    Some(waypoint)
}
