//! Endurance: lap a rectangle of buoys, staying clear of each one.

use log::debug;

use sailnav_core::error::ConfigError;
use sailnav_core::types::{Planar, Vector2, Waypoint};

use crate::{centroid, push_outward, rectangle};

/// One counter-clockwise lap around the corner buoys.
///
/// Each corner is moved `buoy_offset` meters outward from the centroid so
/// the boat rounds the buoy instead of hitting it. The lap starts at the
/// corner nearest `boat`.
pub fn endurance_loop(
    corners: &[Vector2],
    boat: Vector2,
    buoy_offset: f64,
) -> Result<Vec<Waypoint>, ConfigError> {
    let corners = rectangle("endurance", corners)?;
    let center = centroid(&corners);

    let mut lap: Vec<Vector2> = corners
        .iter()
        .map(|&c| push_outward(c, center, buoy_offset))
        .collect();
    lap.sort_by(|a, b| {
        (*a - center)
            .heading_deg()
            .total_cmp(&(*b - center).heading_deg())
    });

    let nearest = lap
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.distance(boat).total_cmp(&b.distance(boat)))
        .map(|(i, _)| i)
        .unwrap_or(0);
    lap.rotate_left(nearest);

    debug!(
        "endurance lap from ({:.1}, {:.1}), offset {:.1} m",
        lap[0].x, lap[0].y, buoy_offset
    );
    Ok(lap.into_iter().map(Waypoint::new).collect())
}
