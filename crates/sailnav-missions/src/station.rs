//! Station keeping: enter the square, hold inside it, leave by the
//! nearest side.

use log::debug;

use sailnav_core::constants::STATION_KEEP_BEARINGS;
use sailnav_core::error::ConfigError;
use sailnav_core::types::{angular_distance, Planar, Vector2, Waypoint};

use crate::{centroid, push_outward, rectangle};

const MISSION: &str = "station keeping";

/// Entry gate on the north side, then the square's center.
pub fn station_entry(corners: &[Vector2]) -> Result<Vec<Waypoint>, ConfigError> {
    let [nw, ne, se, _] = rectangle(MISSION, corners)?;
    Ok(vec![
        Waypoint::new(nw.midpoint_to(ne)),
        Waypoint::new(nw.midpoint_to(se)),
    ])
}

/// Four holding points on a circle of `radius` around the boat.
///
/// The points sit on the diagonals, ordered by angular proximity to the
/// current heading. Ties keep the diagonal order.
pub fn station_keep(center: Vector2, radius: f64, heading_deg: f64) -> Vec<Waypoint> {
    let mut bearings = STATION_KEEP_BEARINGS;
    bearings.sort_by(|a, b| {
        angular_distance(*a, heading_deg).total_cmp(&angular_distance(*b, heading_deg))
    });

    bearings
        .iter()
        .map(|&bearing| Waypoint::new(center + Vector2::from_heading(bearing) * radius))
        .collect()
}

/// Side midpoints pushed `offset` meters outside the square.
pub fn station_exit_candidates(
    corners: &[Vector2],
    offset: f64,
) -> Result<Vec<Waypoint>, ConfigError> {
    let corners = rectangle(MISSION, corners)?;
    let center = centroid(&corners);

    Ok((0..corners.len())
        .map(|i| {
            let side = corners[i].midpoint_to(corners[(i + 1) % corners.len()]);
            Waypoint::new(push_outward(side, center, offset))
        })
        .collect())
}

/// The exit candidate nearest the boat, as a one-waypoint sequence.
pub fn station_exit(
    corners: &[Vector2],
    boat: Vector2,
    offset: f64,
) -> Result<Vec<Waypoint>, ConfigError> {
    let exit: Vec<Waypoint> = station_exit_candidates(corners, offset)?
        .into_iter()
        .min_by(|a, b| {
            a.position
                .distance(boat)
                .total_cmp(&b.position.distance(boat))
        })
        .into_iter()
        .collect();

    if let Some(wp) = exit.first() {
        debug!("station exit at ({:.1}, {:.1})", wp.position.x, wp.position.y);
    }
    Ok(exit)
}
