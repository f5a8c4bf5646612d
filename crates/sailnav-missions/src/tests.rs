use sailnav_core::error::ConfigError;
use sailnav_core::mission::Mission;
use sailnav_core::types::{Planar, Vector2, Waypoint};

use crate::*;

/// 100 m square around the origin in NW, NE, SE, SW order.
fn square() -> Vec<Vector2> {
    vec![
        Vector2::new(-50.0, 50.0),
        Vector2::new(50.0, 50.0),
        Vector2::new(50.0, -50.0),
        Vector2::new(-50.0, -50.0),
    ]
}

fn positions(waypoints: &[Waypoint]) -> Vec<Vector2> {
    waypoints.iter().map(|w| w.position).collect()
}

fn assert_near(actual: Vector2, expected: Vector2) {
    assert!(
        actual.distance(expected) < 1e-9,
        "expected {expected:?}, got {actual:?}"
    );
}

// --- Endurance ---

#[test]
fn test_endurance_loop_counter_clockwise_from_nearest() {
    let corners = square();
    let lap = endurance_loop(&corners, Vector2::new(60.0, -60.0), 0.0).unwrap();
    assert_eq!(
        positions(&lap),
        vec![
            Vector2::new(50.0, -50.0),
            Vector2::new(50.0, 50.0),
            Vector2::new(-50.0, 50.0),
            Vector2::new(-50.0, -50.0),
        ]
    );
    // Input untouched
    assert_eq!(corners, square());
}

#[test]
fn test_endurance_loop_clears_buoys() {
    let lap = endurance_loop(&square(), Vector2::new(-70.0, 70.0), 5.0).unwrap();
    assert_eq!(lap.len(), 4);

    let half_diagonal = 50.0 * 2.0_f64.sqrt();
    for wp in &lap {
        assert!((wp.position.length() - (half_diagonal + 5.0)).abs() < 1e-9);
    }
    // Starts at the pushed-out NW corner
    assert!((lap[0].position.heading_deg() - 135.0).abs() < 1e-9);
    assert!((lap[1].position.heading_deg() - 225.0).abs() < 1e-9);
}

#[test]
fn test_endurance_requires_four_corners() {
    let err = endurance_loop(&square()[..3], Vector2::ZERO, 5.0).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InsufficientCorners {
            mission: "endurance",
            required: 4,
            found: 3
        }
    );
}

// --- Station keeping ---

#[test]
fn test_station_entry_gate_then_center() {
    let entry = station_entry(&square()).unwrap();
    assert_eq!(
        positions(&entry),
        vec![Vector2::new(0.0, 50.0), Vector2::new(0.0, 0.0)]
    );
    assert!(station_entry(&square()[..2]).is_err());
}

#[test]
fn test_station_keep_points_on_diagonals() {
    let center = Vector2::new(10.0, 10.0);
    let points = station_keep(center, 10.0, 100.0);
    assert_eq!(points.len(), 4);

    // 35, 55, 125 and 145 degrees off the heading
    let expected_bearings = [135.0, 45.0, 225.0, 315.0];
    for (wp, bearing) in points.iter().zip(expected_bearings) {
        let offset = wp.position - center;
        assert!((offset.length() - 10.0).abs() < 1e-9);
        assert!(
            (offset.heading_deg() - bearing).abs() < 1e-9,
            "expected bearing {bearing}, got {}",
            offset.heading_deg()
        );
    }
}

#[test]
fn test_station_keep_sorted_by_heading_proximity() {
    let points = station_keep(Vector2::ZERO, 10.0, 350.0);
    let expected = [315.0, 45.0, 225.0, 135.0];
    for (wp, bearing) in points.iter().zip(expected) {
        assert_near(wp.position, Vector2::from_heading(bearing) * 10.0);
    }

    // Heading due east: 45 and 315 tie, as do 135 and 225
    let points = station_keep(Vector2::ZERO, 10.0, 0.0);
    let expected = [45.0, 315.0, 135.0, 225.0];
    for (wp, bearing) in points.iter().zip(expected) {
        assert_near(wp.position, Vector2::from_heading(bearing) * 10.0);
    }
}

#[test]
fn test_station_exit_candidates_outside_sides() {
    let candidates = station_exit_candidates(&square(), 10.0).unwrap();
    let expected = [
        Vector2::new(0.0, 60.0),
        Vector2::new(60.0, 0.0),
        Vector2::new(0.0, -60.0),
        Vector2::new(-60.0, 0.0),
    ];
    assert_eq!(candidates.len(), 4);
    for (wp, want) in candidates.iter().zip(expected) {
        assert_near(wp.position, want);
    }
}

#[test]
fn test_station_exit_is_nearest_candidate() {
    let exit = station_exit(&square(), Vector2::new(30.0, -20.0), 10.0).unwrap();
    assert_eq!(exit.len(), 1);
    assert_near(exit[0].position, Vector2::new(60.0, 0.0));

    let exit = station_exit(&square(), Vector2::new(-5.0, -40.0), 10.0).unwrap();
    assert_near(exit[0].position, Vector2::new(0.0, -60.0));
}

#[test]
fn test_validate_corners_per_mission() {
    let corners = square();
    assert!(validate_corners(&Mission::station_keeping(), &corners).is_ok());
    assert!(validate_corners(&Mission::endurance(), &corners[..1]).is_err());
    assert!(validate_corners(&Mission::PrecisionNavigation, &corners[..1]).is_ok());
    assert_eq!(
        validate_corners(&Mission::Search, &[]),
        Err(ConfigError::EmptyWaypoints)
    );
}
