//! Tests for fix-to-velocity derivation and reading ordering.

use sailnav_core::projection::{GeoFrame, METERS_PER_DEGREE};
use sailnav_core::types::Planar;

use crate::fusion::SensorFusion;
use crate::reading::{GpsFix, SensorReading, WindReading};

const LAT0: f64 = 42.444241;
const LON0: f64 = -76.481933;

fn fusion() -> SensorFusion {
    SensorFusion::new(GeoFrame::new(LAT0, LON0), 10)
}

/// Latitude offset for `meters` north of the origin.
fn north(meters: f64) -> f64 {
    LAT0 + meters / METERS_PER_DEGREE
}

#[test]
fn test_velocity_undefined_after_one_fix() {
    let mut fusion = fusion();
    let outcome = fusion.ingest(&SensorReading::empty().with_fix(GpsFix::new(LAT0, LON0, 0.0)));

    assert!(outcome.first_fix);
    assert!(!outcome.velocity_established);
    assert!(fusion.state().position.is_some());
    assert!(fusion.state().velocity.is_none());
    assert!(!fusion.state().has_velocity());
}

#[test]
fn test_velocity_from_two_fixes() {
    let mut fusion = fusion();
    fusion.ingest(&SensorReading::empty().with_fix(GpsFix::new(LAT0, LON0, 10.0)));
    let outcome =
        fusion.ingest(&SensorReading::empty().with_fix(GpsFix::new(north(6.0), LON0, 12.0)));

    assert!(outcome.velocity_established);
    let velocity = fusion.state().velocity.unwrap();
    assert!(velocity.x.abs() < 1e-9, "no east drift: {}", velocity.x);
    assert!((velocity.y - 3.0).abs() < 1e-6, "3 m/s north: {}", velocity.y);
    assert!((fusion.state().heading().unwrap() - 90.0).abs() < 1e-6);

    // Third fix updates velocity but does not re-announce it
    let outcome =
        fusion.ingest(&SensorReading::empty().with_fix(GpsFix::new(north(8.0), LON0, 13.0)));
    assert!(!outcome.velocity_established);
    assert!((fusion.state().velocity.unwrap().y - 2.0).abs() < 1e-6);
}

#[test]
fn test_out_of_order_fix_is_dropped() {
    let mut fusion = fusion();
    fusion.ingest(&SensorReading::empty().with_fix(GpsFix::new(LAT0, LON0, 5.0)));
    let before = *fusion.state();

    let outcome =
        fusion.ingest(&SensorReading::empty().with_fix(GpsFix::new(north(50.0), LON0, 5.0)));
    assert!(outcome.fix_dropped);
    assert_eq!(*fusion.state(), before);

    let outcome =
        fusion.ingest(&SensorReading::empty().with_fix(GpsFix::new(north(50.0), LON0, 4.0)));
    assert!(outcome.fix_dropped);
    assert!(fusion.state().velocity.is_none());
}

#[test]
fn test_missing_readings_keep_last_state() {
    let mut fusion = fusion();
    fusion.ingest(
        &SensorReading::empty()
            .with_fix(GpsFix::new(LAT0, LON0, 0.0))
            .with_imu_yaw(0.0)
            .with_wind(90.0),
    );
    let before = *fusion.state();

    let outcome = fusion.ingest(&SensorReading::empty());
    assert_eq!(outcome, Default::default());
    assert_eq!(*fusion.state(), before);
}

#[test]
fn test_imu_heading_converted() {
    let mut fusion = fusion();
    fusion.ingest(&SensorReading::empty().with_imu_yaw(90.0));
    assert_eq!(fusion.state().imu_heading, Some(0.0));
    // No velocity yet, so heading comes from the IMU
    assert_eq!(fusion.state().heading(), Some(0.0));
}

#[test]
fn test_wind_is_filtered() {
    let mut fusion = fusion();
    fusion.ingest(&SensorReading::empty().with_wind(90.0));
    assert_eq!(fusion.state().wind_direction, 45.0);
    fusion.ingest(&SensorReading::empty().with_wind(90.0));
    assert_eq!(fusion.state().wind_direction, 67.5);
}

#[test]
fn test_raw_anemometer_uses_fresh_imu_heading() {
    let mut fusion = fusion();
    let reading = SensorReading {
        imu_yaw_deg: Some(0.0), // heading 90 in the planar convention
        wind: Some(WindReading::Anemometer {
            raw: 0.0,
            sail_angle_deg: 0.0,
        }),
        ..Default::default()
    };
    fusion.ingest(&reading);
    // (540 + 0 + 90 + 270) mod 360 = 180, entering the filter at half weight
    assert!((fusion.state().wind_direction - 90.0).abs() < 1e-9);
}

#[test]
fn test_position_is_projected_into_frame() {
    let mut fusion = fusion();
    fusion.ingest(&SensorReading::empty().with_fix(GpsFix::new(north(20.0), LON0, 0.0)));
    let position = fusion.state().position.unwrap();
    assert!((position.y - 20.0).abs() < 1e-6);
    assert!((position.heading_deg() - 90.0).abs() < 1e-6);
}
