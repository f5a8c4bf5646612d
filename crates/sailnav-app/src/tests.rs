//! End-to-end dry runs against the stand-in boat.

use std::sync::mpsc;

use sailnav_core::commands::RadioCommand;
use sailnav_core::config::NavConfig;
use sailnav_core::enums::NavPhase;
use sailnav_core::mission::Mission;
use sailnav_core::projection::GeoFrame;
use sailnav_core::types::Vector2;

use crate::config::{MissionFile, SimSettings};
use crate::dry_run;
use crate::telemetry::LogTelemetry;

const LAT0: f64 = 42.444241;
const LON0: f64 = -76.481933;

fn mission_file(points: &[(f64, f64)], sim: SimSettings) -> MissionFile {
    let frame = GeoFrame::new(LAT0, LON0);
    MissionFile {
        mission: Mission::PrecisionNavigation,
        waypoints: points
            .iter()
            .map(|&(x, y)| frame.to_geo(&Vector2::new(x, y)))
            .collect(),
        config: NavConfig::default(),
        sim,
    }
}

fn calm() -> SimSettings {
    SimSettings {
        wind_jitter_deg: 0.0,
        gps_noise_m: 0.0,
        max_cycles: 2_000,
        ..Default::default()
    }
}

#[test]
fn test_dry_run_completes_route() {
    // Wind from the north; both legs are reaches
    let file = mission_file(&[(0.0, 0.0), (50.0, 0.0)], calm());
    let (_tx, mut rx) = mpsc::channel::<RadioCommand>();
    let mut telemetry = LogTelemetry::new(100);

    let summary = dry_run(&file, &mut rx, &mut telemetry).unwrap();
    assert_eq!(summary.phase, NavPhase::Done);
    assert_eq!(summary.arrivals, 2);
    assert!(summary.final_position.distance(Vector2::new(50.0, 0.0)) < 5.0);
    assert!(summary.mission_time_secs > 0.0);
}

#[test]
fn test_dry_run_is_deterministic_per_seed() {
    let noisy = SimSettings {
        max_cycles: 200,
        ..Default::default()
    };
    let file = mission_file(&[(0.0, 0.0), (50.0, 0.0)], noisy);

    let run = || {
        let (_tx, mut rx) = mpsc::channel::<RadioCommand>();
        let mut telemetry = LogTelemetry::new(100);
        dry_run(&file, &mut rx, &mut telemetry).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_dry_run_quit_from_channel() {
    let file = mission_file(&[(0.0, 0.0), (50.0, 0.0)], calm());
    let (tx, mut rx) = mpsc::channel();
    tx.send(RadioCommand::Quit).unwrap();
    let mut telemetry = LogTelemetry::default();

    let summary = dry_run(&file, &mut rx, &mut telemetry).unwrap();
    assert_eq!(summary.phase, NavPhase::Stopped);
    assert_eq!(summary.cycles, 1);
    assert_eq!(summary.arrivals, 0);
}

#[test]
fn test_dry_run_rejects_bad_mission() {
    let mut file = mission_file(&[(0.0, 0.0)], calm());
    file.mission = Mission::endurance();
    let (_tx, mut rx) = mpsc::channel::<RadioCommand>();
    let mut telemetry = LogTelemetry::default();
    assert!(dry_run(&file, &mut rx, &mut telemetry).is_err());
}
