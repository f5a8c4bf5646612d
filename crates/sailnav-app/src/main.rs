use std::process::ExitCode;
use std::sync::mpsc;

use log::{error, info};

use sailnav_app::commands::spawn_stdin_reader;
use sailnav_app::config::{load_mission, AppError};
use sailnav_app::dry_run;
use sailnav_app::telemetry::LogTelemetry;
use sailnav_core::commands::RadioCommand;

const DEFAULT_MISSION: &str = "demos/precision_navigation.json";

/// Quiet cycles between telemetry lines.
const TELEMETRY_EVERY: u64 = 20;

fn run() -> Result<(), AppError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_MISSION.to_string());
    let file = load_mission(&path)?;
    info!("loaded {} ({} waypoints)", path, file.waypoints.len());

    let (tx, mut rx) = mpsc::channel::<RadioCommand>();
    spawn_stdin_reader(tx)?;

    let mut telemetry = LogTelemetry::new(TELEMETRY_EVERY);
    let summary = dry_run(&file, &mut rx, &mut telemetry)?;
    info!(
        "finished {:?}: {} cycles, {} arrivals, {:.1} s sailing, boat at ({:.1}, {:.1})",
        summary.phase,
        summary.cycles,
        summary.arrivals,
        summary.mission_time_secs,
        summary.final_position.x,
        summary.final_position.y
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
