//! Headless runner for SAILNAV missions.
//!
//! Loads a mission file, wires the navigator to a kinematic stand-in boat,
//! a log-based telemetry sink and a command channel, and runs the control
//! loop to completion.

pub mod commands;
pub mod config;
pub mod sim_boat;
pub mod telemetry;

use log::info;

use sailnav_core::enums::NavPhase;
use sailnav_core::types::Vector2;
use sailnav_helm::PolarModel;
use sailnav_nav::control_loop::SystemClock;
use sailnav_nav::{run_mission, CommandSource, Navigator};

use crate::config::{AppError, MissionFile};
use crate::sim_boat::{SimBoat, SimClock};
use crate::telemetry::LogTelemetry;

/// How a dry run ended.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub phase: NavPhase,
    pub cycles: u64,
    pub arrivals: usize,
    pub mission_time_secs: f64,
    /// True position of the stand-in boat at the end.
    pub final_position: Vector2,
}

/// Sail `file` against the stand-in boat.
pub fn dry_run<C: CommandSource>(
    file: &MissionFile,
    commands: &mut C,
    telemetry: &mut LogTelemetry,
) -> Result<RunSummary, AppError> {
    let mut navigator = Navigator::new(&file.waypoints, file.mission, file.config.clone())?;
    let mut boat = SimBoat::new(
        *navigator.frame(),
        PolarModel::from_config(&file.config),
        &file.sim,
    );
    let max_cycles = Some(file.sim.max_cycles);

    let (lat0, lon0) = navigator.frame().origin();
    info!(
        "dry run: {} from ({:.6}, {:.6}) with seed {}, wind {:.0} deg",
        file.mission.name(),
        lat0,
        lon0,
        file.sim.seed,
        file.sim.wind_deg
    );

    let phase = if file.sim.realtime {
        let mut clock = SystemClock::default();
        run_mission(&mut navigator, &mut boat, telemetry, commands, &mut clock, max_cycles)
    } else {
        let mut clock = SimClock::default();
        run_mission(&mut navigator, &mut boat, telemetry, commands, &mut clock, max_cycles)
    };

    Ok(RunSummary {
        phase,
        cycles: telemetry.published(),
        arrivals: telemetry.arrivals(),
        mission_time_secs: navigator.mission_time(),
        final_position: boat.position(),
    })
}

#[cfg(test)]
mod tests;
