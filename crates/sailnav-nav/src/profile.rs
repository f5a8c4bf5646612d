//! Mission dispatch.
//!
//! A [`Mission`] is resolved exactly once, at navigator construction, into a
//! `NavProfile`: where waypoints come from and how they are refilled, which
//! detection hook runs each cycle, the loop cadence, and who steers first.

use std::time::Duration;

use log::info;

use sailnav_core::config::NavConfig;
use sailnav_core::enums::MissionStage;
use sailnav_core::error::ConfigError;
use sailnav_core::mission::Mission;
use sailnav_core::types::{Vector2, Waypoint};
use sailnav_missions::{endurance_loop, station_entry, station_exit, station_keep};

/// Per-cycle reaction to detection observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionHook {
    None,
    /// Steer around extrapolated obstacles.
    Avoidance,
    /// Avoid obstacles and divert to a detected buoy.
    AvoidanceAndSearch,
}

impl DetectionHook {
    pub fn is_active(self) -> bool {
        self != DetectionHook::None
    }

    pub fn searches(self) -> bool {
        self == DetectionHook::AvoidanceAndSearch
    }
}

/// Waypoint source for a mission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MissionPlan {
    /// Sail the given waypoints once, in order.
    Route,
    /// Repeat a counter-clockwise lap until the deadline.
    Endurance {
        exit_after_secs: f64,
        buoy_offset: f64,
    },
    /// Entry gate and center, holding circle, nearest exit.
    StationKeeping {
        keep_secs: f64,
        circle_radius: f64,
        exit_offset: f64,
    },
}

/// What the navigator needs to know to extend the plan.
#[derive(Debug, Clone, Copy)]
pub struct PlanContext<'a> {
    /// Mission waypoints in the local frame.
    pub corners: &'a [Vector2],
    pub boat: Vector2,
    pub heading: f64,
    /// Seconds since sailing began.
    pub mission_time: f64,
    /// Seconds since the current stage began.
    pub stage_time: f64,
}

/// Outcome of asking the plan for more waypoints.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanStep {
    Continue {
        stage: MissionStage,
        waypoints: Vec<Waypoint>,
    },
    Complete,
}

impl MissionPlan {
    /// Stage and waypoints the mission starts with.
    pub fn initial(
        &self,
        corners: &[Vector2],
        boat: Vector2,
    ) -> Result<(MissionStage, Vec<Waypoint>), ConfigError> {
        match *self {
            MissionPlan::Route => {
                if corners.is_empty() {
                    return Err(ConfigError::EmptyWaypoints);
                }
                Ok((
                    MissionStage::Route,
                    corners.iter().copied().map(Waypoint::new).collect(),
                ))
            }
            MissionPlan::Endurance { buoy_offset, .. } => Ok((
                MissionStage::EnduranceLap,
                endurance_loop(corners, boat, buoy_offset)?,
            )),
            MissionPlan::StationKeeping { .. } => {
                Ok((MissionStage::StationEntry, station_entry(corners)?))
            }
        }
    }

    /// Called when the queue runs dry in `stage`. `lap` is the sequence the
    /// stage was started with.
    pub fn on_exhausted(
        &self,
        stage: MissionStage,
        lap: &[Waypoint],
        ctx: &PlanContext<'_>,
    ) -> Result<PlanStep, ConfigError> {
        match *self {
            MissionPlan::Route => Ok(PlanStep::Complete),
            MissionPlan::Endurance {
                exit_after_secs, ..
            } => {
                if ctx.mission_time < exit_after_secs && !lap.is_empty() {
                    Ok(PlanStep::Continue {
                        stage: MissionStage::EnduranceLap,
                        waypoints: lap.to_vec(),
                    })
                } else {
                    info!(
                        "endurance deadline reached after {:.0} s",
                        ctx.mission_time
                    );
                    Ok(PlanStep::Complete)
                }
            }
            MissionPlan::StationKeeping { circle_radius, .. } => match stage {
                MissionStage::StationEntry => Ok(PlanStep::Continue {
                    stage: MissionStage::StationKeep,
                    waypoints: station_keep(ctx.boat, circle_radius, ctx.heading),
                }),
                MissionStage::StationKeep if !lap.is_empty() => Ok(PlanStep::Continue {
                    stage: MissionStage::StationKeep,
                    waypoints: lap.to_vec(),
                }),
                _ => Ok(PlanStep::Complete),
            },
        }
    }

    /// Time-driven transitions, checked every sailing cycle.
    pub fn on_timer(
        &self,
        stage: MissionStage,
        ctx: &PlanContext<'_>,
    ) -> Result<Option<PlanStep>, ConfigError> {
        match *self {
            MissionPlan::StationKeeping {
                keep_secs,
                exit_offset,
                ..
            } if stage == MissionStage::StationKeep && ctx.stage_time >= keep_secs => {
                Ok(Some(PlanStep::Continue {
                    stage: MissionStage::StationExit,
                    waypoints: station_exit(ctx.corners, ctx.boat, exit_offset)?,
                }))
            }
            _ => Ok(None),
        }
    }

    /// Whether the initial sequence depends on where the boat starts.
    pub fn depends_on_start(&self) -> bool {
        matches!(self, MissionPlan::Endurance { .. })
    }
}

/// Navigator configuration resolved from a mission.
#[derive(Debug, Clone, PartialEq)]
pub struct NavProfile {
    pub plan: MissionPlan,
    pub detection: DetectionHook,
    /// Pause between control cycles.
    pub dwell: Duration,
    /// Begin under manual control (fleet racing).
    pub start_manual: bool,
}

impl NavProfile {
    pub fn from_mission(mission: &Mission, config: &NavConfig) -> Self {
        let (plan, detection, start_manual) = match *mission {
            Mission::FleetRace => (MissionPlan::Route, DetectionHook::None, true),
            Mission::PrecisionNavigation => (MissionPlan::Route, DetectionHook::None, false),
            Mission::Endurance {
                exit_after_secs,
                buoy_offset,
            } => (
                MissionPlan::Endurance {
                    exit_after_secs,
                    buoy_offset,
                },
                DetectionHook::None,
                false,
            ),
            Mission::StationKeeping {
                keep_secs,
                circle_radius,
                exit_offset,
            } => (
                MissionPlan::StationKeeping {
                    keep_secs,
                    circle_radius,
                    exit_offset,
                },
                DetectionHook::None,
                false,
            ),
            Mission::CollisionAvoidance => (MissionPlan::Route, DetectionHook::Avoidance, false),
            Mission::Search => (
                MissionPlan::Route,
                DetectionHook::AvoidanceAndSearch,
                false,
            ),
        };

        Self {
            plan,
            detection,
            dwell: config.dwell(detection.is_active()),
            start_manual,
        }
    }
}
