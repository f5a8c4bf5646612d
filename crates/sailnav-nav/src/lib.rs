//! Waypoint navigator for SAILNAV.
//!
//! `Navigator` owns the boat state and the waypoint queue, consumes one
//! cycle of sensor readings at a time and produces a heading command plus a
//! telemetry snapshot. Completely headless: sensors, helm, radio and
//! telemetry are reached only through the traits in [`control_loop`].

pub mod avoidance;
pub mod control_loop;
pub mod navigator;
pub mod profile;

pub use avoidance::{assess_collision, Observation, ObstacleTracker, Sighting, TrackUpdate};
pub use control_loop::{
    run_mission, Clock, CommandSource, Helm, SensorSource, SystemClock, TelemetrySink,
};
pub use navigator::{CycleInput, CycleReport, Navigator};
pub use profile::{DetectionHook, MissionPlan, NavProfile, PlanContext, PlanStep};
