//! Telemetry snapshot: the read-only view of one control cycle.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::NavEvent;
use crate::types::{BoatState, Waypoint};

/// Heading chosen by the optimizer for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadingDecision {
    /// Absolute heading command (degrees, global frame, [0, 360)).
    pub heading: f64,
    pub tack: Tack,
    /// Velocity made good toward the target at this heading.
    pub vmg: f64,
    /// The tack farther from the current heading won on VMG.
    pub switched: bool,
}

/// Complete navigator state published after each cycle.
///
/// An owned copy: telemetry never holds a reference into the navigator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub cycle: u64,
    /// Seconds since sailing began (0 while awaiting a fix).
    pub mission_time_secs: f64,
    pub phase: NavPhase,
    pub control: ControlMode,
    pub stage: MissionStage,
    pub boat: BoatState,
    /// Remaining waypoints, current waypoint first.
    pub waypoints: Vec<Waypoint>,
    pub decision: Option<HeadingDecision>,
    pub events: Vec<NavEvent>,
}

impl TelemetrySnapshot {
    /// Current target, if any.
    pub fn current_waypoint(&self) -> Option<&Waypoint> {
        self.waypoints.first()
    }
}
