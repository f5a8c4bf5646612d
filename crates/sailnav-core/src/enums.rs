//! Enumeration types used throughout the navigation stack.

use serde::{Deserialize, Serialize};

/// Which side of the wind the boat is sailing on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tack {
    /// Headings clockwise of the wind (wind minus offset).
    Port,
    /// Headings counter-clockwise of the wind (wind plus offset).
    Starboard,
}

impl Tack {
    /// Sign applied to the offset from the wind direction.
    pub fn sign(self) -> f64 {
        match self {
            Tack::Starboard => 1.0,
            Tack::Port => -1.0,
        }
    }
}

/// Navigator lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavPhase {
    /// Waiting for two GPS fixes so velocity is defined.
    #[default]
    AwaitingFix,
    /// Following waypoints.
    Sailing,
    /// Waypoint queue exhausted.
    Done,
    /// Stopped by an external quit command.
    Stopped,
}

impl NavPhase {
    /// True once the control loop should exit.
    pub fn is_terminal(self) -> bool {
        matches!(self, NavPhase::Done | NavPhase::Stopped)
    }
}

/// Who is steering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlMode {
    /// Heading commands come from the optimizer.
    #[default]
    Autopilot,
    /// Manual override: heading commands suspended, telemetry continues.
    Manual,
}

/// Origin of a waypoint in the queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaypointKind {
    /// Part of the mission plan.
    #[default]
    Mission,
    /// Inserted to pass clear of an extrapolated obstacle.
    Avoidance,
    /// Placed on a detected buoy (search).
    Buoy,
}

/// Stage of a multi-phase mission plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionStage {
    /// Straight waypoint following.
    #[default]
    Route,
    /// Rectangular endurance lap (repeated until the deadline).
    EnduranceLap,
    /// Station keeping: entry gate, then the square's center.
    StationEntry,
    /// Station keeping: circling inside the square.
    StationKeep,
    /// Station keeping: leaving through the nearest side.
    StationExit,
}
