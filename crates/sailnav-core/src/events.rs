//! Discrete navigation events reported to telemetry.

use serde::{Deserialize, Serialize};

use crate::enums::MissionStage;
use crate::types::{Vector2, Waypoint};

/// Events emitted during a control cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NavEvent {
    /// First GPS fix accepted.
    FixAcquired { position: Vector2 },
    /// Second fix accepted; velocity is now defined and sailing begins.
    VelocityEstablished { velocity: Vector2 },
    /// Current waypoint reached.
    WaypointArrived { waypoint: Waypoint, remaining: usize },
    /// Mission plan moved to a new stage.
    StageChanged { from: MissionStage, to: MissionStage },
    /// Avoidance waypoint inserted ahead of the current target.
    AvoidanceInserted { waypoint: Waypoint },
    /// Search target detected; it replaces the remaining route.
    BuoyAcquired { position: Vector2 },
    /// Manual override engaged.
    OverrideEntered,
    /// Control returned to the autopilot.
    OverrideExited,
    /// Every waypoint has been reached.
    MissionComplete,
    /// Mission stopped by the base station.
    MissionStopped,
}
