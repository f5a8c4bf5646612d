//! Commands received from the base station over the radio link.
//!
//! Commands are polled once per cycle and applied before the sensor read.

use serde::{Deserialize, Serialize};

/// Base-station commands understood by the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RadioCommand {
    /// Engage manual override: stop issuing heading commands.
    Override,
    /// Return control to the autopilot.
    Autopilot,
    /// Stop the mission.
    Quit,
}
