//! Telemetry sink that writes each snapshot as one JSON log line.

use log::{info, warn};

use sailnav_core::events::NavEvent;
use sailnav_core::state::TelemetrySnapshot;
use sailnav_nav::TelemetrySink;

/// Logs snapshots under the `telemetry` target.
///
/// Cycles with events are always written; quiet cycles only every
/// `every` cycles so long dry runs stay readable.
#[derive(Debug, Clone)]
pub struct LogTelemetry {
    every: u64,
    published: u64,
    arrivals: usize,
}

impl LogTelemetry {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            published: 0,
            arrivals: 0,
        }
    }

    pub fn published(&self) -> u64 {
        self.published
    }

    /// Waypoints reached so far.
    pub fn arrivals(&self) -> usize {
        self.arrivals
    }
}

impl Default for LogTelemetry {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TelemetrySink for LogTelemetry {
    fn publish(&mut self, snapshot: &TelemetrySnapshot) {
        self.published += 1;
        self.arrivals += snapshot
            .events
            .iter()
            .filter(|e| matches!(e, NavEvent::WaypointArrived { .. }))
            .count();

        if snapshot.events.is_empty() && snapshot.cycle % self.every != 0 {
            return;
        }
        match serde_json::to_string(snapshot) {
            Ok(line) => info!(target: "telemetry", "{line}"),
            Err(err) => warn!("cannot serialize snapshot {}: {err}", snapshot.cycle),
        }
    }
}
