//! Collaborator seams and the paced control loop.
//!
//! The navigator never talks to hardware. Sensors, the helm, the radio and
//! telemetry are reached through these traits so the same loop drives a
//! real boat, the dry-run stand-in, or a scripted test double.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use log::{info, warn};

use sailnav_core::commands::RadioCommand;
use sailnav_core::enums::NavPhase;
use sailnav_core::state::TelemetrySnapshot;
use sailnav_fusion::SensorReading;

use crate::avoidance::Observation;
use crate::navigator::{CycleInput, Navigator};

/// Per-cycle sensor access. A timed-out read yields an empty reading.
pub trait SensorSource {
    fn read(&mut self, now: f64) -> SensorReading;

    /// Detection output for missions that use it.
    fn observe(&mut self, _now: f64) -> Option<Observation> {
        None
    }
}

/// Receives one absolute heading (degrees, global frame) per cycle.
pub trait Helm {
    fn steer(&mut self, heading_deg: f64);
}

pub trait TelemetrySink {
    fn publish(&mut self, snapshot: &TelemetrySnapshot);
}

/// Non-blocking base-station command poll.
pub trait CommandSource {
    fn poll(&mut self) -> Option<RadioCommand>;
}

impl CommandSource for mpsc::Receiver<RadioCommand> {
    fn poll(&mut self) -> Option<RadioCommand> {
        self.try_recv().ok()
    }
}

/// Time source for the loop cadence.
pub trait Clock {
    /// Seconds since an arbitrary epoch.
    fn now(&self) -> f64;
    fn wait(&mut self, dwell: Duration);
}

/// Wall clock: real sleeps between cycles.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    fn wait(&mut self, dwell: Duration) {
        std::thread::sleep(dwell);
    }
}

/// Drive `navigator` until the mission ends or `max_cycles` runs out.
///
/// Each cycle: drain commands, read sensors, tick, steer if a heading was
/// produced, publish the snapshot, then wait for the profile's dwell.
/// Returns the phase the navigator stopped in.
pub fn run_mission<V, T, C, K>(
    navigator: &mut Navigator,
    vessel: &mut V,
    telemetry: &mut T,
    commands: &mut C,
    clock: &mut K,
    max_cycles: Option<u64>,
) -> NavPhase
where
    V: SensorSource + Helm,
    T: TelemetrySink,
    C: CommandSource,
    K: Clock,
{
    let detection = navigator.profile().detection.is_active();
    let dwell = navigator.dwell();
    let mut cycles = 0u64;

    loop {
        while let Some(command) = commands.poll() {
            navigator.queue_command(command);
        }

        let now = clock.now();
        let sensors = vessel.read(now);
        let observation = if detection { vessel.observe(now) } else { None };

        let report = navigator.tick(CycleInput {
            now,
            sensors,
            observation,
        });
        if let Some(heading) = report.heading {
            vessel.steer(heading);
        }
        telemetry.publish(&report.snapshot);

        if navigator.phase().is_terminal() {
            info!(
                "control loop finished in {:?} after {} cycles",
                navigator.phase(),
                report.snapshot.cycle
            );
            return navigator.phase();
        }

        cycles += 1;
        if max_cycles.is_some_and(|max| cycles >= max) {
            warn!("control loop stopped after {} cycles", cycles);
            return navigator.phase();
        }
        clock.wait(dwell);
    }
}
