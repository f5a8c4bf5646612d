//! Sensor fusion: folds one cycle's readings into the boat state.
//!
//! Readings are applied in a fixed order: IMU, wind, GPS. The wind
//! conversion for raw vane readings needs the fresh IMU heading.

use log::{debug, info, warn};

use sailnav_core::projection::GeoFrame;
use sailnav_core::types::{BoatState, Vector2};

use crate::imu::yaw_to_heading;
use crate::reading::{GpsFix, SensorReading, WindReading};
use crate::wind::{anemometer_to_wind, WindFilter};

/// What changed while ingesting one reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FusionOutcome {
    /// The very first fix was accepted this cycle.
    pub first_fix: bool,
    /// Velocity became defined this cycle (second accepted fix).
    pub velocity_established: bool,
    /// A fix arrived but was not newer than the last one.
    pub fix_dropped: bool,
}

/// Owns the boat state and the wind filter.
#[derive(Debug, Clone)]
pub struct SensorFusion {
    frame: GeoFrame,
    state: BoatState,
    wind_filter: WindFilter,
}

impl SensorFusion {
    pub fn new(frame: GeoFrame, wind_window: usize) -> Self {
        Self {
            frame,
            state: BoatState::default(),
            wind_filter: WindFilter::new(wind_window),
        }
    }

    pub fn frame(&self) -> &GeoFrame {
        &self.frame
    }

    pub fn state(&self) -> &BoatState {
        &self.state
    }

    /// Apply one cycle of readings. Missing readings leave the state as is.
    pub fn ingest(&mut self, reading: &SensorReading) -> FusionOutcome {
        if let Some(yaw) = reading.imu_yaw_deg {
            self.state.imu_heading = Some(yaw_to_heading(yaw));
        }

        if let Some(wind) = reading.wind {
            let direction = match wind {
                WindReading::Direction { degrees } => degrees,
                WindReading::Anemometer {
                    raw,
                    sail_angle_deg,
                } => anemometer_to_wind(
                    raw,
                    sail_angle_deg,
                    self.state.imu_heading.unwrap_or(0.0),
                ),
            };
            self.state.wind_direction = self.wind_filter.push(direction);
        }

        match reading.fix {
            Some(fix) => self.apply_fix(&fix),
            None => FusionOutcome::default(),
        }
    }

    fn apply_fix(&mut self, fix: &GpsFix) -> FusionOutcome {
        let mut outcome = FusionOutcome::default();
        let position = self.frame.project(fix.lat, fix.lon);

        match (self.state.position, self.state.last_fix_time) {
            (Some(previous), Some(previous_time)) => {
                let dt = fix.timestamp - previous_time;
                if dt <= 0.0 {
                    warn!(
                        "dropping out-of-order fix at t={} (last t={})",
                        fix.timestamp, previous_time
                    );
                    outcome.fix_dropped = true;
                    return outcome;
                }
                let velocity: Vector2 = (position - previous) / dt;
                if self.state.velocity.is_none() {
                    info!("velocity established: ({:.2}, {:.2}) m/s", velocity.x, velocity.y);
                    outcome.velocity_established = true;
                }
                self.state.velocity = Some(velocity);
            }
            _ => {
                info!(
                    "GPS fix acquired at ({:.1}, {:.1}) m from origin",
                    position.x, position.y
                );
                outcome.first_fix = true;
            }
        }

        debug!("fix t={} -> ({:.2}, {:.2})", fix.timestamp, position.x, position.y);
        self.state.position = Some(position);
        self.state.last_fix_time = Some(fix.timestamp);
        outcome
    }
}
