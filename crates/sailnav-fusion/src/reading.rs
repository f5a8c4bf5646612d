//! Per-cycle sensor input. Every field is optional: a timed-out read is
//! simply absent for that cycle.

use serde::{Deserialize, Serialize};

/// A validated GPS position fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsFix {
    pub lat: f64,
    pub lon: f64,
    /// Seconds on the collaborator's monotonic clock.
    pub timestamp: f64,
}

impl GpsFix {
    pub fn new(lat: f64, lon: f64, timestamp: f64) -> Self {
        Self { lat, lon, timestamp }
    }
}

/// Wind sample as delivered by the anemometer collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WindReading {
    /// Already converted to a global direction (degrees, planar convention).
    Direction { degrees: f64 },
    /// Raw vane reading relative to the sail, converted using the IMU heading.
    Anemometer { raw: f64, sail_angle_deg: f64 },
}

/// Everything the sensor collaborators produced this cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub fix: Option<GpsFix>,
    /// Compass yaw from the IMU (degrees, 0 = North, clockwise).
    pub imu_yaw_deg: Option<f64>,
    pub wind: Option<WindReading>,
}

impl SensorReading {
    /// A reading with nothing in it (every sensor timed out).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_fix(mut self, fix: GpsFix) -> Self {
        self.fix = Some(fix);
        self
    }

    pub fn with_imu_yaw(mut self, yaw_deg: f64) -> Self {
        self.imu_yaw_deg = Some(yaw_deg);
        self
    }

    pub fn with_wind(mut self, degrees: f64) -> Self {
        self.wind = Some(WindReading::Direction { degrees });
        self
    }
}
