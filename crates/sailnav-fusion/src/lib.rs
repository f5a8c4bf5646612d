//! Sensor fusion for SAILNAV.
//!
//! Turns raw, possibly missing GPS/IMU/anemometer readings into the
//! navigator's [`BoatState`](sailnav_core::BoatState): velocity from
//! consecutive fixes, IMU yaw in the planar heading convention, and a
//! decay-filtered wind direction.

pub mod fusion;
pub mod imu;
pub mod reading;
pub mod wind;

pub use fusion::{FusionOutcome, SensorFusion};
pub use reading::{GpsFix, SensorReading, WindReading};
pub use wind::WindFilter;

#[cfg(test)]
mod tests;
