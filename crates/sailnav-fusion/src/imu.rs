//! IMU heading convention conversion.

use sailnav_core::types::wrap_360;

/// Convert a compass yaw (0 = North, clockwise) into the planar heading
/// convention (0 = East, counter-clockwise), wrapped into [0, 360).
pub fn yaw_to_heading(yaw_deg: f64) -> f64 {
    wrap_360(360.0 + 90.0 - yaw_deg)
}
