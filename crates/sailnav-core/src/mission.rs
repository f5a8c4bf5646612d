//! Mission profiles and their parameters.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Competition event the boat is running.
///
/// Dispatched once at mission setup into a concrete navigator profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Mission {
    /// Manual racing: the base station steers, the core only reports.
    FleetRace,
    /// Lap a rectangle of buoys until the deadline.
    Endurance {
        /// Seconds after the mission starts before no new lap begins.
        exit_after_secs: f64,
        /// Clearance kept outside each buoy (meters).
        buoy_offset: f64,
    },
    /// Enter a square, hold inside it, then leave through the nearest side.
    StationKeeping {
        /// Seconds spent circling inside the square.
        keep_secs: f64,
        /// Radius of the holding circle (meters).
        circle_radius: f64,
        /// Distance beyond the side midpoint for the exit (meters).
        exit_offset: f64,
    },
    /// Follow the given waypoints in order.
    #[default]
    PrecisionNavigation,
    /// Follow waypoints, steering around detected obstacles.
    CollisionAvoidance,
    /// Follow a search pattern until a buoy is detected, then go to it.
    Search,
}

impl Mission {
    /// Endurance with the event defaults.
    pub fn endurance() -> Self {
        Mission::Endurance {
            exit_after_secs: ENDURANCE_EXIT_AFTER_SECS,
            buoy_offset: ENDURANCE_BUOY_OFFSET,
        }
    }

    /// Station keeping with the event defaults.
    pub fn station_keeping() -> Self {
        Mission::StationKeeping {
            keep_secs: STATION_KEEP_SECS,
            circle_radius: STATION_CIRCLE_RADIUS,
            exit_offset: STATION_EXIT_OFFSET,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mission::FleetRace => "fleet race",
            Mission::Endurance { .. } => "endurance",
            Mission::StationKeeping { .. } => "station keeping",
            Mission::PrecisionNavigation => "precision navigation",
            Mission::CollisionAvoidance => "collision avoidance",
            Mission::Search => "search",
        }
    }

    /// Minimum number of waypoints this mission needs.
    pub fn required_waypoints(&self) -> usize {
        match self {
            Mission::Endurance { .. } | Mission::StationKeeping { .. } => RECTANGLE_CORNERS,
            _ => 1,
        }
    }

    /// Check the mission parameters and the waypoint count.
    pub fn validate(&self, waypoint_count: usize) -> Result<(), ConfigError> {
        if waypoint_count == 0 {
            return Err(ConfigError::EmptyWaypoints);
        }
        let required = self.required_waypoints();
        if waypoint_count < required {
            return Err(ConfigError::InsufficientCorners {
                mission: self.name(),
                required,
                found: waypoint_count,
            });
        }
        match *self {
            Mission::Endurance {
                exit_after_secs,
                buoy_offset,
            } => {
                positive("exit_after_secs", exit_after_secs)?;
                non_negative("buoy_offset", buoy_offset)?;
            }
            Mission::StationKeeping {
                keep_secs,
                circle_radius,
                exit_offset,
            } => {
                non_negative("keep_secs", keep_secs)?;
                positive("circle_radius", circle_radius)?;
                non_negative("exit_offset", exit_offset)?;
            }
            _ => {}
        }
        Ok(())
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}

pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}
