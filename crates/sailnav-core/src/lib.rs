//! Core types and definitions for the SAILNAV navigation stack.
//!
//! This crate defines the vocabulary shared across all other crates:
//! planar vectors, the geodetic frame, boat state, waypoints, missions,
//! commands, events, telemetry snapshots, configuration and constants.
//! It has no dependency on any sensor, actuator or radio implementation.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod mission;
pub mod projection;
pub mod state;
pub mod types;

pub use config::NavConfig;
pub use error::ConfigError;
pub use mission::Mission;
pub use projection::GeoFrame;
pub use types::{BoatState, Planar, Vector2, Waypoint};
