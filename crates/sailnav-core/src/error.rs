//! Configuration errors raised before any control cycle runs.

use thiserror::Error;

/// Fatal setup errors. Runtime sensor gaps are never reported through this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("at least one waypoint is required")]
    EmptyWaypoints,

    #[error("{mission} needs {required} corner waypoints, got {found}")]
    InsufficientCorners {
        mission: &'static str,
        required: usize,
        found: usize,
    },

    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
