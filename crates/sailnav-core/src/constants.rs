//! Navigation constants and tuning defaults.

// --- Arrival ---

/// Distance (meters) under which a waypoint counts as reached.
pub const DEFAULT_ARRIVAL_RADIUS: f64 = 5.0;

// --- Heading optimizer ---

/// Heading-change penalty numerator; hysteresis = 1 + BEATING / distance.
pub const BEATING_CONSTANT: f64 = 10.0;

/// Step (degrees) for scanning candidate headings on each tack.
pub const SCAN_STEP_DEG: f64 = 1.0;

/// Upper bound (exclusive) of the per-tack scan, in degrees off the wind.
pub const SCAN_LIMIT_DEG: f64 = 180.0;

// --- Polar diagram ---

/// Half-width of the no-go zone around dead upwind (degrees).
pub const UPWIND_DEAD_ZONE_DEG: f64 = 20.0;

/// Half-width of the no-go zone around dead downwind (degrees).
pub const DOWNWIND_DEAD_ZONE_DEG: f64 = 20.0;

// --- Control loop cadence ---

/// Node dwell between cycles for waypoint-following missions (seconds).
pub const FAST_DWELL_SECS: f64 = 0.35;

/// Node dwell between cycles for detection-driven missions (seconds).
pub const DETECTION_DWELL_SECS: f64 = 2.0;

// --- Sensors ---

/// Samples retained by the anemometer decay filter.
pub const WIND_FILTER_WINDOW: usize = 10;

/// Anemometer reading corresponding to a full revolution.
pub const ANEMOMETER_FULL_SCALE: f64 = 1700.0;

// --- Missions ---

/// Endurance event duration (7 hours).
pub const ENDURANCE_EXIT_AFTER_SECS: f64 = 25_200.0;

/// Clearance kept outside each endurance buoy (meters).
pub const ENDURANCE_BUOY_OFFSET: f64 = 5.0;

/// Time to hold inside the station-keeping square (5 minutes).
pub const STATION_KEEP_SECS: f64 = 300.0;

/// Radius of the holding circle around the boat (meters).
pub const STATION_CIRCLE_RADIUS: f64 = 10.0;

/// Distance outside each side midpoint for exit candidates (meters).
pub const STATION_EXIT_OFFSET: f64 = 10.0;

/// Bearings of the four holding points around the boat (degrees).
pub const STATION_KEEP_BEARINGS: [f64; 4] = [45.0, 135.0, 225.0, 315.0];

/// Corners needed for rectangle-based missions (NW, NE, SE, SW).
pub const RECTANGLE_CORNERS: usize = 4;

// --- Obstacle avoidance ---

/// How far ahead (seconds) obstacle motion is extrapolated.
pub const AVOIDANCE_LOOKAHEAD_SECS: f64 = 2.0;

/// Minimum passing distance from a predicted obstacle (meters).
pub const AVOIDANCE_CLEARANCE: f64 = 10.0;

/// Sightings further apart than this restart the obstacle track (seconds).
pub const MAX_TRACK_GAP_SECS: f64 = 10.0;
