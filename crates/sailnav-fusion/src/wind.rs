//! Wind direction conversion and smoothing.

use std::collections::VecDeque;

use sailnav_core::constants::ANEMOMETER_FULL_SCALE;

/// Convert a raw vane reading into a global wind direction (degrees).
///
/// The vane reports relative to the sail; the sail angle brings it into the
/// boat frame and the boat heading (planar convention) into the global frame.
pub fn anemometer_to_wind(raw: f64, sail_angle_deg: f64, boat_heading_deg: f64) -> f64 {
    let vane_deg = (360.0 - raw * 360.0 / ANEMOMETER_FULL_SCALE) + 180.0;
    (vane_deg + sail_angle_deg + boat_heading_deg + 270.0).rem_euclid(360.0)
}

/// Self-halving decay filter for noisy wind readings.
///
/// Each new sample enters at half weight and every stored term is halved,
/// so a sample `k` readings old contributes `2^-(k+1)` of its value. The
/// output is the plain sum of the stored terms. It is neither normalized
/// (a constant input converges to `1 - 2^-window` of itself) nor aware of
/// the 0/360 wrap.
#[derive(Debug, Clone)]
pub struct WindFilter {
    terms: VecDeque<f64>,
    window: usize,
}

impl WindFilter {
    pub fn new(window: usize) -> Self {
        Self {
            terms: VecDeque::with_capacity(window + 1),
            window: window.max(1),
        }
    }

    /// Add a sample and return the filtered direction.
    pub fn push(&mut self, sample: f64) -> f64 {
        for term in self.terms.iter_mut() {
            *term /= 2.0;
        }
        self.terms.push_back(sample / 2.0);
        if self.terms.len() > self.window {
            self.terms.pop_front();
        }
        self.value()
    }

    /// Current filtered value (0 before any sample).
    pub fn value(&self) -> f64 {
        self.terms.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
