//! VMG heading optimizer with tack hysteresis.
//!
//! Each cycle both tacks are scanned independently for the heading with the
//! best velocity made good toward the target. The closer tack to the current
//! heading is kept unless the other one beats its VMG by the hysteresis
//! factor `1 + beating_constant / distance`, which shrinks as the target
//! gets closer.

use log::{debug, trace};

use sailnav_core::config::NavConfig;
use sailnav_core::constants::SCAN_LIMIT_DEG;
use sailnav_core::enums::Tack;
use sailnav_core::state::HeadingDecision;
use sailnav_core::types::{angular_distance, wrap_360, BoatState, Vector2};

use crate::polar::PolarModel;

/// Best heading found on one tack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TackOption {
    pub tack: Tack,
    /// Absolute heading, wrapped into [0, 360).
    pub heading: f64,
    pub vmg: f64,
}

/// Scans candidate headings against the polar model.
#[derive(Debug, Clone, Copy)]
pub struct HeadingOptimizer {
    polar: PolarModel,
    beating_constant: f64,
    step_deg: f64,
}

impl Default for HeadingOptimizer {
    fn default() -> Self {
        Self::new(&NavConfig::default())
    }
}

impl HeadingOptimizer {
    pub fn new(config: &NavConfig) -> Self {
        Self {
            polar: PolarModel::from_config(config),
            beating_constant: config.beating_constant,
            step_deg: config.scan_step_deg,
        }
    }

    /// Best heading and its VMG on `tack`.
    ///
    /// Offsets `alpha` run from 0 (inclusive) to 180 (exclusive). Only a
    /// strictly greater VMG replaces the incumbent, so ties keep the
    /// heading closest to the wind. If nothing beats zero the result is the
    /// wind direction itself with zero VMG.
    ///
    /// Returns `None` while the boat position is unknown.
    pub fn best_heading_and_vmg(
        &self,
        state: &BoatState,
        target: Vector2,
        tack: Tack,
    ) -> Option<TackOption> {
        let position = state.position?;
        let toward = (target - position).normalize_or_zero();
        let wind = state.wind_direction;

        let mut best = TackOption {
            tack,
            heading: wind,
            vmg: 0.0,
        };

        let steps = (SCAN_LIMIT_DEG / self.step_deg).ceil() as usize;
        for k in 0..steps {
            let alpha = k as f64 * self.step_deg;
            if alpha >= SCAN_LIMIT_DEG {
                break;
            }
            let offset = tack.sign() * alpha;
            let vmg = self.polar.velocity_at(offset, wind).dot(toward);
            if vmg > best.vmg {
                best.vmg = vmg;
                best.heading = wind + offset;
            }
        }

        best.heading = wrap_360(best.heading);
        trace!("{:?}: best heading {:.1} vmg {:.4}", tack, best.heading, best.vmg);
        Some(best)
    }

    /// Choose the heading to sail toward `target` this cycle.
    ///
    /// Returns `None` until velocity is known, when position or heading is
    /// undefined, or when the boat sits exactly on the target (the arrival
    /// check handles that). A known but zero velocity falls back to the IMU
    /// heading.
    pub fn select_heading(&self, state: &BoatState, target: Vector2) -> Option<HeadingDecision> {
        state.velocity?;
        let distance = state.distance_to(target)?;
        let current = state.heading()?;
        if distance <= 0.0 {
            return None;
        }

        let starboard = self.best_heading_and_vmg(state, target, Tack::Starboard)?;
        let port = self.best_heading_and_vmg(state, target, Tack::Port)?;

        let hysteresis = 1.0 + self.beating_constant / distance;
        let dev_starboard = angular_distance(starboard.heading, current);
        let dev_port = angular_distance(port.heading, current);

        let choose_port = (dev_starboard < dev_port && starboard.vmg * hysteresis < port.vmg)
            || (dev_starboard >= dev_port && port.vmg * hysteresis >= starboard.vmg);

        let (chosen, dev_chosen, dev_other) = if choose_port {
            (port, dev_port, dev_starboard)
        } else {
            (starboard, dev_starboard, dev_port)
        };

        let decision = HeadingDecision {
            heading: chosen.heading,
            tack: chosen.tack,
            vmg: chosen.vmg,
            switched: dev_chosen > dev_other,
        };
        debug!(
            "heading {:.1} on {:?} (vmg {:.3}, h {:.3}, current {:.1}, switched {})",
            decision.heading,
            decision.tack,
            decision.vmg,
            hysteresis,
            current,
            decision.switched
        );
        Some(decision)
    }
}
