//! Kinematic stand-in boat for dry runs.
//!
//! Not a physics model: the boat moves at a fixed speed along the commanded
//! heading whenever the polar model says that heading is sailable, and sits
//! still in the dead zones. Wind jitter and GPS noise come from a seeded
//! ChaCha8 stream so a given seed always produces the same run.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use sailnav_core::projection::GeoFrame;
use sailnav_core::types::{wrap_360, Vector2};
use sailnav_fusion::{GpsFix, SensorReading};
use sailnav_helm::PolarModel;
use sailnav_nav::{Clock, Helm, SensorSource};

use crate::config::SimSettings;

pub struct SimBoat {
    frame: GeoFrame,
    polar: PolarModel,
    rng: ChaCha8Rng,
    position: Vector2,
    velocity: Vector2,
    /// Planar heading the boat is pointing (degrees, 0 = East, CCW).
    heading: f64,
    speed: f64,
    wind_deg: f64,
    wind_jitter_deg: f64,
    gps_noise_m: f64,
    last_read: Option<f64>,
}

impl SimBoat {
    pub fn new(frame: GeoFrame, polar: PolarModel, settings: &SimSettings) -> Self {
        let (x, y) = settings.start;
        Self {
            frame,
            polar,
            rng: ChaCha8Rng::seed_from_u64(settings.seed),
            position: Vector2::new(x, y),
            velocity: Vector2::ZERO,
            // Start on a beam reach so the IMU reports something sensible
            heading: wrap_360(settings.wind_deg + 90.0),
            speed: settings.speed,
            wind_deg: settings.wind_deg,
            wind_jitter_deg: settings.wind_jitter_deg,
            gps_noise_m: settings.gps_noise_m,
            last_read: None,
        }
    }

    /// True position, without GPS noise.
    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    fn noise(&mut self, half_width: f64) -> f64 {
        if half_width > 0.0 {
            self.rng.gen_range(-half_width..=half_width)
        } else {
            0.0
        }
    }
}

impl SensorSource for SimBoat {
    fn read(&mut self, now: f64) -> SensorReading {
        if let Some(last) = self.last_read {
            self.position += self.velocity * (now - last).max(0.0);
        }
        self.last_read = Some(now);

        let dx = self.noise(self.gps_noise_m);
        let dy = self.noise(self.gps_noise_m);
        let (lat, lon) = self.frame.to_geo(&(self.position + Vector2::new(dx, dy)));
        let jitter = self.noise(self.wind_jitter_deg);
        let wind = wrap_360(self.wind_deg + jitter);
        // Compass yaw: 0 = North, clockwise
        let yaw = wrap_360(450.0 - self.heading);

        SensorReading::empty()
            .with_fix(GpsFix::new(lat, lon, now))
            .with_imu_yaw(yaw)
            .with_wind(wind)
    }
}

impl Helm for SimBoat {
    fn steer(&mut self, heading_deg: f64) {
        self.heading = wrap_360(heading_deg);
        self.velocity = self
            .polar
            .velocity_at(self.heading - self.wind_deg, self.wind_deg)
            * self.speed;
    }
}

/// Virtual time: waiting advances the clock instantly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimClock {
    t: f64,
}

impl Clock for SimClock {
    fn now(&self) -> f64 {
        self.t
    }

    fn wait(&mut self, dwell: Duration) {
        self.t += dwell.as_secs_f64();
    }
}
