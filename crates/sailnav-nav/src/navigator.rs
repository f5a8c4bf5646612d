//! The navigator state machine.
//!
//! `Navigator` owns the fused boat state, the waypoint queue and the mission
//! plan. Each call to [`Navigator::tick`] runs one control cycle: commands,
//! sensors, detection, stage timers, arrival, heading. Nothing outside holds
//! a reference into it; telemetry gets an owned snapshot per cycle.

use std::collections::VecDeque;
use std::time::Duration;

use log::{debug, error, info, warn};

use sailnav_core::commands::RadioCommand;
use sailnav_core::config::NavConfig;
use sailnav_core::enums::{ControlMode, MissionStage, NavPhase, WaypointKind};
use sailnav_core::error::ConfigError;
use sailnav_core::events::NavEvent;
use sailnav_core::mission::Mission;
use sailnav_core::projection::GeoFrame;
use sailnav_core::state::{HeadingDecision, TelemetrySnapshot};
use sailnav_core::types::{BoatState, Vector2, Waypoint};
use sailnav_fusion::{SensorFusion, SensorReading};
use sailnav_helm::HeadingOptimizer;
use sailnav_missions::validate_corners;

use crate::avoidance::{assess_collision, Observation, ObstacleTracker, Sighting, TrackUpdate};
use crate::profile::{NavProfile, PlanContext, PlanStep};

/// Everything the collaborators delivered for one cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleInput {
    /// Current time in seconds (same clock as the fix timestamps).
    pub now: f64,
    pub sensors: SensorReading,
    /// Detection output; ignored by missions without a detection hook.
    pub observation: Option<Observation>,
}

/// Result of one control cycle.
#[derive(Debug, Clone)]
pub struct CycleReport {
    /// Absolute heading to hand to the helm, if one was computed.
    pub heading: Option<f64>,
    pub snapshot: TelemetrySnapshot,
}

/// Mission-scoped navigator. One per mission.
pub struct Navigator {
    mission: Mission,
    config: NavConfig,
    profile: NavProfile,
    optimizer: HeadingOptimizer,
    fusion: SensorFusion,
    /// Mission waypoints projected into the frame.
    corners: Vec<Vector2>,

    current: Option<Waypoint>,
    queue: VecDeque<Waypoint>,
    /// Sequence the current stage started with, for repeating stages.
    lap: Vec<Waypoint>,

    phase: NavPhase,
    control: ControlMode,
    stage: MissionStage,
    stage_started: f64,
    mission_start: Option<f64>,
    now: f64,
    cycle: u64,

    tracker: ObstacleTracker,
    last_observation: Option<f64>,

    command_queue: VecDeque<RadioCommand>,
    events: Vec<NavEvent>,
}

impl Navigator {
    /// Set up a mission from `(lat, lon)` waypoints.
    ///
    /// The first waypoint becomes the frame origin. Fails before any cycle
    /// runs if the waypoints, the mission parameters or the config are
    /// unusable.
    pub fn new(
        waypoints: &[(f64, f64)],
        mission: Mission,
        config: NavConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let &(lat0, lon0) = waypoints.first().ok_or(ConfigError::EmptyWaypoints)?;

        let frame = GeoFrame::new(lat0, lon0);
        let corners: Vec<Vector2> = waypoints
            .iter()
            .map(|&(lat, lon)| frame.project(lat, lon))
            .collect();
        validate_corners(&mission, &corners)?;

        let profile = NavProfile::from_mission(&mission, &config);
        let (stage, planned) = profile.plan.initial(&corners, Vector2::ZERO)?;

        info!(
            "{} mission: {} waypoints, origin ({:.6}, {:.6})",
            mission.name(),
            planned.len(),
            lat0,
            lon0
        );

        let control = if profile.start_manual {
            ControlMode::Manual
        } else {
            ControlMode::Autopilot
        };

        let mut navigator = Self {
            optimizer: HeadingOptimizer::new(&config),
            fusion: SensorFusion::new(frame, config.wind_window),
            tracker: ObstacleTracker::new(config.max_track_gap_secs),
            mission,
            config,
            profile,
            corners,
            current: None,
            queue: VecDeque::new(),
            lap: Vec::new(),
            phase: NavPhase::AwaitingFix,
            control,
            stage,
            stage_started: 0.0,
            mission_start: None,
            now: 0.0,
            cycle: 0,
            last_observation: None,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        };
        navigator.load(planned);
        Ok(navigator)
    }

    /// Queue a base-station command for the next cycle.
    pub fn queue_command(&mut self, command: RadioCommand) {
        self.command_queue.push_back(command);
    }

    /// Run one control cycle.
    pub fn tick(&mut self, input: CycleInput) -> CycleReport {
        self.cycle += 1;
        self.now = input.now;
        self.process_commands();

        if self.phase.is_terminal() {
            return self.report(None);
        }

        let outcome = self.fusion.ingest(&input.sensors);
        if outcome.first_fix {
            if let Some(position) = self.fusion.state().position {
                self.events.push(NavEvent::FixAcquired { position });
            }
        }
        if outcome.velocity_established {
            if let Some(velocity) = self.fusion.state().velocity {
                self.events.push(NavEvent::VelocityEstablished { velocity });
            }
        }

        if self.control == ControlMode::Manual {
            return self.report(None);
        }

        // Startup barrier: no heading until velocity is defined
        let state = *self.fusion.state();
        let (Some(boat), true) = (state.position, state.has_velocity()) else {
            return self.report(None);
        };

        if self.phase == NavPhase::AwaitingFix {
            self.begin_sailing(boat);
        }

        let obstacle_seen = match input.observation {
            Some(observation) if self.profile.detection.is_active() => {
                self.run_detection(&observation, boat)
            }
            _ => false,
        };

        self.check_stage_timer(&state);

        if !obstacle_seen {
            self.check_arrival(&state);
        }

        if self.phase.is_terminal() {
            return self.report(None);
        }

        let decision = self
            .current
            .and_then(|wp| self.optimizer.select_heading(&state, wp.position));
        self.report(decision)
    }

    // --- Accessors ---

    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn profile(&self) -> &NavProfile {
        &self.profile
    }

    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    pub fn control(&self) -> ControlMode {
        self.control
    }

    pub fn stage(&self) -> MissionStage {
        self.stage
    }

    pub fn state(&self) -> &BoatState {
        self.fusion.state()
    }

    pub fn frame(&self) -> &GeoFrame {
        self.fusion.frame()
    }

    /// Cadence for the control loop.
    pub fn dwell(&self) -> Duration {
        self.profile.dwell
    }

    pub fn current_waypoint(&self) -> Option<&Waypoint> {
        self.current.as_ref()
    }

    /// Remaining waypoints, current first.
    pub fn waypoints(&self) -> Vec<Waypoint> {
        self.current.iter().chain(self.queue.iter()).copied().collect()
    }

    /// Seconds since sailing began.
    pub fn mission_time(&self) -> f64 {
        self.mission_start.map_or(0.0, |start| self.now - start)
    }

    // --- Cycle steps ---

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: RadioCommand) {
        if self.phase.is_terminal() {
            return;
        }
        match command {
            RadioCommand::Override => {
                if self.control == ControlMode::Autopilot {
                    info!("manual override engaged");
                    self.control = ControlMode::Manual;
                    self.events.push(NavEvent::OverrideEntered);
                }
            }
            RadioCommand::Autopilot => {
                if self.control == ControlMode::Manual {
                    info!("autopilot resumed");
                    self.control = ControlMode::Autopilot;
                    self.events.push(NavEvent::OverrideExited);
                }
            }
            RadioCommand::Quit => {
                info!("mission stopped by base station");
                self.phase = NavPhase::Stopped;
                self.events.push(NavEvent::MissionStopped);
            }
        }
    }

    fn begin_sailing(&mut self, boat: Vector2) {
        info!("velocity defined, beginning navigation");
        self.phase = NavPhase::Sailing;
        self.mission_start = Some(self.now);
        self.stage_started = self.now;

        if self.profile.plan.depends_on_start() {
            match self.profile.plan.initial(&self.corners, boat) {
                Ok((stage, planned)) => {
                    self.stage = stage;
                    self.load(planned);
                }
                Err(err) => warn!("keeping initial plan: {err}"),
            }
        }
    }

    /// Returns true when an obstacle was seen this cycle.
    fn run_detection(&mut self, observation: &Observation, boat: Vector2) -> bool {
        if let Some(last) = self.last_observation {
            if observation.timestamp <= last {
                warn!(
                    "dropping out-of-order observation at t={} (last t={})",
                    observation.timestamp, last
                );
                return false;
            }
        }
        self.last_observation = Some(observation.timestamp);

        if let (Some(buoy), true) = (observation.buoy, self.profile.detection.searches()) {
            self.acquire_buoy(buoy);
        }

        let Some(obstacle) = observation.obstacle else {
            return false;
        };
        let sighting = Sighting {
            position: obstacle,
            timestamp: observation.timestamp,
        };
        match self.tracker.observe(sighting) {
            TrackUpdate::Dropped => return false,
            TrackUpdate::Started => {}
            TrackUpdate::Paired(first, second) => {
                if let Some(target) = self.current.map(|wp| wp.position) {
                    if let Some(point) = assess_collision(
                        first,
                        second,
                        boat,
                        target,
                        self.config.avoidance_lookahead_secs,
                        self.config.avoidance_clearance,
                    ) {
                        self.insert_avoidance(point);
                    }
                }
            }
        }
        true
    }

    fn acquire_buoy(&mut self, position: Vector2) {
        let already = matches!(self.current, Some(wp) if wp.kind == WaypointKind::Buoy);
        self.current = Some(Waypoint::buoy(position));
        self.queue.clear();
        if !already {
            info!("buoy acquired at ({:.1}, {:.1})", position.x, position.y);
            self.events.push(NavEvent::BuoyAcquired { position });
        }
    }

    fn insert_avoidance(&mut self, position: Vector2) {
        let waypoint = Waypoint::avoidance(position);
        match self.current {
            Some(wp) if wp.kind == WaypointKind::Avoidance => {}
            Some(wp) => self.queue.push_front(wp),
            None => {}
        }
        self.current = Some(waypoint);
        info!(
            "avoidance waypoint at ({:.1}, {:.1})",
            position.x, position.y
        );
        self.events.push(NavEvent::AvoidanceInserted { waypoint });
    }

    fn check_stage_timer(&mut self, state: &BoatState) {
        let Some(ctx) = self.plan_context(state) else {
            return;
        };
        match self.profile.plan.on_timer(self.stage, &ctx) {
            Ok(Some(step)) => self.apply_step(step),
            Ok(None) => {}
            Err(err) => error!("stage timer: {err}"),
        }
    }

    fn check_arrival(&mut self, state: &BoatState) {
        let (Some(boat), Some(current)) = (state.position, self.current) else {
            return;
        };
        if !current.is_reached(boat, self.config.arrival_radius) {
            return;
        }

        let remaining = self.queue.len();
        info!(
            "arrived at ({:.1}, {:.1}), {} remaining",
            current.position.x, current.position.y, remaining
        );
        self.events.push(NavEvent::WaypointArrived {
            waypoint: current,
            remaining,
        });

        self.current = self.queue.pop_front();
        if self.current.is_some() {
            return;
        }

        let step = match self.plan_context(state) {
            Some(ctx) => self.profile.plan.on_exhausted(self.stage, &self.lap, &ctx),
            None => Ok(PlanStep::Complete),
        };
        match step {
            Ok(step) => self.apply_step(step),
            Err(err) => {
                error!("cannot extend mission plan: {err}");
                self.apply_step(PlanStep::Complete);
            }
        }
    }

    fn apply_step(&mut self, step: PlanStep) {
        match step {
            PlanStep::Continue { stage, waypoints } => {
                if stage != self.stage {
                    info!("stage {:?} -> {:?}", self.stage, stage);
                    self.events.push(NavEvent::StageChanged {
                        from: self.stage,
                        to: stage,
                    });
                    self.stage = stage;
                    self.stage_started = self.now;
                } else {
                    debug!("repeating {:?}", stage);
                }
                self.load(waypoints);
                if self.current.is_none() {
                    self.finish();
                }
            }
            PlanStep::Complete => self.finish(),
        }
    }

    fn finish(&mut self) {
        info!("mission complete after {:.1} s", self.mission_time());
        self.current = None;
        self.queue.clear();
        self.phase = NavPhase::Done;
        self.events.push(NavEvent::MissionComplete);
    }

    /// Replace the queue with `waypoints` and make the first one current.
    fn load(&mut self, waypoints: Vec<Waypoint>) {
        self.lap = waypoints.clone();
        self.queue = waypoints.into();
        self.current = self.queue.pop_front();
    }

    fn plan_context(&self, state: &BoatState) -> Option<PlanContext<'_>> {
        Some(PlanContext {
            corners: &self.corners,
            boat: state.position?,
            heading: state.heading().unwrap_or(0.0),
            mission_time: self.mission_time(),
            stage_time: self.now - self.stage_started,
        })
    }

    fn report(&mut self, decision: Option<HeadingDecision>) -> CycleReport {
        let snapshot = TelemetrySnapshot {
            cycle: self.cycle,
            mission_time_secs: self.mission_time(),
            phase: self.phase,
            control: self.control,
            stage: self.stage,
            boat: *self.fusion.state(),
            waypoints: self.waypoints(),
            decision,
            events: std::mem::take(&mut self.events),
        };
        CycleReport {
            heading: decision.map(|d| d.heading),
            snapshot,
        }
    }
}
