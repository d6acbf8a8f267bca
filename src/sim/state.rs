//! Simulation context
//!
//! Everything the harness used to keep as process-wide state lives in one
//! owned `SimState`, passed by reference into `tick` and the draw calls.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::triangle::Triangle;
use crate::Point;
use crate::error::Result;
use crate::settings::Settings;

/// Spawn attempts before falling back to a display corner
const MAX_SPAWN_ATTEMPTS: u32 = 64;

/// Contact state of the triangle for the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContactPhase {
    /// Nothing touched the triangle this tick
    #[default]
    Idle,
    /// The tracked point is touching the triangle
    Colliding,
}

/// What touched the triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    Ball,
    Cursor,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// The tracked point entered the triangle and was sent back out
    TriangleHit {
        contact: Contact,
        edge: usize,
        incidence: f32,
        reflection: f32,
    },
    /// The triangle's spin was mirrored
    SpinReversed { rot_angle_change: f32 },
    /// The ball bounced off a display edge
    WallBounce { normal: Vec2 },
}

/// The tracked ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Point,
    /// Velocity in units per second
    pub vel: Vec2,
    /// Drawing radius; collision treats the ball as its centre point
    pub radius: f32,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Hand out a generator for the next stream, so repeated draws differ
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Settings the run was created from
    pub settings: Settings,
    /// RNG state
    pub rng_state: RngState,
    /// The triangle
    pub triangle: Triangle,
    /// The tracked ball
    pub ball: Ball,
    /// Contact state for the current tick
    pub phase: ContactPhase,
    /// Whether the cursor was inside the triangle last tick
    pub cursor_inside: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Paused runs ignore everything except the pause toggle
    pub paused: bool,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<SimEvent>,
}

impl SimState {
    /// Build a fresh run from validated settings
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        let triangle = Triangle::from_settings(&settings)?;
        let mut rng_state = RngState::new(settings.seed);

        let ball = spawn_ball(&settings, &triangle, &mut rng_state);
        log::info!(
            "Simulation ready: {}x{} display, seed {}, ball at ({:.1}, {:.1})",
            settings.display_width,
            settings.display_height,
            settings.seed,
            ball.pos.x,
            ball.pos.y
        );

        Ok(Self {
            settings,
            rng_state,
            triangle,
            ball,
            phase: ContactPhase::Idle,
            cursor_inside: false,
            time_ticks: 0,
            paused: false,
            events: Vec::new(),
        })
    }

    /// Display size as a vector
    pub fn display_size(&self) -> Vec2 {
        Vec2::new(self.settings.display_width, self.settings.display_height)
    }

    /// Put a fresh ball somewhere outside the triangle
    pub fn respawn_ball(&mut self) {
        self.ball = spawn_ball(&self.settings, &self.triangle, &mut self.rng_state);
        log::debug!("Ball respawned at ({:.1}, {:.1})", self.ball.pos.x, self.ball.pos.y);
    }
}

/// Pick a start position clear of the triangle's circumcircle and a random heading
fn spawn_ball(settings: &Settings, triangle: &Triangle, rng_state: &mut RngState) -> Ball {
    let mut rng = rng_state.next_rng();
    let radius = settings.ball_radius;
    let clearance = triangle.radius() + radius * 2.0;

    let max = Vec2::new(settings.display_width, settings.display_height) - radius;
    let mut pos = Point::splat(radius);
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let candidate = Point::new(
            rng.random_range(radius..=max.x.max(radius)),
            rng.random_range(radius..=max.y.max(radius)),
        );
        if candidate.distance(triangle.centre) > clearance {
            pos = candidate;
            break;
        }
    }

    let heading: f32 = rng.random_range(0.0..std::f32::consts::TAU);
    Ball {
        pos,
        vel: Vec2::from_angle(heading) * settings.ball_speed,
        radius,
    }
}
