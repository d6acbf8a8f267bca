//! Spin Triangle - geometry core for a rotating, bouncing triangle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, triangle, collisions, tick)
//! - `renderer`: Vertex generation and the draw boundary to the platform
//! - `settings`: Data-driven configuration
//! - `error`: Error taxonomy shared by every module

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, Error, GeometryError, Result};
pub use settings::Settings;

use glam::Vec2;

/// A 2D coordinate. Plain value, copied freely.
pub type Point = Vec2;

/// A line segment as its two end points, in order.
pub type Line = [Point; 2];

/// Simulation configuration constants
pub mod consts {
    /// Degrees to radians. Every trigonometric entry point goes through this.
    pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;
    /// Radians to degrees
    pub const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;

    /// Number of triangle vertices
    pub const VERTEX_COUNT: usize = 3;
    /// Angular spacing between consecutive vertices (degrees)
    pub const VERTEX_SPACING: f32 = 360.0 / VERTEX_COUNT as f32;

    /// Default display dimensions
    pub const DISPLAY_WIDTH: f32 = 1100.0;
    pub const DISPLAY_HEIGHT: f32 = 800.0;

    /// Timer rate of the harness (ticks per second)
    pub const TICK_HZ: f32 = 30.0;

    /// Circumradius of the triangle
    pub const TRIANGLE_RADIUS: f32 = 150.0;
    /// Rotation applied per tick (degrees)
    pub const ROT_ANGLE_CHANGE: f32 = 2.0;

    /// Tracked ball defaults
    pub const BALL_RADIUS: f32 = 6.0;
    pub const BALL_SPEED: f32 = 240.0;

    /// Distance the ball is pushed past an edge after contact
    pub const CONTACT_SKIN: f32 = 0.5;
    /// Distances closer than this count as equal when picking a vertex
    pub const TIE_EPSILON: f32 = 1e-3;
    /// Points within this distance outside an edge still count as on it
    pub const BOUNDARY_TOLERANCE: f32 = 1e-3;
    /// Smallest radius, relative to the centre's largest coordinate, that
    /// still resolves three distinct vertices in f32
    pub const MIN_RELATIVE_RADIUS: f32 = 1e-4;
}

/// Build a point from its coordinates
#[inline]
pub fn point_new(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Normalize an angle in degrees to (-180, 180]
#[inline]
pub fn normalize_signed_degrees(angle: f32) -> f32 {
    let wrapped = normalize_degrees(angle);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

/// Heading of a direction vector in degrees, in (-180, 180]
#[inline]
pub fn heading_degrees(dir: Vec2) -> f32 {
    normalize_signed_degrees(dir.y.atan2(dir.x) * consts::RAD_TO_DEG)
}
