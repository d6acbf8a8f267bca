//! Deterministic simulation module
//!
//! All geometry and state-update logic lives here. This module must be pure
//! and deterministic:
//! - One update per harness tick, no internal clock
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;
pub mod triangle;

pub use collision::{
    CollisionResult, ball_wall_collision, find_angle_of_refraction, reflect_velocity,
    triangle_point_collision,
};
pub use geometry::{
    find_angle_between_lines, find_normal, is_point_inside_of_line, rotate_line,
    signed_angle_between_lines,
};
pub use state::{Ball, Contact, ContactPhase, SimEvent, SimState};
pub use tick::{TickInput, tick};
pub use triangle::Triangle;
