//! Per-tick simulation update
//!
//! One call to `tick` is one timer tick of the harness. All mutation for the
//! tick finishes before `tick` returns, so a draw issued afterwards always
//! sees a consistent triangle and ball.

use glam::Vec2;

use super::collision::{ball_wall_collision, find_angle_of_refraction, triangle_point_collision};
use super::state::{Contact, ContactPhase, SimEvent, SimState};
use crate::Point;
use crate::consts::CONTACT_SKIN;
use crate::error::Result;

/// Walls checked per tick; two covers a corner
const MAX_WALL_PASSES: usize = 2;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Cursor position, if the harness tracks one
    pub cursor: Option<Point>,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the simulation by one tick
///
/// `dt` is the tick length in seconds and only scales ball movement; the
/// triangle turns by `rot_angle_change` every tick regardless of `dt`.
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) -> Result<()> {
    state.events.clear();

    if input.pause {
        state.paused = !state.paused;
        log::info!("Simulation {}", if state.paused { "paused" } else { "resumed" });
    }
    if state.paused {
        return Ok(());
    }

    // Every tick starts idle with the rotation advanced
    state.phase = ContactPhase::Idle;
    state.triangle.advance();
    state.time_ticks += 1;

    move_ball(state, dt)?;
    ball_triangle_contact(state)?;
    cursor_contact(state, input.cursor)?;

    Ok(())
}

/// Integrate the ball and bounce it off the display edges
fn move_ball(state: &mut SimState, dt: f32) -> Result<()> {
    let size = state.display_size();
    let ball = &mut state.ball;
    ball.pos += ball.vel * dt;

    for _ in 0..MAX_WALL_PASSES {
        let hit = ball_wall_collision(ball.pos, ball.vel, ball.radius, size.x, size.y)?;
        if !hit.hit {
            break;
        }
        ball.pos += hit.normal * hit.penetration;
        if hit.is_approaching(ball.vel) {
            ball.vel = hit.outgoing_velocity(ball.vel);
        }
        state.events.push(SimEvent::WallBounce { normal: hit.normal });
    }

    Ok(())
}

/// Send the ball back out of the triangle through the edge it crossed
fn ball_triangle_contact(state: &mut SimState) -> Result<()> {
    let ball = &mut state.ball;
    let hit = triangle_point_collision(&state.triangle, ball.pos, ball.vel)?;
    if !hit.hit {
        return Ok(());
    }

    state.phase = ContactPhase::Colliding;
    ball.pos = hit.point + hit.normal * CONTACT_SKIN;
    // The triangle can sweep into a ball that is already leaving
    if hit.is_approaching(ball.vel) {
        ball.vel = hit.outgoing_velocity(ball.vel);
    }

    log::debug!(
        "Tick {}: ball hit edge {} (incidence {:.1}°, reflection {:.1}°)",
        state.time_ticks,
        hit.edge,
        hit.incidence,
        hit.reflection
    );
    state.events.push(SimEvent::TriangleHit {
        contact: Contact::Ball,
        edge: hit.edge,
        incidence: hit.incidence,
        reflection: hit.reflection,
    });

    if state.settings.reverse_spin_on_hit {
        mirror_spin(state);
    }
    Ok(())
}

/// Cursor contact mirrors the spin once per entry, not every tick it stays inside
fn cursor_contact(state: &mut SimState, cursor: Option<Point>) -> Result<()> {
    let Some(cursor) = cursor.filter(|p| state.triangle.collides_with_point(*p)) else {
        state.cursor_inside = false;
        return Ok(());
    };

    state.phase = ContactPhase::Colliding;
    if state.cursor_inside {
        return Ok(());
    }
    state.cursor_inside = true;

    let hit = triangle_point_collision(&state.triangle, cursor, Vec2::ZERO)?;
    log::debug!("Tick {}: cursor entered at edge {}", state.time_ticks, hit.edge);
    state.events.push(SimEvent::TriangleHit {
        contact: Contact::Cursor,
        edge: hit.edge,
        incidence: hit.incidence,
        reflection: hit.reflection,
    });
    mirror_spin(state);
    Ok(())
}

/// Mirror the per-tick rotation, reversing the spin direction.
///
/// At most once per tick, so a ball and cursor touching together do not cancel out.
fn mirror_spin(state: &mut SimState) {
    let already = state
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::SpinReversed { .. }));
    if already {
        return;
    }

    let tri = &mut state.triangle;
    tri.rot_angle_change = find_angle_of_refraction(tri.rot_angle_change);
    state.events.push(SimEvent::SpinReversed {
        rot_angle_change: tri.rot_angle_change,
    });
}
