//! Draw boundary between the simulation and the platform
//!
//! The core never owns a render surface. It turns the current state into a
//! triangle list and hands it to whatever implements `DrawTarget`.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use crate::error::Result;
use crate::sim::{ContactPhase, SimState, Triangle};

/// Outline width around the triangle
const OUTLINE_THICKNESS: f32 = 2.0;
/// Segments used for the ball disc
const BALL_SEGMENTS: u32 = 16;

/// Receiver for a frame's vertices, implemented by the platform harness
pub trait DrawTarget {
    /// Take a triangle list for this frame
    fn submit(&mut self, vertices: &[Vertex]);
}

/// In-memory draw target. Keeps the vertices of the most recent frame.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub vertices: Vec<Vertex>,
    pub frames: u64,
}

impl FrameRecorder {
    /// Start a new frame, dropping the previous one
    pub fn begin_frame(&mut self) {
        self.vertices.clear();
        self.frames += 1;
    }

    /// Raw bytes ready for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl DrawTarget for FrameRecorder {
    fn submit(&mut self, vertices: &[Vertex]) {
        self.vertices.extend_from_slice(vertices);
    }
}

/// Pass the triangle's current vertices to the draw target
pub fn draw_triangle(tri: &Triangle, target: &mut impl DrawTarget) -> Result<()> {
    draw_triangle_colored(tri, colors::TRIANGLE, target)
}

fn draw_triangle_colored(
    tri: &Triangle,
    color: [f32; 4],
    target: &mut impl DrawTarget,
) -> Result<()> {
    tri.validate()?;
    let points = tri.vertices();
    target.submit(&shapes::filled_triangle(points, color));
    target.submit(&shapes::outline(&points, OUTLINE_THICKNESS, colors::OUTLINE));
    Ok(())
}

/// Draw a whole frame. Call only after `tick` has returned for this tick.
///
/// Invalid geometry submits nothing; the caller should skip presenting the frame.
pub fn draw_frame(state: &SimState, target: &mut impl DrawTarget) -> Result<()> {
    if let Err(err) = state.triangle.validate() {
        log::warn!("Skipping draw at tick {}: {}", state.time_ticks, err);
        return Err(err);
    }

    let color = match state.phase {
        ContactPhase::Idle => colors::TRIANGLE,
        ContactPhase::Colliding => colors::TRIANGLE_HIT,
    };
    draw_triangle_colored(&state.triangle, color, target)?;

    let ball = &state.ball;
    target.submit(&shapes::circle(ball.pos, ball.radius, colors::BALL, BALL_SEGMENTS));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_draw_triangle_submits_current_vertices() {
        let tri = Triangle::new(1100.0, 800.0).unwrap();
        let mut recorder = FrameRecorder::default();
        draw_triangle(&tri, &mut recorder).unwrap();

        // Fill first, then one quad per edge
        assert_eq!(recorder.vertices.len(), 3 + 18);
        for (v, p) in recorder.vertices.iter().zip(tri.vertices()) {
            assert_eq!(v.point(), p);
        }
        assert_eq!(recorder.as_bytes().len(), 21 * std::mem::size_of::<Vertex>());
    }

    #[test]
    fn test_draw_after_tick_sees_new_rotation() {
        let mut state = SimState::new(Settings::default()).unwrap();
        let mut recorder = FrameRecorder::default();

        let dt = state.settings.tick_dt();
        tick(&mut state, &TickInput::default(), dt).unwrap();
        recorder.begin_frame();
        draw_frame(&state, &mut recorder).unwrap();

        assert_eq!(recorder.frames, 1);
        assert_eq!(recorder.vertices[0].point(), state.triangle.vertices()[0]);
        assert_eq!(recorder.vertices.len(), 21 + 3 * BALL_SEGMENTS as usize);
    }

    #[test]
    fn test_invalid_geometry_skips_draw() {
        let mut state = SimState::new(Settings::default()).unwrap();
        state.triangle.centre.x = f32::NAN;
        let mut recorder = FrameRecorder::default();

        assert!(draw_frame(&state, &mut recorder).is_err());
        assert!(recorder.vertices.is_empty());
    }
}
