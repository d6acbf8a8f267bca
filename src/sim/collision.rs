//! Collision detection and response for the triangle and display walls
//!
//! The tracked object is a point. Contact with the triangle is reported
//! against the edge the point is closest to, which is the edge it most
//! likely crossed to get inside.

use glam::Vec2;

use super::geometry::{
    closest_point_on_segment, find_normal, rotate_line, signed_angle_between_lines,
};
use super::triangle::Triangle;
use crate::error::Result;
use crate::{Point, heading_degrees, normalize_signed_degrees};

/// Velocities slower than this have no meaningful heading
const MIN_SPEED: f32 = 1e-4;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Index of the edge that was hit (triangle edges only)
    pub edge: usize,
    /// Closest point on the surface
    pub point: Point,
    /// Unit surface normal, pointing away from the surface
    pub normal: Vec2,
    /// Distance the point has travelled past the surface
    pub penetration: f32,
    /// Signed angle between the normal and the reversed incoming direction (degrees)
    pub incidence: f32,
    /// Mirrored outgoing angle relative to the normal (degrees)
    pub reflection: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            edge: 0,
            point: Point::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
            incidence: 0.0,
            reflection: 0.0,
        }
    }

    /// Velocity leaving the surface at the reflection angle, same speed as `vel`
    pub fn outgoing_velocity(&self, vel: Vec2) -> Vec2 {
        rotate_line(
            0.0,
            0.0,
            vel.length(),
            heading_degrees(self.normal) + self.reflection,
        )
    }

    /// True when `vel` is heading into the surface rather than away from it
    pub fn is_approaching(&self, vel: Vec2) -> bool {
        vel.dot(self.normal) < 0.0
    }
}

/// Outgoing angle for an incoming angle, both measured from the surface normal.
///
/// Angle of reflection equals angle of incidence, on the other side of the
/// normal.
#[inline]
pub fn find_angle_of_refraction(angle_of_incidence: f32) -> f32 {
    normalize_signed_degrees(-angle_of_incidence)
}

/// Signed incidence angle of `vel` against a unit `normal`
pub fn incidence_angle(normal: Vec2, vel: Vec2) -> Result<f32> {
    if vel.length() < MIN_SPEED {
        return Ok(0.0);
    }
    signed_angle_between_lines(&[[Point::ZERO, normal], [Point::ZERO, -vel]])
}

/// Check a moving point against the triangle
///
/// On a hit, the normal is the outward normal of the nearest edge and the
/// point can be pushed out along it by `penetration`.
pub fn triangle_point_collision(tri: &Triangle, pos: Point, vel: Vec2) -> Result<CollisionResult> {
    if !tri.collides_with_point(pos) {
        return Ok(CollisionResult::miss());
    }

    let edges = tri.edges();
    let mut edge = 0;
    let mut contact = closest_point_on_segment(&edges[0], pos);
    let mut depth = pos.distance(contact);
    for (i, line) in edges.iter().enumerate().skip(1) {
        let candidate = closest_point_on_segment(line, pos);
        let dist = pos.distance(candidate);
        if dist < depth {
            edge = i;
            contact = candidate;
            depth = dist;
        }
    }

    // Reversing a counter-clockwise edge puts its left-hand normal outside
    let [a, b] = edges[edge];
    let [base, tip] = find_normal(&[b, a])?;
    let normal = (tip - base).normalize();

    let incidence = incidence_angle(normal, vel)?;
    Ok(CollisionResult {
        hit: true,
        edge,
        point: contact,
        normal,
        penetration: depth,
        incidence,
        reflection: find_angle_of_refraction(incidence),
    })
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Check a ball against the display bounds
///
/// Returns the deepest wall contact, normal pointing back into the display.
pub fn ball_wall_collision(
    pos: Point,
    vel: Vec2,
    radius: f32,
    width: f32,
    height: f32,
) -> Result<CollisionResult> {
    let walls = [
        (pos.x - radius, Vec2::X, Point::new(0.0, pos.y)),
        (width - (pos.x + radius), Vec2::NEG_X, Point::new(width, pos.y)),
        (pos.y - radius, Vec2::Y, Point::new(pos.x, 0.0)),
        (height - (pos.y + radius), Vec2::NEG_Y, Point::new(pos.x, height)),
    ];

    let Some((gap, normal, point)) = walls
        .into_iter()
        .filter(|(gap, _, _)| *gap < 0.0)
        .min_by(|a, b| a.0.total_cmp(&b.0))
    else {
        return Ok(CollisionResult::miss());
    };

    let incidence = incidence_angle(normal, vel)?;
    Ok(CollisionResult {
        hit: true,
        edge: 0,
        point,
        normal,
        penetration: -gap,
        incidence,
        reflection: find_angle_of_refraction(incidence),
    })
}
