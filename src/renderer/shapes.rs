//! Shape generation for 2D primitives
//!
//! Every shape comes out as a triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::Point;

/// Generate vertices for a solid triangle
pub fn filled_triangle(points: [Point; 3], color: [f32; 4]) -> Vec<Vertex> {
    points.iter().map(|p| Vertex::at(*p, color)).collect()
}

/// Generate vertices for a closed outline through `points`, one quad per edge
pub fn outline(points: &[Point], thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(points.len() * 6);
    let half = thickness * 0.5;

    for (i, p1) in points.iter().enumerate() {
        let p2 = points[(i + 1) % points.len()];

        let dir = (p2 - *p1).normalize_or_zero();
        // Perpendicular for width
        let perp = Vec2::new(-dir.y, dir.x) * half;

        let a1 = *p1 + perp;
        let b1 = *p1 - perp;
        let a2 = p2 + perp;
        let b2 = p2 - perp;

        // Two triangles
        vertices.push(Vertex::at(a1, color));
        vertices.push(Vertex::at(b1, color));
        vertices.push(Vertex::at(a2, color));

        vertices.push(Vertex::at(a2, color));
        vertices.push(Vertex::at(b1, color));
        vertices.push(Vertex::at(b2, color));
    }

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(center + Vec2::from_angle(theta1) * radius, color));
        vertices.push(Vertex::at(center + Vec2::from_angle(theta2) * radius, color));
    }

    vertices
}
