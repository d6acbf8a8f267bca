//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::Point;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    #[inline]
    pub fn at(point: Point, color: [f32; 4]) -> Self {
        Self::new(point.x, point.y, color)
    }

    pub fn point(&self) -> Point {
        Point::from_array(self.position)
    }
}

/// Colors for scene elements
pub mod colors {
    pub const TRIANGLE: [f32; 4] = [0.2, 0.8, 0.4, 1.0];
    pub const TRIANGLE_HIT: [f32; 4] = [1.0, 0.4, 0.2, 1.0];
    pub const OUTLINE: [f32; 4] = [0.9, 0.9, 0.95, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
