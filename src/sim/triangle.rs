//! Equilateral triangle inscribed in a circle
//!
//! The triangle stores only its centre, circumradius and rotation. Vertices,
//! edges and area are derived on demand so they can never go stale.

use serde::{Deserialize, Serialize};

use super::geometry::{rotate_line, segment_length, signed_distance_to_line};
use crate::consts::*;
use crate::error::{Error, GeometryError, Result};
use crate::settings::Settings;
use crate::{Line, Point, normalize_degrees};

/// A rotating equilateral triangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TriangleFields")]
pub struct Triangle {
    /// Point the vertices rotate about
    pub centre: Point,
    /// Distance from centre to each vertex (always > 0)
    radius: f32,
    /// Current rotation offset (degrees, [0, 360))
    pub rot_angle: f32,
    /// Rotation applied per tick (degrees, signed)
    pub rot_angle_change: f32,
}

impl Triangle {
    /// Create a triangle centred on a display of the given size
    pub fn new(display_width: f32, display_height: f32) -> Result<Self> {
        validate_display(display_width, display_height)?;
        let centre = Point::new(display_width / 2.0, display_height / 2.0);
        Self::with_params(centre, TRIANGLE_RADIUS, ROT_ANGLE_CHANGE)
    }

    /// Create a triangle with explicit centre, radius and per-tick rotation
    pub fn with_params(centre: Point, radius: f32, rot_angle_change: f32) -> Result<Self> {
        if !centre.is_finite() {
            return Err(GeometryError::NonFinite("centre").into());
        }
        if !rot_angle_change.is_finite() {
            return Err(GeometryError::NonFinite("rot_angle_change").into());
        }

        let tri = Self {
            centre,
            radius,
            rot_angle: 0.0,
            rot_angle_change,
        };
        tri.check_shape()?;

        log::debug!(
            "Triangle at ({}, {}) radius {} spinning {}°/tick",
            centre.x,
            centre.y,
            radius,
            rot_angle_change
        );
        Ok(tri)
    }

    /// Create a triangle from loaded settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        validate_display(settings.display_width, settings.display_height)?;
        let centre = Point::new(settings.display_width / 2.0, settings.display_height / 2.0);
        Self::with_params(centre, settings.triangle_radius, settings.rot_angle_change)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Advance rotation by one tick
    pub fn advance(&mut self) {
        self.rot_angle = normalize_degrees(self.rot_angle + self.rot_angle_change);
    }

    /// The three vertices, counter-clockwise, starting at `rot_angle`
    pub fn vertices(&self) -> [Point; VERTEX_COUNT] {
        std::array::from_fn(|k| {
            rotate_line(
                self.centre.x,
                self.centre.y,
                self.radius,
                self.rot_angle + k as f32 * VERTEX_SPACING,
            )
        })
    }

    /// Edges as consecutive vertex pairs, wrapping from the last to the first
    pub fn edges(&self) -> [Line; VERTEX_COUNT] {
        let v = self.vertices();
        std::array::from_fn(|k| [v[k], v[(k + 1) % VERTEX_COUNT]])
    }

    /// Area in square units, rounded to the nearest integer
    pub fn area(&self) -> i32 {
        let [a, b, c] = self.vertices();
        ((b - a).perp_dot(c - a).abs() * 0.5).round() as i32
    }

    /// True when `point` is inside the triangle or on its boundary.
    ///
    /// Points up to `BOUNDARY_TOLERANCE` outside an edge count as on it, so
    /// rounding in the derived vertices cannot drop boundary points.
    pub fn collides_with_point(&self, point: Point) -> bool {
        self.edges()
            .iter()
            .all(|edge| signed_distance_to_line(edge, point) >= -BOUNDARY_TOLERANCE)
    }

    /// Index of the vertex closest to `pos`. Ties go to the lower index.
    pub fn nearest_vertex_index(&self, pos: Point) -> usize {
        let vertices = self.vertices();
        let mut best = 0;
        let mut best_dist = pos.distance(vertices[0]);
        for (i, v) in vertices.iter().enumerate().skip(1) {
            let dist = pos.distance(*v);
            if dist < best_dist - TIE_EPSILON {
                best = i;
                best_dist = dist;
            }
        }
        best
    }

    /// The vertex closest to `pos`
    pub fn nearest_vertex(&self, pos: Point) -> Point {
        self.vertices()[self.nearest_vertex_index(pos)]
    }

    /// Check that the derived geometry is usable for collision and drawing
    pub fn validate(&self) -> Result<()> {
        if !self.centre.is_finite() || !self.rot_angle.is_finite() {
            return Err(GeometryError::NonFinite("triangle").into());
        }
        self.check_shape()
    }

    /// The radius must be large enough for three distinct vertices at this centre
    fn check_shape(&self) -> Result<()> {
        let radius = self.radius;
        let min_radius = self.centre.abs().max_element().max(1.0) * MIN_RELATIVE_RADIUS;
        if !radius.is_finite() || radius < min_radius {
            return Err(GeometryError::InvalidRadius { radius }.into());
        }
        for edge in self.edges() {
            segment_length(&edge).map_err(|_| GeometryError::InvalidRadius { radius })?;
        }
        Ok(())
    }
}

/// Serialized form of a `Triangle`, checked before it becomes one
#[derive(Deserialize)]
struct TriangleFields {
    centre: Point,
    radius: f32,
    rot_angle: f32,
    rot_angle_change: f32,
}

impl TryFrom<TriangleFields> for Triangle {
    type Error = Error;

    fn try_from(fields: TriangleFields) -> Result<Self> {
        let mut tri = Self::with_params(fields.centre, fields.radius, fields.rot_angle_change)?;
        tri.rot_angle = fields.rot_angle;
        tri.validate()?;
        tri.rot_angle = normalize_degrees(tri.rot_angle);
        Ok(tri)
    }
}

fn validate_display(width: f32, height: f32) -> Result<()> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(GeometryError::InvalidDimensions { width, height }.into());
    }
    Ok(())
}
