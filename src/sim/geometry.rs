//! Line and half-plane primitives
//!
//! All angles are in degrees. Positive angles turn counter-clockwise in a
//! y-up frame, so a point rotated by +90° from the x axis lands on +y.

use crate::consts::{DEG_TO_RAD, RAD_TO_DEG};
use crate::error::{GeometryError, Result};
use crate::{Line, Point, normalize_signed_degrees};

/// Segments shorter than this are treated as zero-length
pub const MIN_SEGMENT_LENGTH: f32 = 1e-6;

/// Move `length` units from `(start_x, start_y)` in direction `angle`
#[inline]
pub fn rotate_line(start_x: f32, start_y: f32, length: f32, angle: f32) -> Point {
    let theta = angle * DEG_TO_RAD;
    Point::new(start_x + length * theta.cos(), start_y + length * theta.sin())
}

/// Half-plane test against the directed line `(x1, y1) -> (x2, y2)`.
///
/// Returns true when the point is on the left of the line or exactly on it
/// (cross product `>= 0`). Counter-clockwise polygons have their interior on
/// the left of every edge.
#[inline]
pub fn is_point_inside_of_line(x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) -> bool {
    (x2 - x1) * (y - y1) - (y2 - y1) * (x - x1) >= 0.0
}

/// Signed distance from `p` to the infinite line through `line`.
///
/// Positive on the left of the directed line, the same side
/// `is_point_inside_of_line` accepts. NaN for a zero-length line.
#[inline]
pub fn signed_distance_to_line(line: &Line, p: Point) -> f32 {
    let [a, b] = *line;
    let ab = b - a;
    ab.perp_dot(p - a) / ab.length()
}

/// Length of a segment, failing on zero-length input
pub fn segment_length(line: &Line) -> Result<f32> {
    let len = (line[1] - line[0]).length();
    if !len.is_finite() {
        return Err(GeometryError::NonFinite("segment").into());
    }
    if len < MIN_SEGMENT_LENGTH {
        return Err(GeometryError::DegenerateSegment.into());
    }
    Ok(len)
}

/// Perpendicular of `line` anchored at its midpoint.
///
/// The returned segment has the same length as the input and its far end
/// lies on the left of the directed input line. Reverse the input to get the
/// right-hand normal.
pub fn find_normal(line: &Line) -> Result<Line> {
    segment_length(line)?;
    let [a, b] = *line;
    let mid = (a + b) * 0.5;
    let dir = b - a;
    Ok([mid, mid + dir.perp()])
}

/// Unsigned angle between two segments in degrees, in [0, 180]
pub fn find_angle_between_lines(lines: &[Line; 2]) -> Result<f32> {
    let len1 = segment_length(&lines[0])?;
    let len2 = segment_length(&lines[1])?;
    let v1 = lines[0][1] - lines[0][0];
    let v2 = lines[1][1] - lines[1][0];

    // Rounding can push the ratio just past ±1
    let cos = (v1.dot(v2) / (len1 * len2)).clamp(-1.0, 1.0);
    Ok(cos.acos() * RAD_TO_DEG)
}

/// Signed angle turning the first segment onto the second, in (-180, 180]
pub fn signed_angle_between_lines(lines: &[Line; 2]) -> Result<f32> {
    let unsigned = find_angle_between_lines(lines)?;
    let v1 = lines[0][1] - lines[0][0];
    let v2 = lines[1][1] - lines[1][0];
    let signed = if v1.perp_dot(v2) < 0.0 { -unsigned } else { unsigned };
    Ok(normalize_signed_degrees(signed))
}

/// Closest point to `p` on the segment
pub fn closest_point_on_segment(line: &Line, p: Point) -> Point {
    let [a, b] = *line;
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < MIN_SEGMENT_LENGTH * MIN_SEGMENT_LENGTH {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn close(a: Point, b: Point) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_rotate_line_zero_length_is_identity() {
        for angle in [0.0, 33.0, 90.0, 271.5, -45.0] {
            assert_eq!(rotate_line(3.0, -7.0, 0.0, angle), Point::new(3.0, -7.0));
        }
    }

    #[test]
    fn test_rotate_line_axes() {
        assert!(close(rotate_line(0.0, 0.0, 1.0, 0.0), Point::new(1.0, 0.0)));
        assert!(close(rotate_line(0.0, 0.0, 1.0, 90.0), Point::new(0.0, 1.0)));
        assert!(close(rotate_line(0.0, 0.0, 1.0, 180.0), Point::new(-1.0, 0.0)));
        assert!(close(rotate_line(10.0, 10.0, 5.0, 270.0), Point::new(10.0, 5.0)));
    }

    #[test]
    fn test_half_plane_sides() {
        // Line along +x: points above are on the left
        assert!(is_point_inside_of_line(0.0, 0.0, 10.0, 0.0, 5.0, 1.0));
        assert!(!is_point_inside_of_line(0.0, 0.0, 10.0, 0.0, 5.0, -1.0));
        // Reversing the line flips the side
        assert!(is_point_inside_of_line(10.0, 0.0, 0.0, 0.0, 5.0, -1.0));
    }

    #[test]
    fn test_half_plane_boundary_is_inside() {
        assert!(is_point_inside_of_line(0.0, 0.0, 10.0, 0.0, 5.0, 0.0));
        assert!(is_point_inside_of_line(0.0, 0.0, 10.0, 0.0, 20.0, 0.0));
    }

    #[test]
    fn test_find_normal() {
        let line = [Point::new(0.0, 0.0), Point::new(4.0, 0.0)];
        let normal = find_normal(&line).unwrap();
        assert!(close(normal[0], Point::new(2.0, 0.0)));
        assert!(close(normal[1], Point::new(2.0, 4.0)));

        let far = normal[1];
        assert!(is_point_inside_of_line(
            line[0].x, line[0].y, line[1].x, line[1].y, far.x, far.y
        ));

        let angle = find_angle_between_lines(&[line, normal]).unwrap();
        assert!((angle - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_find_normal_degenerate() {
        let p = Point::new(5.0, 5.0);
        assert!(matches!(
            find_normal(&[p, p]),
            Err(Error::Geometry(GeometryError::DegenerateSegment))
        ));
    }

    #[test]
    fn test_angle_between_lines() {
        let x = [Point::ZERO, Point::new(1.0, 0.0)];
        let diag = [Point::new(5.0, 5.0), Point::new(6.0, 6.0)];
        let back = [Point::ZERO, Point::new(-3.0, 0.0)];

        assert!((find_angle_between_lines(&[x, diag]).unwrap() - 45.0).abs() < 1e-3);
        assert!((find_angle_between_lines(&[x, back]).unwrap() - 180.0).abs() < 1e-3);
        assert!(find_angle_between_lines(&[x, x]).unwrap().abs() < 1e-2);
    }

    #[test]
    fn test_angle_between_lines_zero_length() {
        let x = [Point::ZERO, Point::new(1.0, 0.0)];
        let dot = [Point::new(2.0, 2.0), Point::new(2.0, 2.0)];
        assert!(matches!(
            find_angle_between_lines(&[x, dot]),
            Err(Error::Geometry(GeometryError::DegenerateSegment))
        ));
        assert!(find_angle_between_lines(&[dot, x]).is_err());
    }

    #[test]
    fn test_signed_angle() {
        let x = [Point::ZERO, Point::new(1.0, 0.0)];
        let up = [Point::ZERO, Point::new(0.0, 2.0)];
        let down = [Point::ZERO, Point::new(0.0, -2.0)];
        assert!((signed_angle_between_lines(&[x, up]).unwrap() - 90.0).abs() < 1e-3);
        assert!((signed_angle_between_lines(&[x, down]).unwrap() + 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_signed_distance_to_line() {
        let line = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        assert!((signed_distance_to_line(&line, Point::new(3.0, 2.5)) - 2.5).abs() < 1e-5);
        assert!((signed_distance_to_line(&line, Point::new(30.0, -4.0)) + 4.0).abs() < 1e-5);
        assert!(signed_distance_to_line(&[line[0], line[0]], Point::X).is_nan());
    }

    #[test]
    fn test_closest_point_on_segment() {
        let line = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let foot = closest_point_on_segment(&line, Point::new(3.0, 4.0));
        assert!(close(foot, Point::new(3.0, 0.0)));
        assert!(close(closest_point_on_segment(&line, Point::new(-5.0, 1.0)), line[0]));
        assert!(close(closest_point_on_segment(&line, Point::new(15.0, 1.0)), line[1]));
    }
}
