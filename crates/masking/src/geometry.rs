//! Path flattening helpers

use glam::Vec2;

use crate::constants::MAX_FLATTEN_DEPTH;
use crate::types::{PathSegment, SelectionPath};

/// Flatten a quadratic Bezier into line segments
///
/// Recursive midpoint subdivision. The start point is assumed to already
/// be in `points`; only subsequent points are appended.
pub fn flatten_quadratic(
    points: &mut Vec<Vec2>,
    p0: Vec2,
    ctrl: Vec2,
    p1: Vec2,
    tolerance: f32,
    depth: u32,
) {
    // Max deviation of the curve from its chord is |p0 - 2c + p1| / 4
    let dev = p0 - 2.0 * ctrl + p1;
    let tol4 = 4.0 * tolerance;
    if dev.length_squared() <= tol4 * tol4 || depth > MAX_FLATTEN_DEPTH {
        points.push(p1);
        return;
    }
    let q0 = 0.5 * (p0 + ctrl);
    let q1 = 0.5 * (ctrl + p1);
    let mid = 0.5 * (q0 + q1);
    flatten_quadratic(points, p0, q0, mid, tolerance, depth + 1);
    flatten_quadratic(points, mid, q1, p1, tolerance, depth + 1);
}

/// Flatten a path into a polyline
///
/// The path must already be validated (leading `MoveTo`); quadratic
/// segments are subdivided to the given tolerance.
pub fn flatten_path(path: &SelectionPath, tolerance: f32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(path.segments.len() + 1);
    for segment in &path.segments {
        match segment {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => points.push(*p),
            PathSegment::QuadTo { ctrl, to } => {
                let Some(&last) = points.last() else {
                    // Curve with no current point: degenerate, start at its end
                    points.push(*to);
                    continue;
                };
                flatten_quadratic(&mut points, last, *ctrl, *to, tolerance, 0);
            }
        }
    }
    points
}
