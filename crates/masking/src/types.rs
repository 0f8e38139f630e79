use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Selection style for a path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Closed outline whose interior is filled
    Lasso,
    /// Free-hand stroke with round caps and joins
    Brush {
        /// Stroke width in display pixels
        width: f32,
    },
}

/// A single segment of a selection path
///
/// Segment kinds are exhaustive; there is no catch-all variant. Malformed
/// path *shape* (empty, or not beginning with `MoveTo`) is reported by
/// [`crate::validation::validate_path`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    /// Start the path at the given point
    MoveTo(Vec2),
    /// Straight line to the given point
    LineTo(Vec2),
    /// Quadratic curve to `to` with control point `ctrl`
    QuadTo { ctrl: Vec2, to: Vec2 },
}

impl PathSegment {
    /// The point the segment ends at
    pub fn end_point(&self) -> Vec2 {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) => *p,
            Self::QuadTo { to, .. } => *to,
        }
    }
}

/// A user-drawn selection path in display coordinates
///
/// Segments are kept in temporal drawing order. A path is a single
/// subpath: it begins with one `MoveTo` and continues with line and
/// curve segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionPath {
    /// How the path contributes to the mask
    pub mode: SelectionMode,
    /// Segments in drawing order
    pub segments: Vec<PathSegment>,
}

impl SelectionPath {
    /// Create an empty path with the given mode
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            segments: Vec::new(),
        }
    }

    /// Create a path from a point list (one `MoveTo` followed by `LineTo`s)
    pub fn from_points(mode: SelectionMode, points: &[Vec2]) -> Self {
        let mut path = Self::new(mode);
        for (i, point) in points.iter().enumerate() {
            if i == 0 {
                path.segments.push(PathSegment::MoveTo(*point));
            } else {
                path.segments.push(PathSegment::LineTo(*point));
            }
        }
        path
    }

    /// Append a segment
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True if the path has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
