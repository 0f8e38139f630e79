//! Display-to-output coordinate mapping
//!
//! The user draws on a down-scaled square canvas (display space); the
//! mask is rasterized at the resolution the generation service expects
//! (output space). The two frames differ by a uniform scale factor.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::types::{PathSegment, SelectionMode, SelectionPath};
use config::CanvasConfig;

/// Uniform mapping between the display canvas and the output mask
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasMapping {
    /// Display canvas width in logical pixels
    pub display_width: f32,
    /// Output mask width in pixels
    pub output_width: f32,
}

impl CanvasMapping {
    /// Create a mapping between the given widths
    ///
    /// Both widths must be positive.
    pub fn new(display_width: f32, output_width: f32) -> Self {
        debug_assert!(display_width > 0.0 && output_width > 0.0);
        Self {
            display_width,
            output_width,
        }
    }

    /// Create a mapping from a canvas configuration
    pub fn from_config(config: &CanvasConfig) -> Self {
        Self::new(config.display_width_f32(), config.output_width_f32())
    }

    /// Scale factor from display space to output space
    pub fn scale_factor(&self) -> f32 {
        self.output_width / self.display_width
    }

    /// Map a display-space point into output space
    pub fn to_output(&self, point: Vec2) -> Vec2 {
        point * self.scale_factor()
    }

    /// Scale a display-space width (e.g. a brush width) into output space
    pub fn scale_width(&self, width: f32) -> f32 {
        width * self.scale_factor()
    }

    /// Map a whole path into output space
    ///
    /// Both the segment points and a brush path's stroke width are scaled
    /// by the same factor.
    pub fn transform_path(&self, path: &SelectionPath) -> SelectionPath {
        let mode = match path.mode {
            SelectionMode::Lasso => SelectionMode::Lasso,
            SelectionMode::Brush { width } => SelectionMode::Brush {
                width: self.scale_width(width),
            },
        };
        let segments = path
            .segments
            .iter()
            .map(|segment| match segment {
                PathSegment::MoveTo(p) => PathSegment::MoveTo(self.to_output(*p)),
                PathSegment::LineTo(p) => PathSegment::LineTo(self.to_output(*p)),
                PathSegment::QuadTo { ctrl, to } => PathSegment::QuadTo {
                    ctrl: self.to_output(*ctrl),
                    to: self.to_output(*to),
                },
            })
            .collect();
        SelectionPath { mode, segments }
    }
}
