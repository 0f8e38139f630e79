//! Shared configuration for Grisaille
//!
//! This crate provides the single source of truth for canvas dimensions,
//! brush settings, and history depth shared between the drawing session
//! and any embedding front-end.

use serde::{Deserialize, Serialize};

/// Maximum width of the interactive display canvas in logical pixels.
/// Wider containers are clamped down to this before the canvas is sized.
pub const MAX_DISPLAY_WIDTH: u32 = 800;

/// Default output (mask) resolution in pixels. Square.
pub const DEFAULT_OUTPUT_WIDTH: u32 = 1024;

/// Default brush width in display pixels.
pub const DEFAULT_BRUSH_WIDTH: f32 = 20.0;

/// Minimum brush width offered to the user.
pub const MIN_BRUSH_WIDTH: f32 = 5.0;

/// Maximum brush width offered to the user.
pub const MAX_BRUSH_WIDTH: f32 = 50.0;

/// Default number of image versions kept for undo.
pub const DEFAULT_HISTORY_DEPTH: usize = 10;

/// Brush width range presented by the UI slider
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BrushRange {
    /// Smallest selectable width in display pixels
    pub min: f32,
    /// Largest selectable width in display pixels
    pub max: f32,
    /// Width used before the user touches the slider
    pub default: f32,
}

impl Default for BrushRange {
    fn default() -> Self {
        Self {
            min: MIN_BRUSH_WIDTH,
            max: MAX_BRUSH_WIDTH,
            default: DEFAULT_BRUSH_WIDTH,
        }
    }
}

impl BrushRange {
    /// Clamp a requested width into the selectable range
    pub fn clamp(&self, width: f32) -> f32 {
        width.clamp(self.min, self.max)
    }
}

/// Canvas configuration for a drawing session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Display canvas width in logical pixels (square canvas)
    pub display_width: u32,
    /// Output mask width in pixels (square mask)
    pub output_width: u32,
    /// Brush width range in display pixels
    pub brush: BrushRange,
    /// Maximum number of image versions kept for undo
    pub max_history: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            display_width: MAX_DISPLAY_WIDTH,
            output_width: DEFAULT_OUTPUT_WIDTH,
            brush: BrushRange::default(),
            max_history: DEFAULT_HISTORY_DEPTH,
        }
    }
}

impl CanvasConfig {
    /// Create a config for a container of the given width
    ///
    /// The display canvas fills the container up to [`MAX_DISPLAY_WIDTH`].
    pub fn for_container(container_width: u32) -> Self {
        Self {
            display_width: container_width.min(MAX_DISPLAY_WIDTH),
            ..Self::default()
        }
    }

    /// Get display width as f32 for calculations
    pub fn display_width_f32(&self) -> f32 {
        self.display_width as f32
    }

    /// Get output width as f32 for calculations
    pub fn output_width_f32(&self) -> f32 {
        self.output_width as f32
    }
}
