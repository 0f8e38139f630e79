use crate::types::{PathSegment, SelectionMode, SelectionPath};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("Path has no segments")]
    Empty,
    #[error("Path must begin with a MoveTo segment")]
    MissingLeadingMove,
    #[error("Brush width must be positive, got {0}")]
    InvalidBrushWidth(f32),
}

/// Validate a selection path before rasterization
///
/// An invalid path contributes nothing to the mask; the rasterizer skips
/// it without aborting sibling paths.
pub fn validate_path(path: &SelectionPath) -> Result<(), PathError> {
    let Some(first) = path.segments.first() else {
        return Err(PathError::Empty);
    };
    if !matches!(first, PathSegment::MoveTo(_)) {
        return Err(PathError::MissingLeadingMove);
    }
    if let SelectionMode::Brush { width } = path.mode {
        if !(width > 0.0) {
            return Err(PathError::InvalidBrushWidth(width));
        }
    }
    Ok(())
}
