//! Drawing session - pointer input state machine and selection ownership
//!
//! The session owns all drawing state explicitly: the completed paths,
//! the in-progress path, and the {Idle, Drawing} pointer state. It
//! consumes a stream of pointer events and is independent of any UI
//! toolkit; the embedding front-end forwards its own mouse/touch events
//! as [`PointerEvent`]s.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::raster::rasterize;
use crate::space::CanvasMapping;
use crate::surface::MaskSurface;
use crate::types::{PathSegment, SelectionMode, SelectionPath};
use config::CanvasConfig;

/// Pointer input events, in display coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
}

/// Pointer state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingState {
    #[default]
    Idle,
    Drawing,
}

/// A drawing session over one image
///
/// Owned by the caller and passed by reference to the rasterizer at
/// submission time. The path list handed out by [`DrawingSession::paths`]
/// covers completed paths only; the caller freezes the session for the
/// duration of a rasterization.
pub struct DrawingSession {
    config: CanvasConfig,
    mode: SelectionMode,
    state: DrawingState,
    paths: Vec<SelectionPath>,
    current: Option<SelectionPath>,
}

impl DrawingSession {
    /// Create a session drawing lasso selections
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            mode: SelectionMode::Lasso,
            state: DrawingState::Idle,
            paths: Vec::new(),
            current: None,
        }
    }

    /// Create a session with an explicit selection mode
    pub fn with_mode(config: CanvasConfig, mode: SelectionMode) -> Self {
        let mut session = Self::new(config);
        session.set_mode(mode);
        session
    }

    /// Get the selection mode used for new paths
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Set the selection mode for subsequent paths
    ///
    /// Brush widths are clamped into the configured range. Paths already
    /// drawn keep the mode they were drawn with.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = match mode {
            SelectionMode::Lasso => SelectionMode::Lasso,
            SelectionMode::Brush { width } => SelectionMode::Brush {
                width: self.config.brush.clamp(width),
            },
        };
    }

    /// Set the brush width for subsequent brush paths
    ///
    /// Has no effect while the session is in lasso mode.
    pub fn set_brush_width(&mut self, width: f32) {
        if let SelectionMode::Brush { .. } = self.mode {
            self.mode = SelectionMode::Brush {
                width: self.config.brush.clamp(width),
            };
        }
    }

    /// Current pointer state
    pub fn state(&self) -> DrawingState {
        self.state
    }

    /// True while a path is being drawn
    pub fn is_drawing(&self) -> bool {
        self.state == DrawingState::Drawing
    }

    /// Feed one pointer event through the state machine
    ///
    /// Down in Idle starts a path; Move while Drawing extends it; Up
    /// completes it. Anything else is ignored.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match (self.state, event) {
            (DrawingState::Idle, PointerEvent::Down { x, y }) => {
                let mut path = SelectionPath::new(self.mode);
                path.push(PathSegment::MoveTo(Vec2::new(x, y)));
                self.current = Some(path);
                self.state = DrawingState::Drawing;
            }
            (DrawingState::Drawing, PointerEvent::Move { x, y }) => {
                if let Some(path) = self.current.as_mut() {
                    path.push(PathSegment::LineTo(Vec2::new(x, y)));
                }
            }
            (DrawingState::Drawing, PointerEvent::Up) => {
                self.complete_current();
            }
            (state, event) => {
                debug!("DrawingSession: ignoring {:?} in state {:?}", event, state);
            }
        }
    }

    /// Explicitly end an in-progress path
    ///
    /// Equivalent to a pointer-up; used by the "finish selection" control.
    pub fn finish_selection(&mut self) {
        if self.state == DrawingState::Drawing {
            self.complete_current();
        }
    }

    fn complete_current(&mut self) {
        if let Some(path) = self.current.take() {
            if !path.is_empty() {
                debug!(
                    "DrawingSession: completed path with {} segments",
                    path.len()
                );
                self.paths.push(path);
            }
        }
        self.state = DrawingState::Idle;
    }

    /// Discard all paths and reset to Idle
    pub fn clear(&mut self) {
        self.paths.clear();
        self.current = None;
        self.state = DrawingState::Idle;
    }

    /// Completed paths, in drawing order
    pub fn paths(&self) -> &[SelectionPath] {
        &self.paths
    }

    /// Number of completed paths
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// True if at least one path has been completed
    pub fn has_selection(&self) -> bool {
        !self.paths.is_empty()
    }

    /// Display-to-output mapping for this session's canvas
    pub fn mapping(&self) -> CanvasMapping {
        CanvasMapping::from_config(&self.config)
    }

    /// Rasterize the completed paths into a binary mask
    ///
    /// An in-progress path is not included; call
    /// [`DrawingSession::finish_selection`] first to keep it.
    pub fn rasterize_mask(&self) -> MaskSurface {
        rasterize(&self.paths, self.mapping())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> DrawingSession {
        DrawingSession::new(CanvasConfig::default())
    }

    #[test]
    fn test_down_move_up_completes_one_path() {
        let mut session = session();
        session.handle_event(PointerEvent::Down { x: 10.0, y: 10.0 });
        assert!(session.is_drawing());
        session.handle_event(PointerEvent::Move { x: 20.0, y: 10.0 });
        session.handle_event(PointerEvent::Move { x: 20.0, y: 20.0 });
        session.handle_event(PointerEvent::Up);

        assert!(!session.is_drawing());
        assert_eq!(session.path_count(), 1);
        assert_eq!(session.paths()[0].len(), 3);
        assert!(session.has_selection());
    }

    #[test]
    fn test_stray_events_are_ignored() {
        let mut session = session();
        session.handle_event(PointerEvent::Move { x: 5.0, y: 5.0 });
        session.handle_event(PointerEvent::Up);
        assert_eq!(session.state(), DrawingState::Idle);
        assert_eq!(session.path_count(), 0);

        // A second Down while drawing is ignored too
        session.handle_event(PointerEvent::Down { x: 1.0, y: 1.0 });
        session.handle_event(PointerEvent::Down { x: 9.0, y: 9.0 });
        session.handle_event(PointerEvent::Up);
        assert_eq!(session.path_count(), 1);
        assert_eq!(
            session.paths()[0].segments[0],
            PathSegment::MoveTo(Vec2::new(1.0, 1.0))
        );
    }

    #[test]
    fn test_finish_selection_ends_in_progress_path() {
        let mut session = session();
        session.handle_event(PointerEvent::Down { x: 1.0, y: 1.0 });
        session.handle_event(PointerEvent::Move { x: 2.0, y: 2.0 });
        session.finish_selection();
        assert_eq!(session.path_count(), 1);
        assert!(!session.is_drawing());

        // Idempotent when already idle
        session.finish_selection();
        assert_eq!(session.path_count(), 1);
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut session = session();
        session.handle_event(PointerEvent::Down { x: 1.0, y: 1.0 });
        session.handle_event(PointerEvent::Up);
        session.handle_event(PointerEvent::Down { x: 3.0, y: 3.0 });
        session.clear();

        assert_eq!(session.path_count(), 0);
        assert!(!session.has_selection());
        assert_eq!(session.state(), DrawingState::Idle);
    }

    #[test]
    fn test_brush_width_is_clamped_to_config() {
        let mut session =
            DrawingSession::with_mode(CanvasConfig::default(), SelectionMode::Brush { width: 20.0 });
        session.set_brush_width(500.0);
        assert_eq!(session.mode(), SelectionMode::Brush { width: 50.0 });
        session.set_brush_width(0.5);
        assert_eq!(session.mode(), SelectionMode::Brush { width: 5.0 });
    }

    #[test]
    fn test_mode_change_does_not_rewrite_existing_paths() {
        let mut session = session();
        session.handle_event(PointerEvent::Down { x: 1.0, y: 1.0 });
        session.handle_event(PointerEvent::Up);
        session.set_mode(SelectionMode::Brush { width: 20.0 });

        assert_eq!(session.paths()[0].mode, SelectionMode::Lasso);
    }

    #[test]
    fn test_rasterize_mask_uses_completed_paths_only() {
        let mut session = session();
        // Completed square selection
        session.handle_event(PointerEvent::Down { x: 100.0, y: 100.0 });
        session.handle_event(PointerEvent::Move { x: 200.0, y: 100.0 });
        session.handle_event(PointerEvent::Move { x: 200.0, y: 200.0 });
        session.handle_event(PointerEvent::Move { x: 100.0, y: 200.0 });
        session.handle_event(PointerEvent::Up);
        // In-progress path elsewhere
        session.handle_event(PointerEvent::Down { x: 600.0, y: 600.0 });
        session.handle_event(PointerEvent::Move { x: 700.0, y: 600.0 });

        let mask = session.rasterize_mask();
        assert!(mask.is_binary());
        assert_eq!(mask.get_pixel(192, 192), Some([255, 255, 255, 255]));
        // The unfinished path contributed nothing
        assert_eq!(mask.get_pixel(800, 768), Some([0, 0, 0, 255]));
    }
}
