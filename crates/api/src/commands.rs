//! Editing command types.

use serde::{Deserialize, Serialize};

use crate::modes::EditMode;

/// Commands an embedding front-end drives the editing session with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EditCommand {
    /// Switch the active edit mode tab
    SetMode { mode: EditMode },
    /// Set brush width in display pixels
    SetBrushWidth { width: f32 },
    /// Start or finish a lasso selection
    ToggleDrawing,
    /// Discard the current selection
    ClearSelection,
    /// Restore the previous image version
    Undo,
    /// Submit the current edit
    Apply,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_round_trip() {
        let command = EditCommand::SetMode {
            mode: EditMode::Reimagine,
        };
        let json = serde_json::to_string(&command).unwrap();
        let parsed: EditCommand = serde_json::from_str(&json).unwrap();
        match parsed {
            EditCommand::SetMode { mode } => assert_eq!(mode, EditMode::Reimagine),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
