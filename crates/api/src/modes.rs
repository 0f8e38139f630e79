//! Edit modes and image styles.

use serde::{Deserialize, Serialize};

/// Editing operations the generation service supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Regenerate the selected regions from a prompt
    Inpaint,
    /// Remove the selected regions, filling from their surroundings
    Cleanup,
    /// Replace the background behind the subject
    #[serde(rename = "replacebg")]
    ReplaceBackground,
    /// Regenerate the whole image
    Reimagine,
}

impl EditMode {
    /// True for modes that need a prompt
    pub fn requires_prompt(&self) -> bool {
        matches!(self, Self::Inpaint | Self::ReplaceBackground)
    }

    /// True for modes that need a selection mask
    pub fn requires_mask(&self) -> bool {
        matches!(self, Self::Inpaint | Self::Cleanup)
    }

    /// Button label shown for the mode
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inpaint => "Add changes",
            Self::Cleanup => "Remove parts",
            Self::ReplaceBackground => "Change background",
            Self::Reimagine => "Reimagine image",
        }
    }
}

/// Visual style requested from the generation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageStyle {
    #[default]
    RealisticImage,
    DigitalIllustration,
    VectorIllustration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_wire_names() {
        assert_eq!(
            serde_json::to_string(&EditMode::Inpaint).unwrap(),
            "\"inpaint\""
        );
        assert_eq!(
            serde_json::to_string(&EditMode::ReplaceBackground).unwrap(),
            "\"replacebg\""
        );
        let parsed: EditMode = serde_json::from_str("\"cleanup\"").unwrap();
        assert_eq!(parsed, EditMode::Cleanup);
    }

    #[test]
    fn test_style_wire_names() {
        assert_eq!(
            serde_json::to_string(&ImageStyle::RealisticImage).unwrap(),
            "\"realistic_image\""
        );
    }

    #[test]
    fn test_mode_requirements() {
        assert!(EditMode::Inpaint.requires_prompt());
        assert!(EditMode::Inpaint.requires_mask());
        assert!(EditMode::Cleanup.requires_mask());
        assert!(!EditMode::Cleanup.requires_prompt());
        assert!(EditMode::ReplaceBackground.requires_prompt());
        assert!(!EditMode::ReplaceBackground.requires_mask());
        assert!(!EditMode::Reimagine.requires_prompt());
        assert!(!EditMode::Reimagine.requires_mask());
    }
}
