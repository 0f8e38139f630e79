//! Generation and edit requests.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::modes::{EditMode, ImageStyle};

/// Maximum prompt length in characters; longer prompts are truncated.
pub const MAX_PROMPT_LEN: usize = 1000;

/// Default output size requested from the service.
pub const DEFAULT_SIZE: &str = "1024x1024";

/// Request to generate a new image from a prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub style: ImageStyle,
    pub size: String,
    /// Number of images to generate
    pub n: u32,
}

impl GenerateRequest {
    /// Build a generation request
    ///
    /// The prompt is trimmed and truncated to [`MAX_PROMPT_LEN`]; an
    /// empty prompt is rejected.
    pub fn new(prompt: &str, style: ImageStyle) -> Result<Self, ApiError> {
        let prompt = normalize_prompt(prompt);
        if prompt.is_empty() {
            return Err(ApiError::InvalidRequest("No prompt provided".to_string()));
        }
        Ok(Self {
            prompt,
            style,
            size: DEFAULT_SIZE.to_string(),
            n: 1,
        })
    }
}

/// Request to edit an existing image
///
/// Which fields are required depends on the mode: inpaint needs a prompt
/// and a mask, cleanup a mask only, replace-background a prompt only,
/// reimagine neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRequest {
    pub mode: EditMode,
    pub style: ImageStyle,
    pub prompt: Option<String>,
    /// Encoded mask blob. Not part of the JSON body; the client ships it
    /// as a separate binary frame.
    #[serde(skip)]
    pub mask: Option<Vec<u8>>,
}

impl EditRequest {
    /// Build an edit request, enforcing the per-mode requirements
    pub fn new(
        mode: EditMode,
        style: ImageStyle,
        prompt: Option<&str>,
        mask: Option<Vec<u8>>,
    ) -> Result<Self, ApiError> {
        let prompt = prompt.map(normalize_prompt).filter(|p| !p.is_empty());

        if mode.requires_prompt() && prompt.is_none() {
            let message = match mode {
                EditMode::ReplaceBackground => "Please describe the new background",
                _ => "Please describe what should appear in selected areas",
            };
            return Err(ApiError::InvalidRequest(message.to_string()));
        }
        if mode.requires_mask() && mask.is_none() {
            return Err(ApiError::InvalidRequest(
                "Please make a selection first".to_string(),
            ));
        }

        Ok(Self {
            mode,
            style,
            prompt,
            mask,
        })
    }
}

/// Trim a prompt and truncate it to [`MAX_PROMPT_LEN`] characters
fn normalize_prompt(prompt: &str) -> String {
    prompt.trim().chars().take(MAX_PROMPT_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_rejects_empty_prompt() {
        assert!(GenerateRequest::new("   ", ImageStyle::default()).is_err());
        let request = GenerateRequest::new("a red fox", ImageStyle::default()).unwrap();
        assert_eq!(request.prompt, "a red fox");
        assert_eq!(request.size, DEFAULT_SIZE);
        assert_eq!(request.n, 1);
    }

    #[test]
    fn test_prompt_truncated_to_limit() {
        let long = "x".repeat(MAX_PROMPT_LEN + 50);
        let request = GenerateRequest::new(&long, ImageStyle::default()).unwrap();
        assert_eq!(request.prompt.chars().count(), MAX_PROMPT_LEN);
    }

    #[test]
    fn test_inpaint_needs_prompt_and_mask() {
        let err = EditRequest::new(EditMode::Inpaint, ImageStyle::default(), None, Some(vec![0]));
        assert!(err.is_err());

        let err = EditRequest::new(
            EditMode::Inpaint,
            ImageStyle::default(),
            Some("a hat"),
            None,
        );
        assert!(err.is_err());

        let ok = EditRequest::new(
            EditMode::Inpaint,
            ImageStyle::default(),
            Some("a hat"),
            Some(vec![0]),
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_cleanup_needs_mask_only() {
        let ok = EditRequest::new(EditMode::Cleanup, ImageStyle::default(), None, Some(vec![0]));
        assert!(ok.is_ok());

        let err = EditRequest::new(EditMode::Cleanup, ImageStyle::default(), None, None);
        assert!(err.is_err());
    }

    #[test]
    fn test_reimagine_needs_nothing() {
        let ok = EditRequest::new(EditMode::Reimagine, ImageStyle::default(), None, None).unwrap();
        assert!(ok.prompt.is_none());
        assert!(ok.mask.is_none());
    }

    #[test]
    fn test_mask_not_serialized_into_json() {
        let request = EditRequest::new(
            EditMode::Cleanup,
            ImageStyle::default(),
            None,
            Some(vec![1, 2, 3]),
        )
        .unwrap();
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("mask"));
        assert!(json.contains("\"cleanup\""));
    }
}
