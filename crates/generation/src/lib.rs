//! Remote image generation for Grisaille
//!
//! Streams generation and edit results from a remote image-generation
//! server. Retry policy is the caller's concern; one request maps to one
//! exchange with the server.

mod postprocess;
mod remote;

pub use postprocess::{shrink_to_fit, HANDOFF_JPEG_QUALITY, HANDOFF_MAX_SIDE};
pub use remote::RemoteGeneration;

use grisaille_api::{EditRequest, GenerateRequest};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Cancelled")]
    Cancelled,
}

/// Progress callback type
pub type ProgressCallback = Box<dyn Fn(f32, Option<&image::RgbaImage>) + Send + Sync>;

/// Trait for generation backends
#[allow(async_fn_in_trait)]
pub trait GenerationBackend {
    /// Generate a new image from a prompt
    async fn generate(
        &mut self,
        request: GenerateRequest,
        on_progress: Option<ProgressCallback>,
    ) -> Result<image::RgbaImage, GenerationError>;

    /// Apply an edit to the current image
    async fn edit(
        &mut self,
        request: EditRequest,
        on_progress: Option<ProgressCallback>,
    ) -> Result<image::RgbaImage, GenerationError>;

    /// Cancel the current operation
    fn cancel(&mut self);

    /// Check if currently generating
    fn is_generating(&self) -> bool;
}
