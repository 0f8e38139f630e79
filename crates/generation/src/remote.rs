//! Remote generation server client

use crate::{GenerationBackend, GenerationError, ProgressCallback};
use futures_util::{SinkExt, StreamExt};
use grisaille_api::{EditRequest, GenerateRequest};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::debug;

/// Remote generation client that connects to a WebSocket server
///
/// Each request is one exchange: the request JSON goes out as a text
/// frame (followed by the mask blob as a binary frame for masked edits),
/// progress updates come back as text frames, and the finished image as
/// one binary PNG frame.
pub struct RemoteGeneration {
    server_url: String,
    cancelled: Arc<AtomicBool>,
    generating: Arc<AtomicBool>,
}

impl RemoteGeneration {
    pub fn new(server_url: String) -> Self {
        Self {
            server_url,
            cancelled: Arc::new(AtomicBool::new(false)),
            generating: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl GenerationBackend for RemoteGeneration {
    async fn generate(
        &mut self,
        request: GenerateRequest,
        on_progress: Option<ProgressCallback>,
    ) -> Result<image::RgbaImage, GenerationError> {
        self.run(&request, None, on_progress).await
    }

    async fn edit(
        &mut self,
        request: EditRequest,
        on_progress: Option<ProgressCallback>,
    ) -> Result<image::RgbaImage, GenerationError> {
        let mask = request.mask.clone();
        self.run(&request, mask, on_progress).await
    }

    fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    fn is_generating(&self) -> bool {
        self.generating.load(Ordering::SeqCst)
    }
}

impl RemoteGeneration {
    async fn run<R: Serialize>(
        &self,
        request: &R,
        mask: Option<Vec<u8>>,
        on_progress: Option<ProgressCallback>,
    ) -> Result<image::RgbaImage, GenerationError> {
        self.cancelled.store(false, Ordering::SeqCst);
        self.generating.store(true, Ordering::SeqCst);

        let result = self.exchange(request, mask, on_progress).await;

        self.generating.store(false, Ordering::SeqCst);
        result
    }

    async fn exchange<R: Serialize>(
        &self,
        request: &R,
        mask: Option<Vec<u8>>,
        on_progress: Option<ProgressCallback>,
    ) -> Result<image::RgbaImage, GenerationError> {
        // Connect to WebSocket server
        let (ws_stream, _) = connect_async(&self.server_url)
            .await
            .map_err(|e| GenerationError::Connection(e.to_string()))?;

        let (mut write, mut read) = ws_stream.split();

        // Send the request
        let request_json = serde_json::to_string(request)
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        write
            .send(Message::Text(request_json.into()))
            .await
            .map_err(|e| GenerationError::Connection(e.to_string()))?;

        // Masked edits ship the mask as a binary frame right after
        if let Some(mask) = mask {
            debug!("RemoteGeneration: sending {} byte mask", mask.len());
            write
                .send(Message::Binary(mask.into()))
                .await
                .map_err(|e| GenerationError::Connection(e.to_string()))?;
        }

        // Read responses
        let mut final_image: Option<image::RgbaImage> = None;

        while let Some(msg) = read.next().await {
            if self.cancelled.load(Ordering::SeqCst) {
                return Err(GenerationError::Cancelled);
            }

            match msg {
                Ok(Message::Text(text)) => {
                    // Parse progress update or server-side failure
                    if let Ok(progress) = serde_json::from_str::<ProgressUpdate>(&text) {
                        if let Some(ref callback) = on_progress {
                            callback(progress.progress, None);
                        }
                    } else if let Ok(failure) = serde_json::from_str::<FailureReport>(&text) {
                        return Err(GenerationError::Generation(failure.error));
                    }
                }
                Ok(Message::Binary(data)) => {
                    // Final image data (PNG encoded)
                    let img = image::load_from_memory(&data)
                        .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;
                    final_image = Some(img.to_rgba8());
                    break;
                }
                Ok(Message::Close(_)) => break,
                Err(e) => return Err(GenerationError::Connection(e.to_string())),
                _ => {}
            }
        }

        final_image.ok_or_else(|| GenerationError::InvalidResponse("No image received".into()))
    }
}

#[derive(serde::Deserialize)]
struct ProgressUpdate {
    progress: f32,
    #[allow(dead_code)]
    step: u32,
}

#[derive(serde::Deserialize)]
struct FailureReport {
    error: String,
}
