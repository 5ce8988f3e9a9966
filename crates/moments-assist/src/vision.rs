//! Short "vibe" descriptions for uploaded photos.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::client::GenAiClient;

/// Produces a one-line description of an image.
#[async_trait]
pub trait ImageAnalyzer {
    /// Always returns a usable phrase; analysis failures yield
    /// [`fallback_description`].
    async fn analyze_image(&self, image: &[u8], media_type: &str) -> String;
}

/// The phrase used whenever analysis is unavailable or fails.
pub fn fallback_description() -> String {
    "A beautiful moment captured.".to_string()
}

#[async_trait]
impl ImageAnalyzer for GenAiClient {
    async fn analyze_image(&self, image: &[u8], media_type: &str) -> String {
        if !self.is_configured() {
            return fallback_description();
        }

        let parts = serde_json::json!([
            {
                "inlineData": {
                    "mimeType": media_type,
                    "data": STANDARD.encode(image),
                }
            },
            {
                "text": "Describe the vibe of this photo in 3 fun words or a very short sentence. \
                         E.g., 'Pure joy!', 'Dance floor madness'."
            }
        ]);

        match self.generate(parts).await {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(%error, "image analysis failed, using fallback phrase");
                fallback_description()
            }
        }
    }
}
