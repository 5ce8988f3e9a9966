//! HTTP plumbing shared by both assistants.

use serde_json::Value;
use thiserror::Error;

/// Errors internal to the generative client.  Public operations map all
/// of these to fallback strings; the type exists so the plumbing can use
/// `?` and tests can assert on causes.
#[derive(Error, Debug)]
pub enum AssistError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generative API rejected the request: {0}")]
    Rejected(String),

    #[error("Response carried no text")]
    EmptyResponse,
}

/// Client for a `generateContent`-style generative endpoint.
pub struct GenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GenAiClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Whether an API key is present.  Unconfigured clients short-circuit
    /// to fallbacks without network traffic.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.base_url.is_empty()
    }

    /// POST a `contents.parts` payload and extract the first candidate's
    /// text.
    pub(crate) async fn generate(&self, parts: Value) -> Result<String, AssistError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let body = serde_json::json!({
            "contents": [{ "parts": parts }],
        });

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AssistError::Rejected(format!("{status}: {body}")));
        }

        let payload: Value = response.json().await?;
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(AssistError::EmptyResponse)?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_requires_key_and_url() {
        assert!(GenAiClient::new("https://api.example.com/v1", "key", "model").is_configured());
        assert!(!GenAiClient::new("https://api.example.com/v1", "", "model").is_configured());
        assert!(!GenAiClient::new("", "key", "model").is_configured());
    }
}
