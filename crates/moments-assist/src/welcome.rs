//! Welcome-message composition for event pages.

use async_trait::async_trait;

use crate::client::GenAiClient;

/// Composes the message shown to guests on the upload page.
#[async_trait]
pub trait WelcomeComposer {
    /// Always returns a usable message; generation failures yield the
    /// deterministic template from [`fallback_welcome`].
    async fn welcome_message(&self, event_name: &str, host_name: &str, event_type: &str)
        -> String;
}

/// The template used whenever generation is unavailable or fails.
pub fn fallback_welcome(event_name: &str) -> String {
    format!("Welcome to {event_name}! We're so glad you're here.")
}

#[async_trait]
impl WelcomeComposer for GenAiClient {
    async fn welcome_message(
        &self,
        event_name: &str,
        host_name: &str,
        event_type: &str,
    ) -> String {
        if !self.is_configured() {
            return fallback_welcome(event_name);
        }

        let prompt = format!(
            "Write a short, warm, and fun welcome message for guests uploading photos to an event album.\n\
             Event Name: {event_name}\n\
             Host: {host_name}\n\
             Event Type: {event_type}\n\
             Keep it under 50 words. Be inviting!"
        );

        match self.generate(serde_json::json!([{ "text": prompt }])).await {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(%error, event_name, "welcome generation failed, using template");
                fallback_welcome(event_name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_names_the_event() {
        assert_eq!(
            fallback_welcome("Sarah & Tom's Wedding"),
            "Welcome to Sarah & Tom's Wedding! We're so glad you're here."
        );
    }

    #[tokio::test]
    async fn unconfigured_client_uses_template() {
        let client = GenAiClient::new("https://api.example.com/v1", "", "model");
        let message = client
            .welcome_message("Garden Party", "Ana", "birthday")
            .await;
        assert_eq!(message, fallback_welcome("Garden Party"));
    }
}
