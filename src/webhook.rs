//! Google Chat webhook delivery — a single POST, no retries.

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};

use crate::error::DeliveryError;

/// Posts rendered card payloads to a Chat space webhook.
pub struct WebhookClient {
    url: SecretString,
    client: reqwest::Client,
}

impl WebhookClient {
    pub fn new(url: &SecretString) -> Self {
        Self {
            url: SecretString::from(url.expose_secret().to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// POST `body` to the webhook. Anything but `200 OK` is an error that
    /// carries the response body.
    pub async fn send(&self, body: Vec<u8>) -> Result<(), DeliveryError> {
        let resp = self
            .client
            .post(self.url.expose_secret())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| DeliveryError::Request(e.without_url()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp
                .text()
                .await
                .map_err(|e| DeliveryError::Request(e.without_url()))?;
            tracing::warn!(status = %status, "Webhook rejected notification");
            return Err(DeliveryError::UnexpectedStatus { status, body });
        }

        tracing::info!(status = %status, "Notification sent");
        Ok(())
    }
}
