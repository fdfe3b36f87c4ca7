//! LINE Messaging API HTTP client.

use std::time::Duration;

use anyhow::{Context, bail};
use reqwest::Client;

use crate::types::{ErrorResponse, PushMessageRequest, ReplyMessageRequest, TextMessage};

const DEFAULT_BASE_URL: &str = "https://api.line.me";

/// HTTP client for the LINE Messaging API.
pub struct LineApi {
    client: Client,
    base_url: String,
    access_token: String,
}

impl LineApi {
    /// Create a new API client with the given channel access token.
    pub fn new(access_token: &str) -> Self {
        Self::with_base_url(access_token, DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default endpoint (used by tests).
    pub fn with_base_url(access_token: &str, base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build reqwest client");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        }
    }

    /// Reply to a webhook event using its reply token.
    pub async fn reply_message(&self, reply_token: &str, text: &str) -> anyhow::Result<()> {
        let body = ReplyMessageRequest {
            reply_token: reply_token.to_string(),
            messages: vec![TextMessage::new(text)],
        };
        let resp = self
            .client
            .post(format!("{}/v2/bot/message/reply", self.base_url))
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .context("reply request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp
                .json::<ErrorResponse>()
                .await
                .map(|e| e.message)
                .unwrap_or_else(|_| "unknown error".into());
            bail!("reply failed ({status}): {detail}");
        }
        Ok(())
    }

    /// Push a message to a user, group, or room by ID.
    pub async fn push_message(&self, to: &str, text: &str) -> anyhow::Result<()> {
        let body = PushMessageRequest {
            to: to.to_string(),
            messages: vec![TextMessage::new(text)],
        };
        let resp = self
            .client
            .post(format!("{}/v2/bot/message/push", self.base_url))
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .context("push request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp
                .json::<ErrorResponse>()
                .await
                .map(|e| e.message)
                .unwrap_or_else(|_| "unknown error".into());
            bail!("push failed ({status}): {detail}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_default() {
        let api = LineApi::new("token");
        assert_eq!(api.base_url, "https://api.line.me");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = LineApi::with_base_url("token", "http://127.0.0.1:9999/");
        assert_eq!(api.base_url, "http://127.0.0.1:9999");
    }
}
