//! Client for `POST /ask`, used by the chat front end.

use anyhow::Result;
use serde_json::Value;

use crate::routes::AskRequest;

/// Shown when the server answers without a `response` field.
pub const MISSING_RESPONSE: &str = "エラー: 応答を取得できませんでした。";

#[derive(Debug, Clone)]
pub struct AskClient {
    http: reqwest::Client,
    url: String,
}

impl AskClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends one utterance and returns the reply text. Transport errors and non-2xx statuses are errors.
    pub async fn ask(&self, text: &str) -> Result<String> {
        let body: Value = self
            .http
            .post(&self.url)
            .json(&AskRequest {
                text: text.to_string(),
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(body
            .get("response")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| MISSING_RESPONSE.to_string()))
    }
}
