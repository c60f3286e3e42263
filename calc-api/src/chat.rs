//! Chat session: each user line becomes one `/ask` call; both sides are kept in a transcript
//! that lives as long as the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::client::AskClient;

/// Reply recorded when the API cannot be reached.
pub const API_FAILURE: &str = "APIとの通信に失敗しました。";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

pub struct ChatSession {
    client: AskClient,
    transcript: Vec<TranscriptEntry>,
}

impl ChatSession {
    pub fn new(client: AskClient) -> Self {
        Self {
            client,
            transcript: Vec::new(),
        }
    }

    /// Records the prompt, asks the API, records and returns the reply.
    pub async fn send(&mut self, prompt: &str) -> String {
        self.push(Role::User, prompt);

        let reply = match self.client.ask(prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, url = %self.client.url(), "API request failed");
                API_FAILURE.to_string()
            }
        };

        self.push(Role::Assistant, &reply);
        reply
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    fn push(&mut self, role: Role, content: &str) {
        self.transcript.push(TranscriptEntry {
            role,
            content: content.to_string(),
            created_at: Utc::now(),
        });
    }
}
