//! Message type exchanged between the dispatcher and its callers.

use serde::{Deserialize, Serialize};

/// Text of a single turn. Carries no identity beyond its content and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub content: String,
    pub direction: MessageDirection,
}

/// Direction of the message (from user or from the responder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageDirection {
    Incoming,
    Outgoing,
}

impl Message {
    /// User utterance.
    pub fn incoming(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            direction: MessageDirection::Incoming,
        }
    }

    /// Reply produced by a handler.
    pub fn outgoing(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            direction: MessageDirection::Outgoing,
        }
    }
}
