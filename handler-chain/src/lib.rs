//! # Handler chain
//!
//! Classifies a message by scanning intent handlers in registration order; the first handler whose
//! predicate accepts the lower-cased text produces the reply. The default chain ends with the
//! always-matching fallback, so every message gets exactly one handler.

pub mod extract;
pub mod handler;
pub mod reply;

use std::panic::{self, AssertUnwindSafe};

use calc_core::{HandlerError, Message, Result};
use tracing::{debug, error, info, instrument};

pub use extract::operand_pair;
pub use handler::IntentHandler;
pub use reply::{Reply, GUIDANCE, INTERNAL_FAILURE};

/// Ordered list of intent handlers. Built once at startup and shared by reference; holds no
/// mutable state, so it can serve concurrent callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentChain {
    handlers: Vec<IntentHandler>,
}

impl IntentChain {
    /// Creates an empty chain (no handlers).
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Add, Subtract, Multiply, then Fallback.
    pub fn with_default_handlers() -> Self {
        IntentHandler::DEFAULT_ORDER
            .into_iter()
            .fold(Self::new(), Self::add_handler)
    }

    /// Appends a handler (scanned in order; first match wins).
    pub fn add_handler(mut self, handler: IntentHandler) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn handlers(&self) -> &[IntentHandler] {
        &self.handlers
    }

    /// First handler whose predicate accepts the message, or `None` if the chain has no fallback
    /// and nothing matched.
    pub fn classify(&self, message: &Message) -> Option<IntentHandler> {
        let lowered = message.content.to_lowercase();
        self.handlers.iter().copied().find(|h| h.matches(&lowered))
    }

    /// Classifies and runs the selected handler. Errors are internal faults; see [`respond`](Self::respond).
    #[instrument(skip(self, message))]
    pub fn handle(&self, message: &Message) -> Result<Message> {
        info!(text_len = message.content.len(), "step: handler_chain started");

        let handler = self
            .classify(message)
            .ok_or_else(|| HandlerError::NoIntentMatched(message.content.clone()))?;
        info!(intent = handler.intent_name(), "step: handler selected");

        let reply = handler.handle(message)?;
        debug!(intent = handler.intent_name(), reply = %reply.content, "step: handler done");

        Ok(reply)
    }

    /// Dispatch boundary: always returns a non-empty reply. Errors and panics inside the chain
    /// become the generic apology.
    pub fn respond(&self, text: &str) -> String {
        let message = Message::incoming(text);
        guarded(|| self.handle(&message))
    }
}

/// Runs `dispatch`, turning an error or a panic into [`Reply::InternalFailure`].
fn guarded<F>(dispatch: F) -> String
where
    F: FnOnce() -> Result<Message>,
{
    match panic::catch_unwind(AssertUnwindSafe(dispatch)) {
        Ok(Ok(reply)) => reply.content,
        Ok(Err(e)) => {
            error!(error = %e, "Handler chain failed");
            Reply::InternalFailure.to_string()
        }
        Err(_) => {
            error!("Handler chain panicked");
            Reply::InternalFailure.to_string()
        }
    }
}

impl Default for IntentChain {
    fn default() -> Self {
        Self::with_default_handlers()
    }
}

// Integration tests live in tests/handler_chain_test.rs
