//! Intent handlers: the closed set of matchers the chain scans in order.

use calc_core::{Message, Operand, Operation, Result};
use tracing::{debug, warn};

use crate::extract::operand_pair;
use crate::reply::Reply;

/// One matcher + action pair. Each operation variant accepts text containing any of its
/// keywords or its operator symbol; `Fallback` accepts everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentHandler {
    Add,
    Subtract,
    Multiply,
    Fallback,
}

impl IntentHandler {
    /// Registration order used by the default chain: specific operations first, fallback last.
    pub const DEFAULT_ORDER: [IntentHandler; 4] = [
        IntentHandler::Add,
        IntentHandler::Subtract,
        IntentHandler::Multiply,
        IntentHandler::Fallback,
    ];

    pub fn intent_name(&self) -> &'static str {
        match self {
            IntentHandler::Add => "AddIntent",
            IntentHandler::Subtract => "SubtractIntent",
            IntentHandler::Multiply => "MultiplyIntent",
            IntentHandler::Fallback => "FallbackIntent",
        }
    }

    /// Operation performed by this handler; `None` for the fallback.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            IntentHandler::Add => Some(Operation::Add),
            IntentHandler::Subtract => Some(Operation::Subtract),
            IntentHandler::Multiply => Some(Operation::Multiply),
            IntentHandler::Fallback => None,
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            IntentHandler::Add => &["たす", "たして", "足し算", "足して"],
            IntentHandler::Subtract => &["ひく", "引き算", "引いて"],
            IntentHandler::Multiply => &["かける", "掛け算", "掛けて"],
            IntentHandler::Fallback => &[],
        }
    }

    pub fn operator_symbol(&self) -> Option<char> {
        match self {
            IntentHandler::Add => Some('+'),
            IntentHandler::Subtract => Some('-'),
            IntentHandler::Multiply => Some('*'),
            IntentHandler::Fallback => None,
        }
    }

    /// Predicate over a message; lower-cases the text before matching.
    pub fn can_handle(&self, message: &Message) -> bool {
        self.matches(&message.content.to_lowercase())
    }

    /// Predicate over already lower-cased text.
    pub fn matches(&self, lowered: &str) -> bool {
        if *self == IntentHandler::Fallback {
            return true;
        }
        self.keywords().iter().any(|kw| lowered.contains(kw))
            || self.operator_symbol().is_some_and(|c| lowered.contains(c))
    }

    /// Transforms the message into a reply message.
    pub fn handle(&self, message: &Message) -> Result<Message> {
        Ok(self.reply(message)?.into_message())
    }

    /// Extracts operands from the original text, computes, and builds the reply.
    pub fn reply(&self, message: &Message) -> Result<Reply> {
        let Some(operation) = self.operation() else {
            return Ok(Reply::Guidance);
        };

        let Some((a, b)) = operand_pair(&message.content) else {
            warn!(
                intent = self.intent_name(),
                "step: recognition failure, fewer than two numbers"
            );
            return Ok(Reply::MissingOperands(operation));
        };

        let result = operation.apply(&Operand::Float(a), &Operand::Float(b))?;
        debug!(intent = self.intent_name(), a, b, result, "step: computed");

        Ok(Reply::Computed {
            operation,
            a,
            b,
            result,
        })
    }
}
