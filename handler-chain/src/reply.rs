//! Reply rendering.

use std::fmt;

use calc_core::{format_number, Message, Operation};

/// Guidance shown when no operation is recognized.
pub const GUIDANCE: &str = "すみません、よく分かりませんでした。足し算、引き算、掛け算のいずれかを含む形で質問してください。（例：「5たす3は？」）";

/// Generic apology for internal faults at the dispatch boundary.
pub const INTERNAL_FAILURE: &str = "すみません、処理中にエラーが発生しました。";

/// Outcome of one dispatch, rendered to text with `Display`.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Computed {
        operation: Operation,
        a: f64,
        b: f64,
        result: f64,
    },
    /// The operation was recognized but fewer than two numbers were found.
    MissingOperands(Operation),
    Guidance,
    InternalFailure,
}

impl Reply {
    pub fn into_message(self) -> Message {
        Message::outgoing(self.to_string())
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Computed {
                operation,
                a,
                b,
                result,
            } => write!(
                f,
                "{} {} {} は {} です。",
                format_number(*a),
                operator_word(*operation),
                format_number(*b),
                format_number(*result)
            ),
            Reply::MissingOperands(operation) => write!(
                f,
                "すみません、{}する2つの数値を認識できませんでした。",
                operation_label(*operation)
            ),
            Reply::Guidance => f.write_str(GUIDANCE),
            Reply::InternalFailure => f.write_str(INTERNAL_FAILURE),
        }
    }
}

/// Word placed between the operands in a computed reply.
pub fn operator_word(operation: Operation) -> &'static str {
    match operation {
        Operation::Add => "たす",
        Operation::Subtract => "ひく",
        Operation::Multiply => "かける",
    }
}

/// Noun naming the operation in apologies.
pub fn operation_label(operation: Operation) -> &'static str {
    match operation {
        Operation::Add => "足し算",
        Operation::Subtract => "引き算",
        Operation::Multiply => "掛け算",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::MessageDirection;

    #[test]
    fn test_computed_reply_format() {
        let reply = Reply::Computed {
            operation: Operation::Multiply,
            a: 3.0,
            b: 0.5,
            result: 1.5,
        };
        assert_eq!(reply.to_string(), "3.0 かける 0.5 は 1.5 です。");
    }

    #[test]
    fn test_missing_operands_names_operation() {
        assert_eq!(
            Reply::MissingOperands(Operation::Subtract).to_string(),
            "すみません、引き算する2つの数値を認識できませんでした。"
        );
        assert_eq!(
            Reply::MissingOperands(Operation::Multiply).to_string(),
            "すみません、掛け算する2つの数値を認識できませんでした。"
        );
    }

    #[test]
    fn test_into_message_is_outgoing() {
        let message = Reply::InternalFailure.into_message();
        assert_eq!(message.direction, MessageDirection::Outgoing);
        assert_eq!(message.content, INTERNAL_FAILURE);
    }
}
