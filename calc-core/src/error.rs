use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Operand error: {0}")]
    Operand(#[from] OperandError),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

/// Rejected operands. The message keeps the offending values and their observed kinds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperandError {
    #[error(
        "数値以外の引数が指定されました。関数名: {operation}, 引数a: {a} (型: {a_kind}), 引数b: {b} (型: {b_kind})"
    )]
    InvalidType {
        operation: &'static str,
        a: String,
        a_kind: &'static str,
        b: String,
        b_kind: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum HandlerError {
    /// Only reachable when a chain is assembled without the fallback handler.
    #[error("No intent matched: {0}")]
    NoIntentMatched(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
