//! # calc-core
//!
//! Core types for the arithmetic responder: [`Message`], the operation library ([`add`], [`subtract`],
//! [`multiply`] over loosely typed [`Operand`]s), error types, and tracing initialization.
//! Transport-agnostic; used by handler-chain and calc-api.

pub mod error;
pub mod logger;
pub mod operations;
pub mod types;

pub use error::{CalcError, HandlerError, OperandError, Result};
pub use logger::init_tracing;
pub use operations::{add, format_number, multiply, subtract, Operand, Operation};
pub use types::{Message, MessageDirection};
