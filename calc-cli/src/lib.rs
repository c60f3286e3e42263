//! # calc-cli
//!
//! Argument parsing, config loading, and the console / chat loops.

pub mod cli;
pub mod repl;

pub use cli::{load_config, Cli, Commands};
pub use repl::{run_chat, run_console};
