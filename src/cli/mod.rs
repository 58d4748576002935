//! CLI module for stepwise
//!
//! Provides command-line interface for:
//! - solve: One-shot solve, JSON result on stdout
//! - explain: One-shot solve, readable walkthrough on stdout
//! - batch: JSON lines in, JSON lines out
//! - serve: HTTP adapter

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{batch, explain, run, run_command, serve, solve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_requests, write_error, write_json, write_text, QuestionLine};
