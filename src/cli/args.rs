//! CLI argument definitions using clap
//!
//! Commands:
//! - stepwise solve --question <q>
//! - stepwise explain --question <q>
//! - stepwise batch
//! - stepwise serve [--config <path>] [--port <n>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// stepwise - deterministic step-by-step math explanations
#[derive(Parser, Debug)]
#[command(name = "stepwise")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve one question and print the result as JSON
    Solve {
        /// Question text
        #[arg(long, short)]
        question: String,
    },

    /// Solve one question and print a readable walkthrough
    Explain {
        /// Question text
        #[arg(long, short)]
        question: String,
    },

    /// Read {"question": ...} lines from stdin, write one result per line
    Batch,

    /// Start the HTTP adapter
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port override
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
