//! stepwise - deterministic, step-by-step math explanations
//!
//! Turns a free-text math question into an ordered, reproducible
//! walkthrough: named animation stages for calculus questions, narrated
//! scenes for numerical word problems, or a structured error that names
//! an accepted phrasing. Identical questions always produce identical
//! output.
//!
//! ```ignore
//! let result = stepwise::solve("What is 30 percent of 200");
//! ```

pub mod calculus;
pub mod classifier;
pub mod cli;
pub mod http_server;
pub mod normalizer;
pub mod numerical;
pub mod observability;
pub mod solver;

pub use solver::{solve, SolveResult};
