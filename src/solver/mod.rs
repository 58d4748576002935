//! Explanation engine entry point
//!
//! `solve` is a pure function of its input text. It shares only the
//! process-wide read-only tables (number words, compiled patterns, flow
//! table) and is safe to call from any number of threads at once.

mod dispatcher;
mod errors;
mod explain;
mod result;

pub use dispatcher::{solve, try_solve};
pub use errors::{Category, SolveError, SolveErrorCode, SolveOutcome};
pub use explain::Explanation;
pub use result::{CalculusResult, ErrorResult, NumericalResult, SolveResult};
