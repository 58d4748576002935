//! Numerical-reasoning track
//!
//! One micro-solver per supported sub-type. Each reads the normalized text,
//! extracts its operands with fixed patterns, and narrates a fixed arc:
//!
//! ```text
//! restate problem → define terms → set up operation → compute → answer
//! ```
//!
//! A solver that cannot find its pattern fails with its own format hint.
//! `basic_arithmetic` and `unknown` have no solver and fail with the
//! generic hint.

mod distance;
mod percentage;
mod time_diff;
mod unitary;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub use distance::DistanceSpeedSolver;
pub use percentage::PercentageSolver;
pub use time_diff::TimeDiffSolver;
pub use unitary::UnitaryCostSolver;

use crate::classifier::NumericalSubtype;
use crate::normalizer::NormalizedText;
use crate::solver::{SolveError, SolveOutcome};

/// Numeric literal as it appears in questions
pub(crate) const NUMBER: &str = r"\d+(?:\.\d+)?";

static NUMBER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUMBER).expect("number token pattern is valid"));

/// One narrated scene of a numerical walkthrough
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub scene: u32,
    pub text: String,
    pub visual: String,
}

impl Step {
    pub fn new(scene: u32, text: impl Into<String>, visual: impl Into<String>) -> Self {
        Self {
            scene,
            text: text.into(),
            visual: visual.into(),
        }
    }
}

/// Steps and answer produced by a micro-solver
#[derive(Debug, Clone, PartialEq)]
pub struct NumericalSolution {
    pub subtype: NumericalSubtype,
    pub answer: f64,
    pub steps: Vec<Step>,
}

/// A solver for one numerical sub-type.
///
/// Implementations hold no state; one shared instance serves every call.
pub trait MicroSolver: Sync {
    /// Sub-type this solver handles
    fn subtype(&self) -> NumericalSubtype;

    /// Extracts operands and narrates the solution.
    fn solve(&self, text: &str) -> SolveOutcome<NumericalSolution>;
}

static SOLVERS: [&dyn MicroSolver; 4] = [
    &PercentageSolver,
    &UnitaryCostSolver,
    &DistanceSpeedSolver,
    &TimeDiffSolver,
];

/// Returns the micro-solver for a sub-type, if one exists.
pub fn solver_for(subtype: NumericalSubtype) -> Option<&'static dyn MicroSolver> {
    SOLVERS.iter().copied().find(|s| s.subtype() == subtype)
}

/// Runs the micro-solver routed for `subtype`.
pub fn solve_numerical(
    text: &NormalizedText,
    subtype: NumericalSubtype,
) -> SolveOutcome<NumericalSolution> {
    let solver = solver_for(subtype).ok_or_else(SolveError::unsupported)?;
    solver.solve(text.as_str())
}

/// Every numeric token in the text, left to right
pub(crate) fn numbers_in(text: &str) -> Vec<f64> {
    NUMBER_TOKEN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Parses a captured numeric literal
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.parse().ok()
}

/// `"4 hours"` / `"1 hour"`
pub(crate) fn plural(count: f64, unit: &str) -> String {
    if count == 1.0 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
