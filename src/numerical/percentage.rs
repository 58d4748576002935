//! Percentage solver: "N percent of M"

use std::sync::LazyLock;

use regex::Regex;

use super::{parse_number, MicroSolver, NumericalSolution, Step, NUMBER};
use crate::classifier::NumericalSubtype;
use crate::solver::{SolveError, SolveOutcome};

static PERCENT_OF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"({NUMBER})\s*(?:percent|%)\s*of\s*({NUMBER})"))
        .expect("percent pattern is valid")
});

/// Computes `N/100 * M` in six scenes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentageSolver;

impl MicroSolver for PercentageSolver {
    fn subtype(&self) -> NumericalSubtype {
        NumericalSubtype::Percentage
    }

    fn solve(&self, text: &str) -> SolveOutcome<NumericalSolution> {
        let caps = PERCENT_OF
            .captures(text)
            .ok_or_else(SolveError::percentage_format)?;
        let pct = parse_number(&caps[1]).ok_or_else(SolveError::percentage_format)?;
        let val = parse_number(&caps[2]).ok_or_else(SolveError::percentage_format)?;

        let hundredth = val / 100.0;
        let result = (pct / 100.0) * val;

        // "divide by 100" shares scene 3 with the set-up
        let steps = vec![
            Step::new(1, "Let us understand the information.", format!("Find {pct}% of {val}")),
            Step::new(
                2,
                "We interpret 'percent' as 'per 100'.",
                format!("{pct}% means {pct}/100"),
            ),
            Step::new(3, "We set up the multiplication.", format!("{pct}/100 × {val}")),
            Step::new(
                3,
                "First, divide by 100.",
                format!("{pct} × ({val} / 100) = {pct} × {hundredth}"),
            ),
            Step::new(4, "Now multiply.", format!("{pct} × {hundredth} = {result}")),
            Step::new(5, "This is the final answer.", format!("Answer: {result}")),
        ];

        Ok(NumericalSolution {
            subtype: NumericalSubtype::Percentage,
            answer: result,
            steps,
        })
    }
}
