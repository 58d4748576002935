//! Time difference solver: "H:MM to H:MM" in minutes
//!
//! Clock times carry no am/pm, so an end time earlier than the start is
//! read as the same time twelve hours later.

use std::sync::LazyLock;

use regex::Regex;

use super::{MicroSolver, NumericalSolution, Step};
use crate::classifier::NumericalSubtype;
use crate::solver::{SolveError, SolveOutcome};

const HALF_DAY_MINUTES: i64 = 12 * 60;

static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2}):(\d{2})\s*to\s*(\d{1,2}):(\d{2})").expect("time range pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockTime {
    hours: i64,
    minutes: i64,
}

impl ClockTime {
    fn parse(hours: &str, minutes: &str) -> Option<Self> {
        Some(Self {
            hours: hours.parse().ok()?,
            minutes: minutes.parse().ok()?,
        })
    }

    fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)
    }
}

/// Minutes between two clock times, in five scenes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeDiffSolver;

impl MicroSolver for TimeDiffSolver {
    fn subtype(&self) -> NumericalSubtype {
        NumericalSubtype::TimeDiff
    }

    fn solve(&self, text: &str) -> SolveOutcome<NumericalSolution> {
        let caps = TIME_RANGE
            .captures(text)
            .ok_or_else(SolveError::time_format)?;
        let start = ClockTime::parse(&caps[1], &caps[2]).ok_or_else(SolveError::time_format)?;
        let end = ClockTime::parse(&caps[3], &caps[4]).ok_or_else(SolveError::time_format)?;

        let mut diff = end.total_minutes() - start.total_minutes();
        if diff < 0 {
            diff += HALF_DAY_MINUTES;
        }

        let steps = vec![
            Step::new(1, "Identify start and end times.", format!("{start}  →  {end}")),
            Step::new(
                2,
                "We interpret this as finding the difference.",
                "Target - Start",
            ),
            Step::new(
                3,
                "Subtract hours and minutes.",
                format!("Count from {start} to {end}"),
            ),
            Step::new(4, "Calculate total minutes.", format!("{diff} minutes")),
            Step::new(5, "Final Answer.", format!("{diff} minutes")),
        ];

        Ok(NumericalSolution {
            subtype: NumericalSubtype::TimeDiff,
            answer: diff as f64,
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolveErrorCode;

    #[test]
    fn test_forty_five_minutes() {
        let solution = TimeDiffSolver
            .solve("how many minutes from 2:30 to 3:15?")
            .unwrap();
        assert_eq!(solution.answer, 45.0);
        assert_eq!(solution.steps.len(), 5);
        assert_eq!(solution.steps[0].visual, "2:30  →  3:15");
        assert_eq!(solution.steps[4].visual, "45 minutes");
    }

    #[test]
    fn test_wraps_past_twelve() {
        let solution = TimeDiffSolver.solve("from 11:00 to 1:00").unwrap();
        assert_eq!(solution.answer, 120.0);
    }

    #[test]
    fn test_same_time_is_zero() {
        let solution = TimeDiffSolver.solve("4:05 to 4:05").unwrap();
        assert_eq!(solution.answer, 0.0);
        assert_eq!(solution.steps[2].visual, "Count from 4:05 to 4:05");
    }

    #[test]
    fn test_missing_range() {
        let err = TimeDiffSolver.solve("how many minutes in an hour").unwrap_err();
        assert_eq!(err.code(), SolveErrorCode::StepTimeFormat);
    }
}
