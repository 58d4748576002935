//! Distance-speed solver: "50 km in 1 hour ... how far in 3 hours"
//!
//! Only unit-rate questions are handled: the base clause must cover exactly
//! one time unit. Any other base time, or a missing "how far in" clause,
//! fails with the distance hint.

use std::sync::LazyLock;

use regex::Regex;

use super::{parse_number, plural, MicroSolver, NumericalSolution, Step, NUMBER};
use crate::classifier::NumericalSubtype;
use crate::solver::{SolveError, SolveOutcome};

const TIME_UNIT: &str = r"hour|hr|min|minute|sec";

static RATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"({NUMBER})\s*(km|miles|m)\s*in\s*({NUMBER})\s*({TIME_UNIT})"
    ))
    .expect("rate pattern is valid")
});

static TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"how\s*far\s*in\s*({NUMBER})\s*({TIME_UNIT})"))
        .expect("target pattern is valid")
});

/// Spelled-out singular for an abbreviated time unit
fn time_unit_name(unit: &str) -> &'static str {
    match unit {
        "hr" | "hour" => "hour",
        "min" | "minute" => "minute",
        _ => "second",
    }
}

/// Scales a one-unit distance to the target time in five scenes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceSpeedSolver;

impl MicroSolver for DistanceSpeedSolver {
    fn subtype(&self) -> NumericalSubtype {
        NumericalSubtype::DistanceSpeed
    }

    fn solve(&self, text: &str) -> SolveOutcome<NumericalSolution> {
        let rate = RATE.captures(text).ok_or_else(SolveError::distance_format)?;
        let distance = parse_number(&rate[1]).ok_or_else(SolveError::distance_format)?;
        let distance_unit = rate[2].to_string();
        let base_time = parse_number(&rate[3]).ok_or_else(SolveError::distance_format)?;
        let time_unit = time_unit_name(&rate[4]);

        if base_time != 1.0 {
            return Err(SolveError::distance_format());
        }

        let target = TARGET.captures(text).ok_or_else(SolveError::distance_format)?;
        let target_time = parse_number(&target[1]).ok_or_else(SolveError::distance_format)?;

        let total = distance * target_time;

        let steps = vec![
            Step::new(
                1,
                "Understand the speed.",
                format!("Speed: {distance} {distance_unit} per 1 {time_unit}"),
            ),
            Step::new(
                2,
                "Identify the goal.",
                format!("Find distance for {}", plural(target_time, time_unit)),
            ),
            Step::new(3, "Multiply speed by time.", format!("{distance} × {target_time}")),
            Step::new(
                4,
                "Calculate the result.",
                format!("{distance} × {target_time} = {total}"),
            ),
            Step::new(5, "Final Answer.", format!("{total} {distance_unit}")),
        ];

        Ok(NumericalSolution {
            subtype: NumericalSubtype::DistanceSpeed,
            answer: total,
            steps,
        })
    }
}
