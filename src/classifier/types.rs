//! Classification types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level topic of a solved question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Differentiation,
    Integration,
    NumericalReasoning,
}

impl Topic {
    /// Returns the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Differentiation => "differentiation",
            Topic::Integration => "integration",
            Topic::NumericalReasoning => "numerical_reasoning",
        }
    }

    /// True for the symbolic-calculus track
    pub fn is_calculus(&self) -> bool {
        matches!(self, Topic::Differentiation | Topic::Integration)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-type of a numerical-reasoning question.
///
/// `Unknown` is a valid classification. It only becomes an error when no
/// micro-solver can produce steps for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericalSubtype {
    Percentage,
    UnitaryCost,
    DistanceSpeed,
    TimeDiff,
    BasicArithmetic,
    Unknown,
}

impl NumericalSubtype {
    /// Returns the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericalSubtype::Percentage => "percentage",
            NumericalSubtype::UnitaryCost => "unitary_cost",
            NumericalSubtype::DistanceSpeed => "distance_speed",
            NumericalSubtype::TimeDiff => "time_diff",
            NumericalSubtype::BasicArithmetic => "basic_arithmetic",
            NumericalSubtype::Unknown => "unknown",
        }
    }
}

impl fmt::Display for NumericalSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routing decision for a normalized question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Symbolic-calculus track with its topic
    Calculus(Topic),
    /// Numerical-reasoning track with its sub-type
    Numerical(NumericalSubtype),
}

impl Classification {
    /// Topic implied by this classification
    pub fn topic(&self) -> Topic {
        match self {
            Classification::Calculus(topic) => *topic,
            Classification::Numerical(_) => Topic::NumericalReasoning,
        }
    }
}
