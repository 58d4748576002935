//! Keyword and pattern tests for routing questions
//!
//! Every test is an ordered disjunction: the first hit wins. The order is
//! load-bearing (a question mentioning both "cost" and "percent" is a
//! percentage question because the percent test runs first).

use std::sync::LazyLock;

use regex::Regex;

use super::types::{Classification, NumericalSubtype, Topic};
use crate::normalizer::NormalizedText;

static CALCULUS_NOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"x\^|dy/dx").expect("calculus notation pattern is valid"));

static INT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bint\b").expect("int token pattern is valid"));

static BINARY_ARITHMETIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*[+\-*/]\s*(\d+)").expect("binary arithmetic pattern is valid")
});

const INTEGRATION_KEYWORDS: &[&str] = &[
    "integral",
    "integrate",
    "integration",
    "area under",
    "antiderivative",
    "∫",
];

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

/// Decides whether a question belongs to the symbolic-calculus track.
///
/// The final clause is broad: any "x" in the text routes to
/// calculus unless "box" or "cost" is present. Numerical questions with a
/// stray "x" (e.g. "x apples", "next") are misrouted by it.
pub fn is_calculus(text: &NormalizedText) -> bool {
    let t = text.as_str();
    contains_any(t, &["derivative", "integral", "slope", "area under"])
        || CALCULUS_NOTATION.is_match(t)
        || (t.contains('x') && !t.contains("box") && !t.contains("cost"))
}

/// Picks integration or differentiation for a calculus question.
///
/// Differentiation is the default, including bare equations like "y = x^2".
pub fn calculus_topic(text: &NormalizedText) -> Topic {
    let t = text.as_str();
    if contains_any(t, INTEGRATION_KEYWORDS) || INT_TOKEN.is_match(t) {
        Topic::Integration
    } else {
        Topic::Differentiation
    }
}

/// Picks the numerical sub-type, in strict priority order.
pub fn numerical_subtype(text: &NormalizedText) -> NumericalSubtype {
    let t = text.as_str();

    if contains_any(t, &["percent", "%"]) {
        return NumericalSubtype::Percentage;
    }
    if contains_any(t, &["cost", "buy", "price"]) {
        return NumericalSubtype::UnitaryCost;
    }
    if contains_any(t, &["walk", "run", "speed", "km", "miles"]) {
        return NumericalSubtype::DistanceSpeed;
    }
    if t.contains("from") && t.contains("to") && contains_any(t, &["minutes", "hours", ":"]) {
        return NumericalSubtype::TimeDiff;
    }
    if BINARY_ARITHMETIC.is_match(t) {
        return NumericalSubtype::BasicArithmetic;
    }
    NumericalSubtype::Unknown
}

/// Routes a normalized question to a track.
pub fn classify(text: &NormalizedText) -> Classification {
    if is_calculus(text) {
        Classification::Calculus(calculus_topic(text))
    } else {
        Classification::Numerical(numerical_subtype(text))
    }
}
