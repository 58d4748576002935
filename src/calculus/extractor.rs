//! Expression and limits extraction
//!
//! Cleanup is phrase-stripping, not parsing. Whatever text survives is the
//! expression; malformed leftovers are passed on to the rule matcher, which
//! falls back to the power rule.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::classifier::Topic;
use crate::normalizer::NormalizedText;

static FROM_TO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"from\s+(\d+)\s+to\s+(\d+)").expect("from/to pattern is valid"));
static BETWEEN_AND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"between\s+(\d+)\s+and\s+(\d+)").expect("between/and pattern is valid")
});

static EQUATION_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"y\s*=|f\([a-z]\)\s*=").expect("equation label pattern is valid"));
static INT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bint\b").expect("int token pattern is valid"));

const BOILERPLATE: &[&str] = &["find the", "calculate the", "what is the", "solve for"];

const DIFFERENTIATION_PHRASES: &[&str] = &["derivative of", "differentiate", "differentiation"];

const INTEGRATION_PHRASES: &[&str] = &[
    "integral of",
    "integrate",
    "integration",
    "antiderivative of",
    "area under",
    "∫",
];

const NOTATION_SUFFIXES: &[&str] = &["with respect to x", "dx"];

/// Bounds of a definite integral.
///
/// No ordering is enforced: `lower` may exceed `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i64; 2]", into = "[i64; 2]")]
pub struct Limits {
    pub lower: i64,
    pub upper: i64,
}

impl Limits {
    pub fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }
}

impl From<[i64; 2]> for Limits {
    fn from([lower, upper]: [i64; 2]) -> Self {
        Self { lower, upper }
    }
}

impl From<Limits> for [i64; 2] {
    fn from(limits: Limits) -> Self {
        [limits.lower, limits.upper]
    }
}

fn capture_pair(pattern: &Regex, text: &str) -> Option<Limits> {
    let caps = pattern.captures(text)?;
    let lower = caps[1].parse().ok()?;
    let upper = caps[2].parse().ok()?;
    Some(Limits::new(lower, upper))
}

/// Extracts definite-integral limits, independently of topic.
///
/// `from A to B` is tried before `between A and B`; absence means an
/// indefinite integral.
pub fn extract_limits(text: &NormalizedText) -> Option<Limits> {
    capture_pair(&FROM_TO, text.as_str()).or_else(|| capture_pair(&BETWEEN_AND, text.as_str()))
}

fn strip_all(text: String, phrases: &[&str]) -> String {
    phrases
        .iter()
        .fold(text, |acc, phrase| acc.replace(phrase, ""))
}

/// Isolates the bare algebraic expression from a calculus question.
pub fn extract_expression(text: &NormalizedText, topic: Topic) -> String {
    let cleaned = strip_all(text.as_str().to_string(), BOILERPLATE);
    let cleaned = EQUATION_LABEL.replace_all(&cleaned, "").into_owned();

    let cleaned = match topic {
        Topic::Differentiation => strip_all(cleaned, DIFFERENTIATION_PHRASES),
        Topic::Integration => {
            let stripped = strip_all(cleaned, INTEGRATION_PHRASES);
            INT_TOKEN.replace_all(&stripped, "").into_owned()
        }
        Topic::NumericalReasoning => cleaned,
    };

    let cleaned = FROM_TO.replace_all(&cleaned, "");
    let cleaned = BETWEEN_AND.replace_all(&cleaned, "").into_owned();
    let cleaned = strip_all(cleaned, NOTATION_SUFFIXES);

    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;

    #[test]
    fn test_from_to_limits() {
        let text = normalize("integral of x from 1 to 3");
        assert_eq!(extract_limits(&text), Some(Limits::new(1, 3)));
    }

    #[test]
    fn test_between_limits() {
        let text = normalize("area under x^2 between 0 and 5");
        assert_eq!(extract_limits(&text), Some(Limits::new(0, 5)));
    }

    #[test]
    fn test_from_to_wins_over_between() {
        let text = normalize("integrate x from 2 to 4 between 0 and 1");
        assert_eq!(extract_limits(&text), Some(Limits::new(2, 4)));
    }

    #[test]
    fn test_limits_unordered() {
        let text = normalize("integral of x from 5 to 1");
        assert_eq!(extract_limits(&text), Some(Limits::new(5, 1)));
    }

    #[test]
    fn test_no_limits() {
        assert_eq!(extract_limits(&normalize("integral of x")), None);
    }

    #[test]
    fn test_limits_serialize_as_pair() {
        let json = serde_json::to_string(&Limits::new(1, 3)).unwrap();
        assert_eq!(json, "[1,3]");
        let back: Limits = serde_json::from_str("[0,2]").unwrap();
        assert_eq!(back, Limits::new(0, 2));
    }

    #[test]
    fn test_differentiation_cleanup() {
        let text = normalize("Find the derivative of x squared");
        assert_eq!(extract_expression(&text, Topic::Differentiation), "x^2");

        let text = normalize("differentiate 3x + 2 with respect to x");
        assert_eq!(extract_expression(&text, Topic::Differentiation), "3x + 2");
    }

    #[test]
    fn test_equation_labels() {
        let text = normalize("y = x^2");
        assert_eq!(extract_expression(&text, Topic::Differentiation), "x^2");

        let text = normalize("f(x) = 4x^3");
        assert_eq!(extract_expression(&text, Topic::Differentiation), "4x^3");
    }

    #[test]
    fn test_integration_cleanup() {
        let text = normalize("integral of x from 1 to 3");
        assert_eq!(extract_expression(&text, Topic::Integration), "x");

        let text = normalize("∫ 2x dx");
        assert_eq!(extract_expression(&text, Topic::Integration), "2x");

        let text = normalize("int x^2 dx");
        assert_eq!(extract_expression(&text, Topic::Integration), "x^2");
    }

    #[test]
    fn test_leftovers_are_kept() {
        let text = normalize("what is the derivative of x^2?");
        assert_eq!(extract_expression(&text, Topic::Differentiation), "x^2?");
    }
}
