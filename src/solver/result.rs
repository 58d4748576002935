//! Result shapes returned by `solve`
//!
//! Serialized untagged, so the wire form is exactly one of:
//!
//! ```text
//! {topic, rule, expression, limits, animationFlow, parsedTerms, original_question, normalized_question}
//! {topic: "numerical_reasoning", subtype, answer, original_question, steps}
//! {error: true, code, message}
//! ```

use serde::Serialize;

use super::errors::SolveError;
use crate::calculus::{AnimationFlow, Limits, Rule, SolvedTerm};
use crate::classifier::{NumericalSubtype, Topic};
use crate::numerical::Step;

/// Explanation of a calculus question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculusResult {
    pub topic: Topic,
    pub rule: Rule,
    pub expression: String,
    /// `null` for indefinite integrals and for derivatives
    pub limits: Option<Limits>,
    #[serde(rename = "animationFlow")]
    pub animation_flow: AnimationFlow,
    #[serde(rename = "parsedTerms")]
    pub parsed_terms: Vec<SolvedTerm>,
    pub original_question: String,
    pub normalized_question: String,
}

/// Narrated walkthrough of a numerical question
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericalResult {
    /// Always `numerical_reasoning`
    pub topic: Topic,
    pub subtype: NumericalSubtype,
    pub answer: f64,
    pub original_question: String,
    pub steps: Vec<Step>,
}

/// A failure returned as an ordinary value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult {
    /// Always `true`; lets clients branch on a single field
    pub error: bool,
    pub code: String,
    pub message: String,
}

impl From<SolveError> for ErrorResult {
    fn from(err: SolveError) -> Self {
        Self {
            error: true,
            code: err.code().code().to_string(),
            message: err.message().to_string(),
        }
    }
}

/// Everything `solve` can return
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SolveResult {
    Calculus(CalculusResult),
    Numerical(NumericalResult),
    Error(ErrorResult),
}

impl SolveResult {
    pub fn is_error(&self) -> bool {
        matches!(self, SolveResult::Error(_))
    }

    /// Topic of a successful result
    pub fn topic(&self) -> Option<Topic> {
        match self {
            SolveResult::Calculus(r) => Some(r.topic),
            SolveResult::Numerical(r) => Some(r.topic),
            SolveResult::Error(_) => None,
        }
    }

    pub fn as_calculus(&self) -> Option<&CalculusResult> {
        match self {
            SolveResult::Calculus(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_numerical(&self) -> Option<&NumericalResult> {
        match self {
            SolveResult::Numerical(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorResult> {
        match self {
            SolveResult::Error(r) => Some(r),
            _ => None,
        }
    }
}

impl From<SolveError> for SolveResult {
    fn from(err: SolveError) -> Self {
        SolveResult::Error(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculus::compose_flow;

    #[test]
    fn test_error_result_shape() {
        let result = SolveResult::from(SolveError::unsupported());
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["error"], true);
        assert_eq!(value["code"], "STEP_UNSUPPORTED_QUESTION");
        assert!(value["message"].as_str().unwrap().contains("percentages"));
        assert!(value.get("topic").is_none());
    }

    #[test]
    fn test_calculus_result_shape() {
        let result = SolveResult::Calculus(CalculusResult {
            topic: Topic::Integration,
            rule: Rule::LinearRule,
            expression: "x".to_string(),
            limits: Some(Limits::new(1, 3)),
            animation_flow: compose_flow(Topic::Integration, Rule::LinearRule, true).unwrap(),
            parsed_terms: Vec::new(),
            original_question: "Integral of x from 1 to 3".to_string(),
            normalized_question: "integral of x from 1 to 3".to_string(),
        });
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["topic"], "integration");
        assert_eq!(value["rule"], "linear_rule");
        assert_eq!(value["limits"], serde_json::json!([1, 3]));
        assert_eq!(value["animationFlow"][0], "show_formula");
        assert!(value["parsedTerms"].as_array().unwrap().is_empty());
        assert_eq!(value["original_question"], "Integral of x from 1 to 3");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_indefinite_limits_serialize_as_null() {
        let result = CalculusResult {
            topic: Topic::Differentiation,
            rule: Rule::PowerRule,
            expression: "x^2".to_string(),
            limits: None,
            animation_flow: compose_flow(Topic::Differentiation, Rule::PowerRule, false).unwrap(),
            parsed_terms: Vec::new(),
            original_question: "derivative of x^2".to_string(),
            normalized_question: "derivative of x^2".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert!(value["limits"].is_null());
    }

    #[test]
    fn test_accessors() {
        let err = SolveResult::from(SolveError::time_format());
        assert!(err.is_error());
        assert!(err.topic().is_none());
        assert!(err.as_calculus().is_none());
        assert_eq!(err.as_error().unwrap().code, "STEP_TIME_FORMAT");
    }
}
