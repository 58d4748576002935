//! Question dispatcher
//!
//! normalize → classify → (calculus | numerical) → result
//!
//! `solve` never fails: every `SolveError` raised along the way becomes an
//! `ErrorResult`. Callers that want the error as a `Result` use
//! `try_solve`.

use super::errors::SolveOutcome;
use super::result::{CalculusResult, NumericalResult, SolveResult};
use crate::calculus::{compose_flow, extract_expression, extract_limits, identify_rule, solve_terms};
use crate::classifier::{classify, Classification, NumericalSubtype, Topic};
use crate::normalizer::{normalize, NormalizedText};
use crate::numerical::solve_numerical;
use crate::observability::{log_event_with_fields, Event};

/// Explains one question. Pure apart from TRACE-level logging.
pub fn solve(question: &str) -> SolveResult {
    match try_solve(question) {
        Ok(result) => result,
        Err(err) => {
            log_event_with_fields(
                Event::QuestionUnsupported,
                &[("code", err.code().code()), ("category", err.category().as_str())],
            );
            SolveResult::from(err)
        }
    }
}

/// Like `solve`, but hands failures back as `Err`.
pub fn try_solve(question: &str) -> SolveOutcome<SolveResult> {
    let normalized = normalize(question);
    let classification = classify(&normalized);

    let subtype = match classification {
        Classification::Numerical(subtype) => subtype.as_str(),
        Classification::Calculus(_) => "",
    };
    log_event_with_fields(
        Event::QuestionClassified,
        &[
            ("normalized", normalized.as_str()),
            ("subtype", subtype),
            ("topic", classification.topic().as_str()),
        ],
    );

    match classification {
        Classification::Calculus(topic) => {
            solve_calculus(question, normalized, topic).map(SolveResult::Calculus)
        }
        Classification::Numerical(subtype) => {
            solve_numerical_question(question, &normalized, subtype).map(SolveResult::Numerical)
        }
    }
}

fn solve_calculus(
    question: &str,
    normalized: NormalizedText,
    topic: Topic,
) -> SolveOutcome<CalculusResult> {
    let limits = extract_limits(&normalized);
    let expression = extract_expression(&normalized, topic);
    let rule = identify_rule(&expression);
    let animation_flow = compose_flow(topic, rule, limits.is_some())?;
    let parsed_terms = solve_terms(&expression, topic);

    Ok(CalculusResult {
        topic,
        rule,
        expression,
        limits,
        animation_flow,
        parsed_terms,
        original_question: question.to_string(),
        normalized_question: normalized.into_string(),
    })
}

fn solve_numerical_question(
    question: &str,
    normalized: &NormalizedText,
    subtype: NumericalSubtype,
) -> SolveOutcome<NumericalResult> {
    let solution = solve_numerical(normalized, subtype)?;

    Ok(NumericalResult {
        topic: Topic::NumericalReasoning,
        subtype: solution.subtype,
        answer: solution.answer,
        original_question: question.to_string(),
        steps: solution.steps,
    })
}
