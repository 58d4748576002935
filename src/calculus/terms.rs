//! Per-term worked results for polynomial expressions
//!
//! Lets a renderer show each part of `3x^2 + 2x` being solved side by side.
//! Only the monomial grammar `<digits?>(x(^<digits>)?)?` is understood; any
//! other term makes the whole expression unparseable.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::classifier::Topic;

static MONOMIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<coeff>\d*)(?P<var>x(?:\^(?P<power>\d+))?)?$").expect("monomial pattern is valid")
});

/// Shape of a single term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermKind {
    Constant,
    Linear,
    Power,
}

/// One signed monomial of a polynomial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Term as written, with a leading `-` when negative
    pub original: String,
    pub coefficient: i64,
    pub power: u32,
    #[serde(rename = "type")]
    pub kind: TermKind,
}

/// Outcome of differentiating or integrating one term.
///
/// `numerator / denominator` is the new coefficient; the denominator is 1
/// for derivatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermOutcome {
    pub numerator: i64,
    pub denominator: i64,
    pub power: u32,
    pub text: String,
}

/// A term together with its worked result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedTerm {
    #[serde(flatten)]
    pub term: Term,
    pub result: TermOutcome,
}

fn parse_term(raw: &str, negative: bool) -> Option<Term> {
    if raw.is_empty() {
        return None;
    }
    let caps = MONOMIAL.captures(raw)?;

    let coefficient = match caps.name("coeff").map(|m| m.as_str()) {
        None | Some("") => 1,
        Some(digits) => digits.parse::<i64>().ok()?,
    };
    let has_var = caps.name("var").is_some();

    let power = match (has_var, caps.name("power")) {
        (false, _) => 0,
        (true, None) => 1,
        (true, Some(p)) => p.as_str().parse::<u32>().ok()?,
    };

    let kind = match (has_var, power) {
        (false, _) => TermKind::Constant,
        (true, 1) => TermKind::Linear,
        (true, _) => TermKind::Power,
    };

    Some(Term {
        original: if negative {
            format!("-{raw}")
        } else {
            raw.to_string()
        },
        coefficient: if negative { -coefficient } else { coefficient },
        power,
        kind,
    })
}

/// Splits a polynomial into signed terms.
///
/// Returns `None` when any term falls outside the monomial grammar.
pub fn parse_polynomial(expression: &str) -> Option<Vec<Term>> {
    let clean: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    if clean.is_empty() {
        return None;
    }

    let mut terms = Vec::new();
    let mut negative = false;
    let mut current = String::new();

    for c in clean.chars() {
        match c {
            '+' | '-' => {
                if !current.is_empty() {
                    terms.push(parse_term(&current, negative)?);
                    current.clear();
                }
                negative = c == '-';
            }
            _ => current.push(c),
        }
    }
    if current.is_empty() {
        // dangling operator
        return None;
    }
    terms.push(parse_term(&current, negative)?);

    Some(terms)
}

fn variable_text(power: u32) -> String {
    match power {
        0 => String::new(),
        1 => "x".to_string(),
        n => format!("x^{n}"),
    }
}

fn coefficient_text(coefficient: i64, power: u32) -> String {
    match coefficient {
        1 if power != 0 => String::new(),
        -1 if power != 0 => "-".to_string(),
        c => c.to_string(),
    }
}

/// Differentiates one term with the power rule.
pub fn differentiate_term(term: &Term) -> TermOutcome {
    if term.kind == TermKind::Constant {
        return TermOutcome {
            numerator: 0,
            denominator: 1,
            power: 0,
            text: "0".to_string(),
        };
    }

    let numerator = term.coefficient.saturating_mul(i64::from(term.power));
    let power = term.power.saturating_sub(1);
    let text = if numerator == 0 {
        "0".to_string()
    } else {
        format!(
            "{}{}",
            coefficient_text(numerator, power),
            variable_text(power)
        )
    };

    TermOutcome {
        numerator,
        denominator: 1,
        power,
        text,
    }
}

/// Integrates one term with the reverse power rule (no `+ C`).
pub fn integrate_term(term: &Term) -> TermOutcome {
    let power = term.power.saturating_add(1);
    let denominator = i64::from(power);
    let numerator = term.coefficient;

    let text = if numerator % denominator == 0 {
        format!(
            "{}{}",
            coefficient_text(numerator / denominator, power),
            variable_text(power)
        )
    } else {
        format!("({numerator}/{denominator}){}", variable_text(power))
    };

    TermOutcome {
        numerator,
        denominator,
        power,
        text,
    }
}

/// Solves every term of a polynomial for the given topic.
///
/// Yields an empty list for unparseable expressions and for the numerical
/// topic.
pub fn solve_terms(expression: &str, topic: Topic) -> Vec<SolvedTerm> {
    let solve: fn(&Term) -> TermOutcome = match topic {
        Topic::Differentiation => differentiate_term,
        Topic::Integration => integrate_term,
        Topic::NumericalReasoning => return Vec::new(),
    };

    parse_polynomial(expression)
        .unwrap_or_default()
        .into_iter()
        .map(|term| {
            let result = solve(&term);
            SolvedTerm { term, result }
        })
        .collect()
}
