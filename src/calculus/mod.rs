//! Symbolic-calculus track
//!
//! Turns a calculus question into a rule and an animation flow.
//!
//! # Pipeline (strict order)
//!
//! 1. Limits extraction (independent of topic)
//! 2. Expression cleanup (phrase stripping)
//! 3. Rule matching (ordered pattern tests, power rule fallback)
//! 4. Flow composition (fixed lookup)
//!
//! Nothing in this track can fail for a calculus topic: near-miss input
//! still produces a playable flow.

mod extractor;
mod flow;
mod rules;
mod terms;

pub use extractor::{extract_expression, extract_limits, Limits};
pub use flow::{compose_flow, AnimationFlow, AnimationStage};
pub use rules::{identify_rule, Rule};
pub use terms::{
    differentiate_term, integrate_term, parse_polynomial, solve_terms, SolvedTerm, Term,
    TermKind, TermOutcome,
};
