//! Rule matcher
//!
//! Maps a cleaned expression to one calculus rule. Tests run in strict
//! order on the whitespace-stripped expression; the first hit wins:
//!
//! 1. `x^N`            → power rule
//! 2. `x`              → linear rule
//! 3. `Nx` / `Nx^M`    → constant multiple rule
//! 4. contains `+`/`-` → sum rule
//! 5. `N`              → constant rule
//! 6. anything else    → power rule
//!
//! The last step is a permissive default, not an error path: near-miss
//! input still yields a playable animation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static POWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^x\^\d+$").expect("power pattern is valid"));
static LINEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^x$").expect("linear pattern is valid"));
static CONSTANT_MULTIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+x(\^\d+)?$").expect("constant multiple pattern is valid"));
static CONSTANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("constant pattern is valid"));

/// Calculus rule matched to an expression
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Fallback for anything the other tests do not recognise
    #[default]
    PowerRule,
    LinearRule,
    ConstantMultipleRule,
    SumRule,
    ConstantRule,
}

impl Rule {
    /// Returns the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::PowerRule => "power_rule",
            Rule::LinearRule => "linear_rule",
            Rule::ConstantMultipleRule => "constant_multiple_rule",
            Rule::SumRule => "sum_rule",
            Rule::ConstantRule => "constant_rule",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies the rule for an expression. Never fails.
pub fn identify_rule(expression: &str) -> Rule {
    let expr: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

    if POWER.is_match(&expr) {
        Rule::PowerRule
    } else if LINEAR.is_match(&expr) {
        Rule::LinearRule
    } else if CONSTANT_MULTIPLE.is_match(&expr) {
        Rule::ConstantMultipleRule
    } else if expr.contains('+') || expr.contains('-') {
        Rule::SumRule
    } else if CONSTANT.is_match(&expr) {
        Rule::ConstantRule
    } else {
        Rule::default()
    }
}
