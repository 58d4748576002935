//! Question normalizer
//!
//! Produces the canonical text both tracks match against.
//!
//! # Steps (strict order)
//!
//! 1. Trim and lowercase
//! 2. Number words → digits (whole words only)
//! 3. Exponent phrasing → `^N`
//!
//! No other rewriting occurs.

mod lexicon;

use std::fmt;

use serde::Serialize;

pub use lexicon::{canonicalize_exponents, digit_for, substitute_number_words, NUMBER_WORDS};

/// Lowercased question text after number-word and exponent rewriting.
///
/// Only [`normalize`] creates one, so the text always reflects the full
/// normalization pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Returns the normalized text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks for a literal substring
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    /// Consumes the wrapper
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes a raw question.
pub fn normalize(raw: &str) -> NormalizedText {
    let lowered = raw.trim().to_lowercase();
    let digits = substitute_number_words(&lowered);
    NormalizedText(canonicalize_exponents(&digits))
}
