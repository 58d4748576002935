//! Fixed lexical tables used by the normalizer
//!
//! Both tables are process-wide constants. Patterns are compiled once on
//! first use and never mutated afterwards.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Number words recognised in questions, mapped to their digit form.
///
/// One table serves both tracks. The round numbers are needed by
/// numerical questions such as "twenty percent of fifty".
pub const NUMBER_WORDS: &[(&str, &str)] = &[
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
    ("ten", "10"),
    ("twenty", "20"),
    ("thirty", "30"),
    ("fifty", "50"),
    ("hundred", "100"),
];

/// Single alternation over every number word, so substitution does not
/// depend on table order.
static NUMBER_WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let words: Vec<&str> = NUMBER_WORDS.iter().map(|(word, _)| *word).collect();
    Regex::new(&format!(r"\b(?:{})\b", words.join("|"))).expect("number word pattern is valid")
});

/// Exponent phrasing rewrites, applied in this order.
static EXPONENT_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\bpower of (\d+)", "^$1"),
        (r"\bto the (\d+)", "^$1"),
        // "to the power of 3" leaves "to the ^3" behind
        (r"\bto the\s*\^", "^"),
        (r"\bsquared\b", "^2"),
        (r"\bsquare\b", "^2"),
        (r"\bcubed\b", "^3"),
        (r"\bcube\b", "^3"),
        // attach the exponent to its base: "x ^2" -> "x^2"
        (r"([0-9a-z)])\s+\^", "$1^"),
        // and the exponent to its caret: "x^ 2" -> "x^2"
        (r"\^\s+(\d)", "^$1"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("exponent pattern is valid"),
            replacement,
        )
    })
    .collect()
});

/// Looks up the digit string for a number word.
pub fn digit_for(word: &str) -> Option<&'static str> {
    NUMBER_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, digits)| *digits)
}

/// Replaces whole-word number words with digits.
pub fn substitute_number_words(text: &str) -> String {
    NUMBER_WORD_PATTERN
        .replace_all(text, |caps: &Captures| {
            let word = &caps[0];
            digit_for(word).unwrap_or(word).to_string()
        })
        .into_owned()
}

/// Rewrites spoken exponents ("squared", "power of 3") into `^N` notation.
pub fn canonicalize_exponents(text: &str) -> String {
    EXPONENT_RULES
        .iter()
        .fold(text.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        })
}
