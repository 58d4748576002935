//! Topic classifier
//!
//! Routes a normalized question to the symbolic-calculus track or the
//! numerical-reasoning track, and within each track picks the topic or
//! numerical sub-type. Classification is pure keyword/regex matching; no
//! statistical scoring is involved, so identical text always routes
//! identically.

mod detect;
mod types;

pub use detect::{calculus_topic, classify, is_calculus, numerical_subtype};
pub use types::{Classification, NumericalSubtype, Topic};
