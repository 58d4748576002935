//! Solver error types
//!
//! Error codes:
//! - STEP_PERCENTAGE_FORMAT (EXTRACTION_MISS)
//! - STEP_UNITARY_FORMAT (EXTRACTION_MISS)
//! - STEP_DISTANCE_FORMAT (EXTRACTION_MISS)
//! - STEP_TIME_FORMAT (EXTRACTION_MISS)
//! - STEP_UNSUPPORTED_QUESTION (UNSUPPORTED)
//! - STEP_FLOW_UNMAPPED (INTERNAL)
//!
//! None of these ever leave `solve` as a fault. The dispatcher turns every
//! one of them into an error result whose message is the hint below.

use std::fmt;

/// How a failure came about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A micro-solver pattern did not match
    ExtractionMiss,
    /// No micro-solver exists for the classification
    Unsupported,
    /// A lookup the engine should always satisfy came up empty
    Internal,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ExtractionMiss => "EXTRACTION_MISS",
            Category::Unsupported => "UNSUPPORTED",
            Category::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Solver error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveErrorCode {
    /// Percentage question without "N percent of M"
    StepPercentageFormat,
    /// Cost question without a usable unit price and quantity
    StepUnitaryFormat,
    /// Distance question without "D km in 1 hour ... how far in T hours"
    StepDistanceFormat,
    /// Time question without "H:MM to H:MM"
    StepTimeFormat,
    /// Question outside every supported sub-type
    StepUnsupportedQuestion,
    /// No animation flow for the (topic, rule) pair
    StepFlowUnmapped,
}

impl SolveErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SolveErrorCode::StepPercentageFormat => "STEP_PERCENTAGE_FORMAT",
            SolveErrorCode::StepUnitaryFormat => "STEP_UNITARY_FORMAT",
            SolveErrorCode::StepDistanceFormat => "STEP_DISTANCE_FORMAT",
            SolveErrorCode::StepTimeFormat => "STEP_TIME_FORMAT",
            SolveErrorCode::StepUnsupportedQuestion => "STEP_UNSUPPORTED_QUESTION",
            SolveErrorCode::StepFlowUnmapped => "STEP_FLOW_UNMAPPED",
        }
    }

    /// Returns the failure category
    pub fn category(&self) -> Category {
        match self {
            SolveErrorCode::StepPercentageFormat
            | SolveErrorCode::StepUnitaryFormat
            | SolveErrorCode::StepDistanceFormat
            | SolveErrorCode::StepTimeFormat => Category::ExtractionMiss,
            SolveErrorCode::StepUnsupportedQuestion => Category::Unsupported,
            SolveErrorCode::StepFlowUnmapped => Category::Internal,
        }
    }

    /// Returns the user-facing hint. Each one names an accepted phrasing.
    pub fn hint(&self) -> &'static str {
        match self {
            SolveErrorCode::StepPercentageFormat => {
                "I can help with questions like 'What is 20 percent of 50?'"
            }
            SolveErrorCode::StepUnitaryFormat => {
                "Please ask in the format: 'If 1 pen costs 10, how much do 4 pens cost?'"
            }
            SolveErrorCode::StepDistanceFormat => {
                "I can help with questions like 'A car goes 50 km in 1 hour. How far in 3 hours?'"
            }
            SolveErrorCode::StepTimeFormat => {
                "I can help with time questions like 'How many minutes from 2:30 to 3:15?'"
            }
            SolveErrorCode::StepUnsupportedQuestion => {
                "I can help with numerical reasoning like percentages, costs, distance, and time."
            }
            SolveErrorCode::StepFlowUnmapped => {
                "I can help with basic differentiation and integration like x, x^2, and x^2 + x."
            }
        }
    }
}

impl fmt::Display for SolveErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Solver error with its user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveError {
    code: SolveErrorCode,
    message: String,
}

impl SolveError {
    /// Creates an error carrying the code's standard hint
    pub fn new(code: SolveErrorCode) -> Self {
        Self {
            code,
            message: code.hint().to_string(),
        }
    }

    pub fn percentage_format() -> Self {
        Self::new(SolveErrorCode::StepPercentageFormat)
    }

    pub fn unitary_format() -> Self {
        Self::new(SolveErrorCode::StepUnitaryFormat)
    }

    pub fn distance_format() -> Self {
        Self::new(SolveErrorCode::StepDistanceFormat)
    }

    pub fn time_format() -> Self {
        Self::new(SolveErrorCode::StepTimeFormat)
    }

    pub fn unsupported() -> Self {
        Self::new(SolveErrorCode::StepUnsupportedQuestion)
    }

    pub fn flow_unmapped() -> Self {
        Self::new(SolveErrorCode::StepFlowUnmapped)
    }

    /// Returns the error code
    pub fn code(&self) -> SolveErrorCode {
        self.code
    }

    /// Returns the failure category
    pub fn category(&self) -> Category {
        self.code.category()
    }

    /// Returns the user-facing message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.category(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for SolveError {}

/// Result type for solver operations
pub type SolveOutcome<T> = Result<T, SolveError>;
