//! Observable events
//!
//! Events are explicit and typed. Each carries the severity it is logged at.

use std::fmt;

use super::Severity;

/// Observable events in stepwise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// HTTP adapter bound and serving
    ServerStart,
    /// HTTP adapter stopped
    ServerStop,

    // Questions
    /// Question accepted by an adapter
    QuestionReceived,
    /// Topic and sub-type decided
    QuestionClassified,
    /// Engine produced a calculus or numerical result
    QuestionSolved,
    /// Engine produced an error result
    QuestionUnsupported,
    /// Adapter refused the input before the engine saw it
    RequestRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStart => "SERVER_START",
            Event::ServerStop => "SERVER_STOP",
            Event::QuestionReceived => "QUESTION_RECEIVED",
            Event::QuestionClassified => "QUESTION_CLASSIFIED",
            Event::QuestionSolved => "QUESTION_SOLVED",
            Event::QuestionUnsupported => "QUESTION_UNSUPPORTED",
            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::QuestionClassified | Event::QuestionUnsupported => Severity::Trace,
            Event::RequestRejected => Severity::Warn,
            Event::ConfigLoaded
            | Event::ServerStart
            | Event::ServerStop
            | Event::QuestionReceived
            | Event::QuestionSolved => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
