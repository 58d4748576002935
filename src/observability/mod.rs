//! Observability subsystem
//!
//! - Structured logging (JSON, stderr)
//! - Solve counters
//! - Typed events
//!
//! Observability is read-only: nothing here changes what `solve` returns.
//!
//! ```ignore
//! use stepwise::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::QuestionReceived, &[("request_id", &id)]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_questions_received();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity, LOG_ENV_VAR};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log an event at its own severity, with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
