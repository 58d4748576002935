//! Solve counters
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start
//!
//! The registry lives with the HTTP adapter. The engine itself keeps no
//! state between calls.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Metrics registry containing all operational counters
///
/// Increments use Relaxed ordering; counters are independent of each other.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    questions_received: AtomicU64,
    calculus_solved: AtomicU64,
    numerical_solved: AtomicU64,
    errors_returned: AtomicU64,
    requests_rejected: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_questions_received(&self) {
        self.questions_received.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_calculus_solved(&self) {
        self.calculus_solved.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_numerical_solved(&self) {
        self.numerical_solved.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts error results (still answered with 200)
    pub fn increment_errors_returned(&self) {
        self.errors_returned.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts requests refused before reaching the engine
    pub fn increment_requests_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            questions_received: self.questions_received.load(Ordering::Relaxed),
            calculus_solved: self.calculus_solved.load(Ordering::Relaxed),
            numerical_solved: self.numerical_solved.load(Ordering::Relaxed),
            errors_returned: self.errors_returned.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub questions_received: u64,
    pub calculus_solved: u64,
    pub numerical_solved: u64,
    pub errors_returned: u64,
    pub requests_rejected: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_zero_values() {
        let snapshot = MetricsRegistry::new().snapshot();
        assert_eq!(snapshot.questions_received, 0);
        assert_eq!(snapshot.calculus_solved, 0);
        assert_eq!(snapshot.numerical_solved, 0);
        assert_eq!(snapshot.errors_returned, 0);
        assert_eq!(snapshot.requests_rejected, 0);
    }

    #[test]
    fn test_increment_counters() {
        let registry = MetricsRegistry::new();

        registry.increment_questions_received();
        registry.increment_questions_received();
        registry.increment_calculus_solved();
        registry.increment_numerical_solved();
        registry.increment_errors_returned();
        registry.increment_requests_rejected();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.questions_received, 2);
        assert_eq!(snapshot.calculus_solved, 1);
        assert_eq!(snapshot.numerical_solved, 1);
        assert_eq!(snapshot.errors_returned, 1);
        assert_eq!(snapshot.requests_rejected, 1);
    }

    #[test]
    fn test_snapshot_serializes_flat() {
        let registry = MetricsRegistry::new();
        registry.increment_questions_received();
        registry.increment_numerical_solved();

        let parsed: serde_json::Value = serde_json::to_value(registry.snapshot()).unwrap();
        assert_eq!(parsed["questions_received"], 1);
        assert_eq!(parsed["numerical_solved"], 1);
        assert_eq!(parsed["calculus_solved"], 0);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(MetricsRegistry::new());
        let mut handles = vec![];

        for _ in 0..10 {
            let reg = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    reg.increment_questions_received();
                    reg.increment_calculus_solved();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.questions_received, 1000);
        assert_eq!(snapshot.calculus_solved, 1000);
    }
}
