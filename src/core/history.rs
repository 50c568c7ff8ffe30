//! Caller-owned audit trail of applied transitions.
//!
//! The engine itself stores nothing per host; callers that want an audit
//! trail keep a [`TransitionLog`] next to each host and record what
//! [`fire`](crate::Machine::fire) returns. Recording is immutable — it
//! returns a new log — so a log value can be shared and compared freely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use statecraft::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     event: "pay".to_string(),
///     from: "pending".to_string(),
///     to: "paid".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, "paid");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The event that caused the transition.
    pub event: String,
    /// The state name transitioned from.
    pub from: String,
    /// The state name transitioned to.
    pub to: String,
    /// When the transition was applied.
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied transitions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new log. The original is unchanged.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// The state names traversed: the first record's `from`, then each
    /// record's `to`, in order. Empty for an empty log.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Elapsed time between the first and last recorded transition, `None`
    /// for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All recorded transitions in order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(event: &str, from: &str, to: &str) -> TransitionRecord {
        TransitionRecord {
            event: event.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log = TransitionLog::new();
        assert!(log.records().is_empty());
        assert!(log.path().is_empty());
        assert!(log.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let log = TransitionLog::new();
        let updated = log.record(record("pay", "pending", "paid"));

        assert_eq!(log.records().len(), 0);
        assert_eq!(updated.records().len(), 1);
    }

    #[test]
    fn path_lists_states_traversed() {
        let log = TransitionLog::new()
            .record(record("pay", "pending", "paid"))
            .record(record("ship", "paid", "shipped"));

        assert_eq!(log.path(), ["pending", "paid", "shipped"]);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let base = Utc::now();
        let log = TransitionLog::new()
            .record(TransitionRecord {
                event: "pay".to_string(),
                from: "pending".to_string(),
                to: "paid".to_string(),
                timestamp: base,
            })
            .record(TransitionRecord {
                event: "ship".to_string(),
                from: "paid".to_string(),
                to: "shipped".to_string(),
                timestamp: base + chrono::Duration::seconds(3),
            });

        assert_eq!(log.duration(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn single_record_has_zero_duration() {
        let log = TransitionLog::new().record(record("pay", "pending", "paid"));
        assert_eq!(log.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn log_round_trips_through_json() {
        let log = TransitionLog::new().record(record("pay", "pending", "paid"));

        let json = serde_json::to_string(&log).unwrap();
        let back: TransitionLog = serde_json::from_str(&json).unwrap();

        assert_eq!(back.records(), log.records());
    }
}
