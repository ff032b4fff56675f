// src/policy.rs

//! Publication rules for questions.
//!
//! Both predicates are pure functions of the publication timestamp and the
//! evaluation time, so callers pass `now` explicitly instead of reading the clock.

use chrono::{DateTime, Duration, Utc};

/// How far back a publication still counts as "recent".
pub fn recent_window() -> Duration {
    Duration::days(1)
}

/// A question is publicly visible once its publication time has been reached.
pub fn is_publicly_visible(pub_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    pub_date <= now
}

/// True iff `pub_date` lies in `(now - 1 day, now]`.
///
/// Compares the elapsed time instead of computing `now - 1 day`, which would
/// overflow near the start of the representable range.
pub fn is_recently_published(pub_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    pub_date <= now && now.signed_duration_since(pub_date) < recent_window()
}
