//! Record lifecycle timestamps.
//!
//! Repositories stamp these explicitly right before each write instead of
//! relying on database defaults or ORM hooks.

use chrono::{DateTime, Utc};

/// Creation and last-update instants of a persisted record.
///
/// Invariant: `created_at <= updated_at`, and `updated_at` never decreases
/// across writes of the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    pub fn new(created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            updated_at,
        }
    }

    /// Stamps for a record about to be inserted. A single clock read feeds
    /// both fields so they are equal.
    pub fn on_create(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Stamps for a record about to be rewritten at `now`.
    ///
    /// `created_at` is carried over untouched. If the wall clock went
    /// backwards the previous `updated_at` is kept.
    pub fn on_update(self, now: DateTime<Utc>) -> Self {
        Self {
            created_at: self.created_at,
            updated_at: now.max(self.updated_at),
        }
    }
}
