//! Invite code entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single-use, time-bound invite code gating owner signup.
///
/// Lifecycle: unused (`used_by` null) transitions at most once to consumed
/// (`used_by` and `used_at` set). An expired-but-unconsumed code stays in
/// the table; expiry only blocks new consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct InviteCode {
    /// Unique invite identifier.
    pub id: i64,
    /// The code string presented at signup (unique).
    pub code: String,
    /// The owner account that consumed this code, if any.
    pub used_by: Option<Uuid>,
    /// When the code was consumed.
    pub used_at: Option<DateTime<Utc>>,
    /// After this instant the code can no longer be consumed.
    pub expires_at: DateTime<Utc>,
    /// When the code was created.
    pub created_at: DateTime<Utc>,
}

impl InviteCode {
    /// Whether the code has already been consumed.
    pub fn is_consumed(&self) -> bool {
        self.used_by.is_some()
    }

    /// Whether the code is past its expiry as of `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
