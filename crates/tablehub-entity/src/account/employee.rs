//! Employee account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A restaurant employee account.
///
/// Employees authenticate with their name and a numeric PIN, scoped to a
/// single restaurant. Names are unique per restaurant.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: Uuid,
    /// The restaurant this employee belongs to.
    pub restaurant_id: Uuid,
    /// Login name (unique within the restaurant).
    pub name: String,
    /// Salted Argon2id PIN hash. Never serialized to API responses.
    #[serde(skip_serializing)]
    pub pin_hash: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}
