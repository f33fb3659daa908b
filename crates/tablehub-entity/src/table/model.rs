//! Dining table entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A physical table in a restaurant.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DiningTable {
    /// Unique table identifier.
    pub id: Uuid,
    /// The restaurant this table belongs to.
    pub restaurant_id: Uuid,
    /// Display name, e.g. "Table 4" or "Patio 2".
    pub name: String,
    /// QR payload for the table. Currently a placeholder string.
    pub qr_code: String,
    /// When the table was created.
    pub created_at: DateTime<Utc>,
}
