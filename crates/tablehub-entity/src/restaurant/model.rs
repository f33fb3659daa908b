//! Restaurant entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A restaurant tenant. Created together with its first owner at signup.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Restaurant {
    /// Unique restaurant identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// When the restaurant was created.
    pub created_at: DateTime<Utc>,
}
