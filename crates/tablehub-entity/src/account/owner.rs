//! Owner account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A restaurant owner account.
///
/// Owners authenticate with email and password. Email is unique across the
/// whole owner collection, not per restaurant.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Owner {
    /// Unique owner identifier.
    pub id: Uuid,
    /// The restaurant this owner manages.
    pub restaurant_id: Uuid,
    /// Login email (unique).
    pub email: String,
    /// Argon2id password hash. Never serialized to API responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Optional display name.
    pub display_name: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Owner {
    /// The name shown in API responses: display name when set, otherwise the
    /// email local part.
    pub fn public_name(&self) -> String {
        match &self.display_name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => self
                .email
                .split('@')
                .next()
                .unwrap_or(&self.email)
                .to_string(),
        }
    }
}
