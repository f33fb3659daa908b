//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::account::PrincipalKind;

/// An active session.
///
/// Sessions are created on login or signup and destroyed on logout or
/// expiry. The raw bearer token is never persisted; lookup is by its
/// SHA-256 digest.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: i64,
    /// The principal this session belongs to.
    pub principal_id: Uuid,
    /// Which principal collection `principal_id` points into.
    pub principal_kind: PrincipalKind,
    /// Lowercase hex SHA-256 of the bearer token.
    pub hashed_token: String,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
    /// When the session expires. Mutated only by sliding renewal.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Check whether the session has expired as of `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Data required to create a new session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSession {
    /// The principal this session belongs to.
    pub principal_id: Uuid,
    /// Role discriminator.
    pub principal_kind: PrincipalKind,
    /// Lowercase hex SHA-256 of the bearer token.
    pub hashed_token: String,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}
