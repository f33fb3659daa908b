//! Invite code repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use tablehub_core::error::{AppError, ErrorKind};
use tablehub_core::result::AppResult;
use tablehub_entity::invite::InviteCode;

/// Repository for invite codes.
#[derive(Debug, Clone)]
pub struct InviteRepository {
    pool: PgPool,
}

impl InviteRepository {
    /// Create a new invite repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Look up an invite by its code string.
    pub async fn find_by_code(&self, code: &str) -> AppResult<Option<InviteCode>> {
        sqlx::query_as::<_, InviteCode>("SELECT * FROM invite_codes WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find invite code", e)
            })
    }

    /// Create an invite code valid until `expires_at`.
    pub async fn create(&self, code: &str, expires_at: DateTime<Utc>) -> AppResult<InviteCode> {
        sqlx::query_as::<_, InviteCode>(
            "INSERT INTO invite_codes (code, expires_at) VALUES ($1, $2) RETURNING *",
        )
        .bind(code)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create invite code", e))
    }

    /// Consume an invite atomically.
    ///
    /// The conditional update is the single point that enforces single-use:
    /// under concurrent attempts at most one caller sees a row update.
    /// Returns `false` when the code was already consumed, expired, or
    /// missing.
    pub async fn consume(&self, code: &str, consumer_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE invite_codes SET used_by = $2, used_at = NOW() \
             WHERE code = $1 AND used_by IS NULL AND expires_at > NOW()",
        )
        .bind(code)
        .bind(consumer_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to consume invite", e))?;
        Ok(result.rows_affected() > 0)
    }
}
