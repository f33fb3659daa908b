//! Session repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use tablehub_core::error::{AppError, ErrorKind};
use tablehub_core::result::AppResult;
use tablehub_entity::session::{CreateSession, Session};

/// Repository for session rows.
///
/// Sessions are owned exclusively by this repository; no other code writes
/// the `sessions` table.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new session and return the full record.
    pub async fn create(&self, data: &CreateSession) -> AppResult<Session> {
        sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (principal_id, principal_kind, hashed_token, expires_at) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.principal_id)
        .bind(data.principal_kind)
        .bind(&data.hashed_token)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))
    }

    /// Find a session by its token digest.
    pub async fn find_by_hashed_token(&self, hashed_token: &str) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE hashed_token = $1")
            .bind(hashed_token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find session by token", e)
            })
    }

    /// Extend a session's expiry (sliding renewal). Idempotent under
    /// concurrent identical requests.
    pub async fn extend_expiry(
        &self,
        session_id: i64,
        new_expires_at: DateTime<Utc>,
    ) -> AppResult<()> {
        sqlx::query("UPDATE sessions SET expires_at = $2 WHERE id = $1")
            .bind(session_id)
            .bind(new_expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to extend session expiry", e)
            })?;
        Ok(())
    }

    /// Delete a session by its token digest. Returns whether a row existed.
    pub async fn delete_by_hashed_token(&self, hashed_token: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE hashed_token = $1")
            .bind(hashed_token)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete session", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a session by ID.
    pub async fn delete(&self, session_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete session", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Invalidate every session belonging to a principal. Returns the number
    /// of sessions removed.
    pub async fn delete_all_for_principal(&self, principal_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE principal_id = $1")
            .bind(principal_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete principal sessions", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Housekeeping sweep: delete sessions whose expiry is at or before `now`.
    pub async fn cleanup_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= $1")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clean up expired sessions", e)
            })?;
        Ok(result.rows_affected())
    }
}
