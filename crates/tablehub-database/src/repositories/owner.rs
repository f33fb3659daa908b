//! Owner repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use tablehub_core::error::{AppError, ErrorKind};
use tablehub_core::result::AppResult;
use tablehub_entity::account::Owner;

/// Repository for owner accounts.
#[derive(Debug, Clone)]
pub struct OwnerRepository {
    pool: PgPool,
}

impl OwnerRepository {
    /// Create a new owner repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an owner by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Owner>> {
        sqlx::query_as::<_, Owner>("SELECT * FROM owners WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find owner", e))
    }

    /// Find an owner by login email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Owner>> {
        sqlx::query_as::<_, Owner>("SELECT * FROM owners WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find owner by email", e)
            })
    }

    /// Check whether an email is already registered.
    pub async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM owners WHERE email = $1")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check email uniqueness", e)
            })?;
        Ok(count > 0)
    }
}
