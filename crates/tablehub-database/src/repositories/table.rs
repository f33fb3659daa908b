//! Dining table repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use tablehub_core::error::{AppError, ErrorKind};
use tablehub_core::result::AppResult;
use tablehub_entity::table::DiningTable;

/// Repository for dining tables.
#[derive(Debug, Clone)]
pub struct TableRepository {
    pool: PgPool,
}

impl TableRepository {
    /// Create a new table repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all tables of a restaurant.
    pub async fn find_by_restaurant(&self, restaurant_id: Uuid) -> AppResult<Vec<DiningTable>> {
        sqlx::query_as::<_, DiningTable>(
            "SELECT * FROM dining_tables WHERE restaurant_id = $1 ORDER BY created_at",
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tables", e))
    }

    /// Create a table with a placeholder QR payload.
    pub async fn create(&self, restaurant_id: Uuid, name: &str) -> AppResult<DiningTable> {
        sqlx::query_as::<_, DiningTable>(
            "INSERT INTO dining_tables (restaurant_id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(restaurant_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create table", e))
    }

    /// Delete a table scoped to its restaurant. Returns whether a row existed.
    pub async fn delete(&self, restaurant_id: Uuid, id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM dining_tables WHERE id = $1 AND restaurant_id = $2")
                .bind(id)
                .bind(restaurant_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete table", e)
                })?;
        Ok(result.rows_affected() > 0)
    }
}
