//! Dining table CRUD scoped to a restaurant.

use std::sync::Arc;

use uuid::Uuid;

use tablehub_core::error::AppError;
use tablehub_core::result::AppResult;
use tablehub_database::repositories::table::TableRepository;
use tablehub_entity::table::DiningTable;

/// Manages dining tables under a restaurant.
#[derive(Debug, Clone)]
pub struct TableService {
    table_repo: Arc<TableRepository>,
}

impl TableService {
    /// Create a new table service.
    pub fn new(table_repo: Arc<TableRepository>) -> Self {
        Self { table_repo }
    }

    /// Create a dining table.
    pub async fn create_table(&self, restaurant_id: Uuid, name: &str) -> AppResult<DiningTable> {
        if name.trim().is_empty() {
            return Err(AppError::validation("table name is required"));
        }
        self.table_repo.create(restaurant_id, name).await
    }

    /// List all tables of a restaurant.
    pub async fn list_tables(&self, restaurant_id: Uuid) -> AppResult<Vec<DiningTable>> {
        self.table_repo.find_by_restaurant(restaurant_id).await
    }

    /// Delete a table. Scoped to the restaurant so one tenant cannot delete
    /// another's tables by id.
    pub async fn delete_table(&self, restaurant_id: Uuid, table_id: Uuid) -> AppResult<()> {
        if !self.table_repo.delete(restaurant_id, table_id).await? {
            return Err(AppError::not_found("table not found"));
        }
        Ok(())
    }
}
