//! Employee repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use tablehub_core::error::{AppError, ErrorKind};
use tablehub_core::result::AppResult;
use tablehub_entity::account::Employee;

/// Data required to create an employee.
#[derive(Debug, Clone)]
pub struct CreateEmployee {
    /// Target restaurant.
    pub restaurant_id: Uuid,
    /// Login name, unique within the restaurant.
    pub name: String,
    /// Salted Argon2id PIN hash.
    pub pin_hash: String,
}

/// Repository for employee accounts.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    /// Create a new employee repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an employee by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find employee", e))
    }

    /// Find an employee by restaurant and login name.
    pub async fn find_by_restaurant_and_name(
        &self,
        restaurant_id: Uuid,
        name: &str,
    ) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees WHERE restaurant_id = $1 AND name = $2",
        )
        .bind(restaurant_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find employee by name", e)
        })
    }

    /// List all employees of a restaurant.
    pub async fn find_by_restaurant(&self, restaurant_id: Uuid) -> AppResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees WHERE restaurant_id = $1 ORDER BY created_at",
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list employees", e))
    }

    /// Create a new employee.
    pub async fn create(&self, data: &CreateEmployee) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (restaurant_id, name, pin_hash) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.restaurant_id)
        .bind(&data.name)
        .bind(&data.pin_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create employee", e))
    }
}
