//! Employee management for restaurant owners.

use std::sync::Arc;

use uuid::Uuid;

use tablehub_auth::password::hasher::CredentialHasher;
use tablehub_core::error::AppError;
use tablehub_core::result::AppResult;
use tablehub_database::repositories::employee::{CreateEmployee, EmployeeRepository};
use tablehub_entity::account::Employee;

/// PIN length bounds. Four to six digits, matching what the PIN pads on the
/// floor can enter.
const PIN_MIN_DIGITS: usize = 4;
const PIN_MAX_DIGITS: usize = 6;

/// Manages employee accounts under a restaurant.
#[derive(Debug, Clone)]
pub struct AccountService {
    employee_repo: Arc<EmployeeRepository>,
    hasher: Arc<CredentialHasher>,
}

impl AccountService {
    /// Create a new account service.
    pub fn new(employee_repo: Arc<EmployeeRepository>, hasher: Arc<CredentialHasher>) -> Self {
        Self {
            employee_repo,
            hasher,
        }
    }

    /// Create an employee with a hashed PIN.
    pub async fn create_employee(
        &self,
        restaurant_id: Uuid,
        name: &str,
        pin: &str,
    ) -> AppResult<Employee> {
        if name.trim().is_empty() {
            return Err(AppError::validation("employee name is required"));
        }
        validate_pin(pin)?;

        if self
            .employee_repo
            .find_by_restaurant_and_name(restaurant_id, name)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("employee name is already taken"));
        }

        let pin_hash = self.hasher.hash_pin(pin)?;
        self.employee_repo
            .create(&CreateEmployee {
                restaurant_id,
                name: name.to_string(),
                pin_hash,
            })
            .await
    }

    /// List all employees of a restaurant.
    pub async fn list_employees(&self, restaurant_id: Uuid) -> AppResult<Vec<Employee>> {
        self.employee_repo.find_by_restaurant(restaurant_id).await
    }
}

fn validate_pin(pin: &str) -> AppResult<()> {
    let digits_only = pin.chars().all(|c| c.is_ascii_digit());
    if !digits_only || pin.len() < PIN_MIN_DIGITS || pin.len() > PIN_MAX_DIGITS {
        return Err(AppError::validation("pin must be 4 to 6 digits"));
    }
    Ok(())
}
