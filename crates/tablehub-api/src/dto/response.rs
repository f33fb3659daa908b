//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tablehub_entity::account::Principal;
use tablehub_entity::table::DiningTable;

/// Minimal public projection of an authenticated principal.
///
/// `email` is absent for employees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    /// Account id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email (owners only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<&Principal> for AccountResponse {
    fn from(principal: &Principal) -> Self {
        Self {
            id: principal.id(),
            name: principal.public_name(),
            email: principal.email().map(String::from),
        }
    }
}

/// Simple success flag response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always `true` on the success path.
    pub success: bool,
}

impl SuccessResponse {
    /// A `{"success": true}` body.
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Dining table projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableResponse {
    /// Table id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// QR payload.
    pub qr_code: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<DiningTable> for TableResponse {
    fn from(table: DiningTable) -> Self {
        Self {
            id: table.id,
            name: table.name,
            qr_code: table.qr_code,
            created_at: table.created_at,
        }
    }
}

/// Employee projection for owner-facing listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    /// Employee id.
    pub id: Uuid,
    /// Login name.
    pub name: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<tablehub_entity::account::Employee> for EmployeeResponse {
    fn from(employee: tablehub_entity::account::Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            created_at: employee.created_at,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status string.
    pub status: String,
    /// Crate version.
    pub version: String,
}
