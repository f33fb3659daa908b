//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Owner signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Login email.
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    /// Invite code gating signup.
    #[serde(rename = "inviteCode")]
    #[validate(length(min = 1, message = "invite code is required"))]
    pub invite_code: String,
}

/// Owner login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Employee login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmployeeLoginRequest {
    /// Restaurant the employee belongs to.
    #[serde(rename = "restaurantId")]
    pub restaurant_id: Uuid,
    /// Employee login name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Numeric PIN.
    #[validate(length(min = 1, message = "pin is required"))]
    pub pin: String,
}

/// Create employee request (owner-only).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    /// Employee login name.
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    /// Numeric PIN, 4 to 6 digits.
    #[validate(length(min = 4, max = 6, message = "pin must be 4 to 6 digits"))]
    pub pin: String,
}

/// Create dining table request (owner-only).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTableRequest {
    /// Table display name.
    #[validate(length(min = 1, max = 100, message = "table name is required"))]
    pub name: String,
}
