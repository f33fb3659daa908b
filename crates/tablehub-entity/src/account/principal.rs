//! Principal sum type and role discriminator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::employee::Employee;
use super::owner::Owner;

/// Role discriminator stored on every session row.
///
/// This is a closed set: the session validator matches exhaustively over it,
/// so adding a role is a compile-time-visible change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "principal_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PrincipalKind {
    /// Restaurant owner (email + password).
    Owner,
    /// Restaurant employee (name + PIN).
    Employee,
}

impl PrincipalKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Employee => "employee",
        }
    }
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PrincipalKind {
    type Err = tablehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "owner" => Ok(Self::Owner),
            "employee" => Ok(Self::Employee),
            _ => Err(tablehub_core::AppError::validation(format!(
                "Invalid principal kind: '{s}'. Expected one of: owner, employee"
            ))),
        }
    }
}

/// The authenticated entity a session resolves to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Principal {
    /// A restaurant owner.
    Owner(Owner),
    /// A restaurant employee.
    Employee(Employee),
}

impl Principal {
    /// The principal's account id.
    pub fn id(&self) -> Uuid {
        match self {
            Self::Owner(owner) => owner.id,
            Self::Employee(employee) => employee.id,
        }
    }

    /// The restaurant this principal belongs to.
    pub fn restaurant_id(&self) -> Uuid {
        match self {
            Self::Owner(owner) => owner.restaurant_id,
            Self::Employee(employee) => employee.restaurant_id,
        }
    }

    /// The role discriminator for this principal.
    pub fn kind(&self) -> PrincipalKind {
        match self {
            Self::Owner(_) => PrincipalKind::Owner,
            Self::Employee(_) => PrincipalKind::Employee,
        }
    }

    /// Display name for API projections.
    pub fn public_name(&self) -> String {
        match self {
            Self::Owner(owner) => owner.public_name(),
            Self::Employee(employee) => employee.name.clone(),
        }
    }

    /// Email, present only for owners.
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Owner(owner) => Some(&owner.email),
            Self::Employee(_) => None,
        }
    }
}
