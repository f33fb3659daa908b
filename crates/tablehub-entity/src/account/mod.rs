//! Account entities: owners, employees, and the principal sum type.

pub mod employee;
pub mod owner;
pub mod principal;

pub use employee::Employee;
pub use owner::Owner;
pub use principal::{Principal, PrincipalKind};
