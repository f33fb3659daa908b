//! Concrete repository implementations, one per entity.

pub mod employee;
pub mod invite;
pub mod owner;
pub mod session;
pub mod table;
