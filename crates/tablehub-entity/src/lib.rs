//! # tablehub-entity
//!
//! Domain entity models for TableHub: restaurants, owners, employees,
//! sessions, invite codes, and dining tables. Entities map 1:1 to database
//! rows via `sqlx::FromRow`.

pub mod account;
pub mod invite;
pub mod restaurant;
pub mod session;
pub mod table;
