//! # tablehub-database
//!
//! PostgreSQL connection management, migrations, and concrete repository
//! implementations for all TableHub entities, plus the transactional
//! account-provisioning unit of work.

pub mod connection;
pub mod migration;
pub mod provision;
pub mod repositories;

pub use connection::create_pool;
