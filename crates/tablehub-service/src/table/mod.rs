//! Dining table management.

pub mod service;

pub use service::TableService;
