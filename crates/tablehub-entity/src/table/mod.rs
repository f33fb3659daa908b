//! Dining table entity.

pub mod model;

pub use model::DiningTable;
