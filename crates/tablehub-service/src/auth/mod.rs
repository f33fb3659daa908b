//! Authentication service.

pub mod service;

pub use service::{AuthOutcome, AuthService};
