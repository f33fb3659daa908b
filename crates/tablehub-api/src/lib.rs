//! # tablehub-api
//!
//! HTTP API layer for TableHub built on Axum.
//!
//! Provides the REST endpoints, session-cookie handling, extractors, DTOs,
//! and error mapping.

pub mod cookie;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
