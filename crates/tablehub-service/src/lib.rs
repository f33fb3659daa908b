//! # tablehub-service
//!
//! Business service layer. Orchestrates the auth core (signup pipeline,
//! login flows, logout), employee management, and table CRUD on top of the
//! repository layer.

pub mod account;
pub mod auth;
pub mod table;
