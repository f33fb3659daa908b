//! Session validation.

pub mod validator;
