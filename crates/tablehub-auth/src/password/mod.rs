//! Credential hashing and password policy.

pub mod hasher;
pub mod strength;
