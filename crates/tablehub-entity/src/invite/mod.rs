//! Invite code entity.

pub mod model;

pub use model::InviteCode;
