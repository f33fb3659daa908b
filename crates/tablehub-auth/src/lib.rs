//! # tablehub-auth
//!
//! The authentication core: credential hashing (Argon2id, with a peppered
//! variant for low-entropy PINs), the opaque session token codec, the
//! sliding-expiration session validator, the invite-code gate, and the
//! breach-corpus password strength checker.

pub mod invite;
pub mod password;
pub mod session;
pub mod token;

pub use invite::{InviteCheck, InviteGate};
pub use password::hasher::CredentialHasher;
pub use password::strength::PasswordStrengthChecker;
pub use session::validator::{AuthenticatedSession, SessionValidation, SessionValidator};
