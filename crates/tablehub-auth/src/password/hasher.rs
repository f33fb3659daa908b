//! Argon2id hashing and verification for passwords and employee PINs.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use tablehub_core::config::auth::AuthConfig;
use tablehub_core::error::AppError;

/// Handles password and PIN hashing using Argon2id.
///
/// PINs are peppered with a server-side salt constant before hashing: a
/// 4-6 digit PIN has so little entropy that a stolen hash table would fall
/// to offline search without it.
#[derive(Debug, Clone)]
pub struct CredentialHasher {
    memory_cost_kib: u32,
    time_cost: u32,
    parallelism: u32,
    output_len: usize,
    pin_salt: String,
}

impl CredentialHasher {
    /// Creates a new credential hasher from configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            memory_cost_kib: config.argon2_memory_cost_kib,
            time_cost: config.argon2_time_cost,
            parallelism: config.argon2_parallelism,
            output_len: config.argon2_output_len,
            pin_salt: config.pin_salt.clone(),
        }
    }

    fn argon2(&self) -> Result<Argon2<'static>, AppError> {
        let params = Params::new(
            self.memory_cost_kib,
            self.time_cost,
            self.parallelism,
            Some(self.output_len),
        )
        .map_err(|e| AppError::internal(format!("Invalid Argon2 parameters: {e}")))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    /// Hashes a plaintext password with a random per-hash salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        self.hash_secret(password.as_bytes())
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        self.verify_secret(password.as_bytes(), hash)
    }

    /// Hashes an employee PIN, prepending the server-side salt first.
    pub fn hash_pin(&self, pin: &str) -> Result<String, AppError> {
        self.hash_secret(self.peppered_pin(pin).as_bytes())
    }

    /// Verifies an employee PIN against a stored hash.
    pub fn verify_pin(&self, pin: &str, hash: &str) -> Result<bool, AppError> {
        self.verify_secret(self.peppered_pin(pin).as_bytes(), hash)
    }

    fn peppered_pin(&self, pin: &str) -> String {
        format!("{}{}", self.pin_salt, pin)
    }

    fn hash_secret(&self, secret: &[u8]) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()?
            .hash_password(secret, &salt)
            .map_err(|e| AppError::internal(format!("Credential hashing failed: {e}")))?;
        Ok(hash.to_string())
    }

    fn verify_secret(&self, secret: &[u8], hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid credential hash format: {e}")))?;

        match self.argon2()?.verify_password(secret, &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Credential verification failed: {e}"
            ))),
        }
    }
}
