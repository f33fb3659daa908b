//! Authentication and credential configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Server-side salt prepended to employee PINs before hashing.
    /// Required; startup fails when empty.
    #[serde(default)]
    pub pin_salt: String,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_memory_cost")]
    pub argon2_memory_cost_kib: u32,
    /// Argon2 time cost (iterations).
    #[serde(default = "default_time_cost")]
    pub argon2_time_cost: u32,
    /// Argon2 lane count.
    #[serde(default = "default_parallelism")]
    pub argon2_parallelism: u32,
    /// Argon2 output length in bytes.
    #[serde(default = "default_output_len")]
    pub argon2_output_len: usize,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Maximum password length.
    #[serde(default = "default_password_max")]
    pub password_max_length: usize,
    /// Base URL of the k-anonymity breach-range API.
    #[serde(default = "default_breach_api_url")]
    pub breach_api_url: String,
    /// Timeout for breach-range lookups in seconds.
    #[serde(default = "default_breach_timeout")]
    pub breach_timeout_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            pin_salt: String::new(),
            argon2_memory_cost_kib: default_memory_cost(),
            argon2_time_cost: default_time_cost(),
            argon2_parallelism: default_parallelism(),
            argon2_output_len: default_output_len(),
            password_min_length: default_password_min(),
            password_max_length: default_password_max(),
            breach_api_url: default_breach_api_url(),
            breach_timeout_seconds: default_breach_timeout(),
        }
    }
}

fn default_memory_cost() -> u32 {
    19456
}

fn default_time_cost() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}

fn default_output_len() -> usize {
    32
}

fn default_password_min() -> usize {
    8
}

fn default_password_max() -> usize {
    255
}

fn default_breach_api_url() -> String {
    "https://api.pwnedpasswords.com/range".to_string()
}

fn default_breach_timeout() -> u64 {
    5
}
