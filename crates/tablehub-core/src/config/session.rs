//! Session lifetime configuration.

use serde::{Deserialize, Serialize};

/// Session lifetime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session time-to-live in hours. Sliding renewal extends a session by
    /// this amount once it crosses its half-life.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl_hours(),
            cookie_name: default_cookie_name(),
        }
    }
}

impl SessionConfig {
    /// The configured TTL as a chrono duration.
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.ttl_hours as i64)
    }
}

fn default_ttl_hours() -> u64 {
    720
}

fn default_cookie_name() -> String {
    "sessionToken".to_string()
}
