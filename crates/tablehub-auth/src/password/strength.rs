//! Password strength checking against a k-anonymity breach corpus.
//!
//! Length bounds are checked locally; anything in range is then looked up
//! against a breach-range API by the first five hex characters of its SHA-1
//! digest. Only the prefix leaves the process.

use std::time::Duration;

use sha1::{Digest, Sha1};

use tablehub_core::config::auth::AuthConfig;
use tablehub_core::error::AppError;

/// Outcome of a strength check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    /// Acceptable: within length bounds and not found in the breach corpus.
    Strong,
    /// Rejected: out of bounds or present in the breach corpus.
    Weak,
}

/// Checks candidate passwords against local policy and the breach corpus.
#[derive(Debug, Clone)]
pub struct PasswordStrengthChecker {
    client: reqwest::Client,
    api_url: String,
    min_length: usize,
    max_length: usize,
}

impl PasswordStrengthChecker {
    /// Creates a new strength checker from configuration.
    ///
    /// The HTTP timeout is mandatory: a hung breach lookup must surface as a
    /// retryable failure, never stall the signup pipeline indefinitely.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.breach_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    tablehub_core::error::ErrorKind::Configuration,
                    format!("Failed to build breach-lookup client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            client,
            api_url: config.breach_api_url.trim_end_matches('/').to_string(),
            min_length: config.password_min_length,
            max_length: config.password_max_length,
        })
    }

    /// Check a candidate password.
    ///
    /// A transport or server failure during the breach lookup is returned as
    /// an `ExternalService` error, never as a strength verdict.
    pub async fn check(&self, password: &str) -> Result<PasswordStrength, AppError> {
        // Bounds are in characters, not bytes, so multibyte input is not
        // over-counted.
        let length = password.chars().count();
        if length < self.min_length || length > self.max_length {
            return Ok(PasswordStrength::Weak);
        }

        let digest = hex::encode(Sha1::digest(password.as_bytes())).to_uppercase();
        let (prefix, suffix) = digest.split_at(5);

        let url = format!("{}/{}", self.api_url, prefix);
        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::with_source(
                tablehub_core::error::ErrorKind::ExternalService,
                "Breach-corpus lookup failed",
                e,
            )
        })?;

        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Breach-corpus lookup returned status {}",
                response.status()
            )));
        }

        let body = response.text().await.map_err(|e| {
            AppError::with_source(
                tablehub_core::error::ErrorKind::ExternalService,
                "Failed to read breach-corpus response",
                e,
            )
        })?;

        if suffix_in_range_body(&body, suffix) {
            Ok(PasswordStrength::Weak)
        } else {
            Ok(PasswordStrength::Strong)
        }
    }
}

/// Scan a breach-range response body for an exact suffix match.
///
/// Each line has the form `SUFFIX:COUNT` with an uppercase 35-hex-char
/// suffix.
fn suffix_in_range_body(body: &str, suffix: &str) -> bool {
    body.lines().any(|line| {
        line.split(':')
            .next()
            .is_some_and(|candidate| candidate.trim().eq_ignore_ascii_case(suffix))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_match_found() {
        let body = "0018A45C4D1DEF81644B54AB7F969B88D65:1\n00D4F6E8FA6EECAD2A3AA415EEC418D38EC:2\n";
        assert!(suffix_in_range_body(
            body,
            "0018A45C4D1DEF81644B54AB7F969B88D65"
        ));
    }

    #[test]
    fn test_suffix_match_absent() {
        let body = "0018A45C4D1DEF81644B54AB7F969B88D65:1\n";
        assert!(!suffix_in_range_body(
            body,
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
        ));
    }

    #[test]
    fn test_suffix_match_case_insensitive() {
        let body = "0018a45c4d1def81644b54ab7f969b88d65:1\n";
        assert!(suffix_in_range_body(
            body,
            "0018A45C4D1DEF81644B54AB7F969B88D65"
        ));
    }

    #[tokio::test]
    async fn test_length_bounds_rejected_locally() {
        let checker = PasswordStrengthChecker::new(&AuthConfig::default()).unwrap();
        assert_eq!(checker.check("short").await.unwrap(), PasswordStrength::Weak);
        assert_eq!(
            checker.check(&"x".repeat(256)).await.unwrap(),
            PasswordStrength::Weak
        );
    }

    #[tokio::test]
    async fn test_length_bounds_count_chars_not_bytes() {
        let checker = PasswordStrengthChecker::new(&AuthConfig::default()).unwrap();
        // Seven characters, fourteen bytes: still under the minimum.
        assert_eq!(
            checker.check(&"ñ".repeat(7)).await.unwrap(),
            PasswordStrength::Weak
        );
    }
}
