//! Session validator: raw token to live principal, with sliding renewal.
//!
//! Validation runs against the store on every request; there is no
//! in-process cache, because expiry deletion and renewal are side effects
//! that must stay consistent with the single source of truth.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::warn;

use tablehub_core::result::AppResult;
use tablehub_database::repositories::employee::EmployeeRepository;
use tablehub_database::repositories::owner::OwnerRepository;
use tablehub_database::repositories::session::SessionRepository;
use tablehub_entity::account::{Principal, PrincipalKind};
use tablehub_entity::session::Session;

use crate::token::hash_session_token;

/// A validated session with its resolved principal.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    /// The live session row (expiry already renewed if due).
    pub session: Session,
    /// The principal the session belongs to.
    pub principal: Principal,
}

/// Result of validating a bearer token.
#[derive(Debug, Clone)]
pub enum SessionValidation {
    /// Token resolved to a live principal.
    Authenticated(AuthenticatedSession),
    /// Token absent, unknown, dangling, or expired.
    Unauthenticated,
}

/// What to do with a live session's expiry, given the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExpiryDisposition {
    /// Past expiry: delete, never renew.
    Expired,
    /// Inside the renewal window: extend to the new instant.
    Renew(DateTime<Utc>),
    /// Fresh: leave untouched.
    Keep,
}

/// Resolves raw bearer tokens to principals, applying expiry and sliding
/// renewal.
#[derive(Debug, Clone)]
pub struct SessionValidator {
    session_repo: Arc<SessionRepository>,
    owner_repo: Arc<OwnerRepository>,
    employee_repo: Arc<EmployeeRepository>,
    ttl: Duration,
}

impl SessionValidator {
    /// Create a new session validator with the configured TTL.
    pub fn new(
        session_repo: Arc<SessionRepository>,
        owner_repo: Arc<OwnerRepository>,
        employee_repo: Arc<EmployeeRepository>,
        ttl: Duration,
    ) -> Self {
        Self {
            session_repo,
            owner_repo,
            employee_repo,
            ttl,
        }
    }

    /// Validate a bearer token, if one was presented.
    pub async fn validate(&self, token: Option<&str>) -> AppResult<SessionValidation> {
        let Some(token) = token else {
            return Ok(SessionValidation::Unauthenticated);
        };

        let hashed = hash_session_token(token);
        let Some(mut session) = self.session_repo.find_by_hashed_token(&hashed).await? else {
            return Ok(SessionValidation::Unauthenticated);
        };

        let Some(principal) = self.resolve_principal(&session).await? else {
            // Dangling principal reference: the account was deleted out from
            // under the session.
            return Ok(SessionValidation::Unauthenticated);
        };

        let now = Utc::now();
        match disposition(now, session.expires_at, self.ttl) {
            ExpiryDisposition::Expired => {
                // Best-effort cleanup: the request reports unauthenticated
                // whether or not the delete lands.
                if let Err(e) = self.session_repo.delete(session.id).await {
                    warn!(session_id = session.id, error = %e, "Failed to delete expired session");
                }
                Ok(SessionValidation::Unauthenticated)
            }
            ExpiryDisposition::Renew(new_expires_at) => {
                self.session_repo
                    .extend_expiry(session.id, new_expires_at)
                    .await?;
                session.expires_at = new_expires_at;
                Ok(SessionValidation::Authenticated(AuthenticatedSession {
                    session,
                    principal,
                }))
            }
            ExpiryDisposition::Keep => Ok(SessionValidation::Authenticated(AuthenticatedSession {
                session,
                principal,
            })),
        }
    }

    /// Resolve the principal the session's role tag points at.
    ///
    /// The match is exhaustive over `PrincipalKind`: a new role cannot be
    /// added without this function failing to compile.
    async fn resolve_principal(&self, session: &Session) -> AppResult<Option<Principal>> {
        let principal = match session.principal_kind {
            PrincipalKind::Owner => self
                .owner_repo
                .find_by_id(session.principal_id)
                .await?
                .map(Principal::Owner),
            PrincipalKind::Employee => self
                .employee_repo
                .find_by_id(session.principal_id)
                .await?
                .map(Principal::Employee),
        };
        Ok(principal)
    }
}

/// Pure expiry policy over (now, expires_at, ttl).
///
/// Renewal triggers at the half-life, which amortizes renewal writes to
/// roughly one per ttl/2 instead of one per request.
fn disposition(now: DateTime<Utc>, expires_at: DateTime<Utc>, ttl: Duration) -> ExpiryDisposition {
    if now >= expires_at {
        return ExpiryDisposition::Expired;
    }
    if now >= expires_at - ttl / 2 {
        return ExpiryDisposition::Renew(now + ttl);
    }
    ExpiryDisposition::Keep
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL_HOURS: i64 = 720;

    fn ttl() -> Duration {
        Duration::hours(TTL_HOURS)
    }

    #[test]
    fn test_fresh_session_untouched() {
        let now = Utc::now();
        // Expiry further than half the TTL away.
        let expires_at = now + Duration::hours(TTL_HOURS / 2 + 1);
        assert_eq!(disposition(now, expires_at, ttl()), ExpiryDisposition::Keep);
    }

    #[test]
    fn test_renewal_inside_half_life_window() {
        let now = Utc::now();
        let expires_at = now + Duration::hours(TTL_HOURS / 2 - 1);
        match disposition(now, expires_at, ttl()) {
            ExpiryDisposition::Renew(new_expiry) => assert_eq!(new_expiry, now + ttl()),
            other => panic!("expected renewal, got {other:?}"),
        }
    }

    #[test]
    fn test_renewal_at_exact_half_life_boundary() {
        let now = Utc::now();
        let expires_at = now + ttl() / 2;
        assert!(matches!(
            disposition(now, expires_at, ttl()),
            ExpiryDisposition::Renew(_)
        ));
    }

    #[test]
    fn test_expired_session_never_renewed() {
        let now = Utc::now();
        assert_eq!(
            disposition(now, now, ttl()),
            ExpiryDisposition::Expired
        );
        assert_eq!(
            disposition(now, now - Duration::hours(1), ttl()),
            ExpiryDisposition::Expired
        );
    }
}
