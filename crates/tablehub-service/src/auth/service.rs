//! Signup, login, and logout orchestration.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

use tablehub_auth::invite::{InviteCheck, InviteGate};
use tablehub_auth::password::hasher::CredentialHasher;
use tablehub_auth::password::strength::{PasswordStrength, PasswordStrengthChecker};
use tablehub_auth::token::{generate_session_token, hash_session_token};
use tablehub_core::error::AppError;
use tablehub_core::result::AppResult;
use tablehub_database::provision::{AccountProvisioner, ProvisionAccount};
use tablehub_database::repositories::employee::EmployeeRepository;
use tablehub_database::repositories::owner::OwnerRepository;
use tablehub_database::repositories::session::SessionRepository;
use tablehub_entity::account::{Principal, PrincipalKind};
use tablehub_entity::session::{CreateSession, Session};

/// A freshly authenticated principal plus the raw bearer token to hand to
/// the client. The raw token exists only in this value and the Set-Cookie
/// header built from it.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// The authenticated principal.
    pub principal: Principal,
    /// The minted session.
    pub session: Session,
    /// The raw bearer token.
    pub token: String,
}

/// Orchestrates signup, the two login flows, and logout.
#[derive(Debug, Clone)]
pub struct AuthService {
    owner_repo: Arc<OwnerRepository>,
    employee_repo: Arc<EmployeeRepository>,
    session_repo: Arc<SessionRepository>,
    provisioner: Arc<AccountProvisioner>,
    invite_gate: Arc<InviteGate>,
    hasher: Arc<CredentialHasher>,
    strength: Arc<PasswordStrengthChecker>,
    ttl: Duration,
}

impl AuthService {
    /// Create a new auth service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner_repo: Arc<OwnerRepository>,
        employee_repo: Arc<EmployeeRepository>,
        session_repo: Arc<SessionRepository>,
        provisioner: Arc<AccountProvisioner>,
        invite_gate: Arc<InviteGate>,
        hasher: Arc<CredentialHasher>,
        strength: Arc<PasswordStrengthChecker>,
        ttl: Duration,
    ) -> Self {
        Self {
            owner_repo,
            employee_repo,
            session_repo,
            provisioner,
            invite_gate,
            hasher,
            strength,
            ttl,
        }
    }

    /// Invite-gated owner signup.
    ///
    /// Validation steps run in a fixed order and short-circuit at the first
    /// failure, each with its own user-facing reason. Account creation,
    /// invite consumption, and session issuance happen inside one database
    /// transaction.
    pub async fn signup(&self, email: &str, password: &str, invite_code: &str) -> AppResult<AuthOutcome> {
        if self.owner_repo.email_exists(email).await? {
            return Err(AppError::conflict("email is already registered"));
        }

        match self.invite_gate.check(invite_code).await? {
            InviteCheck::Missing => return Err(AppError::conflict("invite code not found")),
            InviteCheck::Consumed => {
                return Err(AppError::conflict("invite code has already been used"));
            }
            InviteCheck::Expired => return Err(AppError::conflict("invite code has expired")),
            InviteCheck::Usable(_) => {}
        }

        if self.strength.check(password).await? == PasswordStrength::Weak {
            return Err(AppError::conflict("password is not strong enough"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let token = generate_session_token();

        let provisioned = self
            .provisioner
            .provision(&ProvisionAccount {
                restaurant_name: "My Restaurant".to_string(),
                email: email.to_string(),
                password_hash,
                invite_code: invite_code.to_string(),
                hashed_token: hash_session_token(&token),
                session_expires_at: Utc::now() + self.ttl,
            })
            .await?;

        info!(owner_id = %provisioned.owner.id, "Owner account provisioned");

        Ok(AuthOutcome {
            principal: Principal::Owner(provisioned.owner),
            session: provisioned.session,
            token,
        })
    }

    /// Owner login with email and password.
    ///
    /// An unknown email and a wrong password produce the same error, so a
    /// caller cannot enumerate accounts.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthOutcome> {
        let Some(owner) = self.owner_repo.find_by_email(email).await? else {
            return Err(AppError::not_found("account not found"));
        };

        if !self.hasher.verify_password(password, &owner.password_hash)? {
            return Err(AppError::not_found("account not found"));
        }

        let (session, token) = self
            .issue_session(owner.id, PrincipalKind::Owner)
            .await?;

        Ok(AuthOutcome {
            principal: Principal::Owner(owner),
            session,
            token,
        })
    }

    /// Employee login with restaurant, name, and PIN.
    pub async fn employee_login(
        &self,
        restaurant_id: Uuid,
        name: &str,
        pin: &str,
    ) -> AppResult<AuthOutcome> {
        let Some(employee) = self
            .employee_repo
            .find_by_restaurant_and_name(restaurant_id, name)
            .await?
        else {
            return Err(AppError::not_found("account not found"));
        };

        if !self.hasher.verify_pin(pin, &employee.pin_hash)? {
            return Err(AppError::not_found("account not found"));
        }

        let (session, token) = self
            .issue_session(employee.id, PrincipalKind::Employee)
            .await?;

        Ok(AuthOutcome {
            principal: Principal::Employee(employee),
            session,
            token,
        })
    }

    /// Delete the server-side session for a raw bearer token.
    ///
    /// Returns whether a session actually existed; logout succeeds either
    /// way from the client's perspective.
    pub async fn logout(&self, token: &str) -> AppResult<bool> {
        self.session_repo
            .delete_by_hashed_token(&hash_session_token(token))
            .await
    }

    async fn issue_session(
        &self,
        principal_id: Uuid,
        principal_kind: PrincipalKind,
    ) -> AppResult<(Session, String)> {
        let token = generate_session_token();
        let session = self
            .session_repo
            .create(&CreateSession {
                principal_id,
                principal_kind,
                hashed_token: hash_session_token(&token),
                expires_at: Utc::now() + self.ttl,
            })
            .await?;
        Ok((session, token))
    }
}
