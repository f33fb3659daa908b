//! Transactional unit of work for account provisioning.
//!
//! Signup creates a restaurant, its first owner, consumes the invite code,
//! and mints a session. If any step fails the whole transaction rolls back,
//! so no orphan account or half-consumed invite can survive a crash between
//! steps.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use tablehub_core::error::{AppError, ErrorKind};
use tablehub_core::result::AppResult;
use tablehub_entity::account::{Owner, PrincipalKind};
use tablehub_entity::restaurant::Restaurant;
use tablehub_entity::session::Session;

/// Input for the provisioning transaction. All validation (email
/// uniqueness, invite usability, password strength) happens before this is
/// built; the invite consumption inside the transaction is the final
/// arbiter under races.
#[derive(Debug, Clone)]
pub struct ProvisionAccount {
    /// Restaurant display name.
    pub restaurant_name: String,
    /// Owner login email.
    pub email: String,
    /// Argon2id password hash.
    pub password_hash: String,
    /// The invite code being consumed.
    pub invite_code: String,
    /// Token digest for the initial session.
    pub hashed_token: String,
    /// Expiry of the initial session.
    pub session_expires_at: DateTime<Utc>,
}

/// Everything created by a successful provisioning transaction.
#[derive(Debug, Clone)]
pub struct ProvisionedAccount {
    /// The new restaurant.
    pub restaurant: Restaurant,
    /// The new owner account.
    pub owner: Owner,
    /// The owner's initial session.
    pub session: Session,
}

/// Executes the provisioning unit of work.
#[derive(Debug, Clone)]
pub struct AccountProvisioner {
    pool: PgPool,
}

impl AccountProvisioner {
    /// Create a new provisioner.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create restaurant + owner, consume the invite, and mint a session in
    /// one transaction.
    ///
    /// Returns a `Conflict` error when the conditional invite update affects
    /// no row, which covers a concurrent consumer winning the race after the
    /// caller's usability check.
    pub async fn provision(&self, data: &ProvisionAccount) -> AppResult<ProvisionedAccount> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let restaurant = sqlx::query_as::<_, Restaurant>(
            "INSERT INTO restaurants (name) VALUES ($1) RETURNING *",
        )
        .bind(&data.restaurant_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create restaurant", e))?;

        let owner = sqlx::query_as::<_, Owner>(
            "INSERT INTO owners (restaurant_id, email, password_hash) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(restaurant.id)
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create owner", e))?;

        let consumed = sqlx::query(
            "UPDATE invite_codes SET used_by = $2, used_at = NOW() \
             WHERE code = $1 AND used_by IS NULL AND expires_at > NOW()",
        )
        .bind(&data.invite_code)
        .bind(owner.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to consume invite", e))?;

        if consumed.rows_affected() == 0 {
            // A concurrent signup won the invite; rolling back undoes the
            // restaurant and owner inserts.
            tx.rollback().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to roll back transaction", e)
            })?;
            return Err(AppError::conflict("invite code has already been used"));
        }

        let session = sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (principal_id, principal_kind, hashed_token, expires_at) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(owner.id)
        .bind(PrincipalKind::Owner)
        .bind(&data.hashed_token)
        .bind(data.session_expires_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(ProvisionedAccount {
            restaurant,
            owner,
            session,
        })
    }
}
