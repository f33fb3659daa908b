//! Invite code gate: classification and consumption.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use tablehub_core::error::AppError;
use tablehub_core::result::AppResult;
use tablehub_database::repositories::invite::InviteRepository;
use tablehub_entity::invite::InviteCode;
use uuid::Uuid;

/// Classification of an invite code at check time.
///
/// Ordering is fixed: existence, then consumption, then expiry. A consumed
/// code reports `Consumed` even when it is also past expiry, because
/// consumption is permanent.
#[derive(Debug, Clone, PartialEq)]
pub enum InviteCheck {
    /// No such code exists.
    Missing,
    /// The code has already been consumed.
    Consumed,
    /// The code is past its expiry and was never consumed.
    Expired,
    /// The code can be consumed right now.
    Usable(InviteCode),
}

/// Gate governing signup eligibility via invite codes.
#[derive(Debug, Clone)]
pub struct InviteGate {
    invite_repo: Arc<InviteRepository>,
}

impl InviteGate {
    /// Create a new invite gate.
    pub fn new(invite_repo: Arc<InviteRepository>) -> Self {
        Self { invite_repo }
    }

    /// Classify a code as of now.
    pub async fn check(&self, code: &str) -> AppResult<InviteCheck> {
        let invite = self.invite_repo.find_by_code(code).await?;
        Ok(classify(invite, Utc::now()))
    }

    /// Consume a code that was observed `Usable`.
    ///
    /// The repository performs a conditional update, so a concurrent signup
    /// racing past the check loses here and gets a `Conflict`.
    pub async fn consume(&self, code: &str, consumer_id: Uuid) -> AppResult<()> {
        if self.invite_repo.consume(code, consumer_id).await? {
            Ok(())
        } else {
            Err(AppError::conflict("invite code has already been used"))
        }
    }
}

/// Pure classification over an optional invite row and the current time.
fn classify(invite: Option<InviteCode>, now: DateTime<Utc>) -> InviteCheck {
    let Some(invite) = invite else {
        return InviteCheck::Missing;
    };
    if invite.is_consumed() {
        return InviteCheck::Consumed;
    }
    if invite.is_expired_at(now) {
        return InviteCheck::Expired;
    }
    InviteCheck::Usable(invite)
}
