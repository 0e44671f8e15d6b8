//! Status transition engine
//!
//! Applies requested presence changes under a per-user lock so the
//! read-decide-write-side-effect sequence is atomic per user. Leaving
//! out-of-office disables the auto responder exactly once, and the disable
//! happens before the new status is committed; if the responder call fails,
//! nothing is committed.

use chrono::{DateTime, Utc};
use presence_core::{DomainError, Status, StatusKind, UserId};
use tracing::{info, instrument, warn};

use crate::dto::StatusChangeRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Status transition engine
pub struct StatusTransitionEngine {
    ctx: ServiceContext,
}

impl StatusTransitionEngine {
    /// Create a new StatusTransitionEngine
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a requested presence change for a target user.
    ///
    /// Accepts `online`, `offline`, `away`, and `dnd`; any other literal
    /// fails with an invalid-argument error before any state is touched.
    /// The caller is assumed to have already passed the external permission
    /// check for the target user.
    #[instrument(skip(self, request), fields(status = %request.status))]
    pub async fn set_status(
        &self,
        user_id: &UserId,
        request: &StatusChangeRequest,
    ) -> ServiceResult<Status> {
        // Validate before touching state or taking the lock
        let target = request.parse_target()?;
        let dnd_end_time = self.resolve_dnd_end(target, request.dnd_end_time)?;

        let _guard = self.ctx.locks().acquire(user_id).await;

        let current = self
            .ctx
            .bounded("status registry", self.ctx.registry().get(user_id))
            .await?;

        // Leaving out-of-office deactivates the automatic reply, and the
        // deactivation must land before the new status does. A failure here
        // aborts the transition so the responder never outlives the status.
        let leaving_ooo = current
            .as_ref()
            .is_some_and(|status| status.status == StatusKind::OutOfOffice);
        if leaving_ooo {
            self.ctx
                .bounded("auto responder", self.ctx.auto_responder().disable(user_id))
                .await?;
            info!(user_id = %user_id, "Auto responder disabled on out-of-office exit");
        }

        let mut next = Status::new(user_id.clone(), target);
        next.dnd_end_time = dnd_end_time;

        self.ctx
            .bounded("status registry", self.ctx.registry().set(next.clone()))
            .await?;

        info!(user_id = %user_id, status = %next.status, "Status committed");

        if let Some(end) = next.dnd_end_time {
            self.schedule_dnd_expiry(user_id.clone(), end);
        }

        Ok(next)
    }

    /// Enter out-of-office on behalf of the activation path.
    ///
    /// Enables the auto responder first; if that fails the status is not
    /// committed, so responder and status can never disagree.
    #[instrument(skip(self))]
    pub async fn activate_out_of_office(&self, user_id: &UserId) -> ServiceResult<Status> {
        let _guard = self.ctx.locks().acquire(user_id).await;

        self.ctx
            .bounded("auto responder", self.ctx.auto_responder().enable(user_id))
            .await?;

        let next = Status::new(user_id.clone(), StatusKind::OutOfOffice);
        self.ctx
            .bounded("status registry", self.ctx.registry().set(next.clone()))
            .await?;

        info!(user_id = %user_id, "Out of office activated");
        Ok(next)
    }

    /// Revert a timed DND window that has reached its end instant.
    ///
    /// No-op unless the user is still in DND with the same end instant: a
    /// superseding explicit change wins by instant comparison, not arrival
    /// order.
    #[instrument(skip(self))]
    pub async fn expire_dnd(&self, user_id: &UserId, end: DateTime<Utc>) -> ServiceResult<()> {
        let _guard = self.ctx.locks().acquire(user_id).await;

        let current = self
            .ctx
            .bounded("status registry", self.ctx.registry().get(user_id))
            .await?;

        match current {
            Some(status) if status.is_timed_dnd_until(end) => {
                let next = Status::new(user_id.clone(), StatusKind::Online);
                self.ctx
                    .bounded("status registry", self.ctx.registry().set(next))
                    .await?;
                info!(user_id = %user_id, "Timed DND expired, reverted to online");
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Resolve the DND end instant for the committed record.
    ///
    /// Kept only when the target is DND, the deployment enables timed DND,
    /// and the request carried an end instant; a past end instant is
    /// rejected. Everything else clears the window.
    fn resolve_dnd_end(
        &self,
        target: StatusKind,
        requested: Option<DateTime<Utc>>,
    ) -> ServiceResult<Option<DateTime<Utc>>> {
        if target != StatusKind::Dnd || !self.ctx.features().timed_dnd_enabled() {
            return Ok(None);
        }
        match requested {
            Some(end) if end <= Utc::now() => Err(DomainError::ExpiryInPast.into()),
            other => Ok(other),
        }
    }

    /// Spawn the background reversion task for a timed DND window
    fn schedule_dnd_expiry(&self, user_id: UserId, end: DateTime<Utc>) {
        let engine = Self::new(self.ctx.clone());
        tokio::spawn(async move {
            let wait = (end - Utc::now())
                .to_std()
                .unwrap_or(std::time::Duration::ZERO);
            tokio::time::sleep(wait).await;
            if let Err(err) = engine.expire_dnd(&user_id, end).await {
                warn!(user_id = %user_id, error = %err, "Timed DND expiry failed");
            }
        });
    }
}
