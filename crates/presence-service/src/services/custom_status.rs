//! Custom status service
//!
//! Set/remove lifecycle for the active custom status plus maintenance of the
//! recent-status history. Every operation checks the deployment feature
//! toggle first, before any other validation.

use chrono::Utc;
use presence_core::{CustomStatus, RecentStatusList, UserId};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Custom status service
pub struct CustomStatusService {
    ctx: ServiceContext,
}

impl CustomStatusService {
    /// Create a new CustomStatusService
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Short-circuit when custom statuses are administratively disabled
    fn check_enabled(&self) -> ServiceResult<()> {
        if self.ctx.features().custom_statuses_enabled() {
            Ok(())
        } else {
            Err(ServiceError::FeatureDisabled("custom statuses"))
        }
    }

    /// Set or replace the active custom status for a user.
    ///
    /// Stamps `created_at`, validates the candidate, then overwrites. The
    /// recent history is untouched.
    #[instrument(skip(self, candidate), fields(text = %candidate.text))]
    pub async fn set_custom_status(
        &self,
        user_id: &UserId,
        mut candidate: CustomStatus,
    ) -> ServiceResult<()> {
        self.check_enabled()?;

        let now = Utc::now();
        candidate.pre_save(now);
        candidate.validate(now)?;

        self.ctx
            .bounded(
                "custom status store",
                self.ctx.custom_status_store().set(user_id, candidate),
            )
            .await?;

        info!(user_id = %user_id, "Custom status set");
        Ok(())
    }

    /// Get the active custom status, if any
    #[instrument(skip(self))]
    pub async fn get_custom_status(&self, user_id: &UserId) -> ServiceResult<Option<CustomStatus>> {
        self.check_enabled()?;

        self.ctx
            .bounded(
                "custom status store",
                self.ctx.custom_status_store().get(user_id),
            )
            .await
    }

    /// Clear the active custom status. Idempotent: clearing when none is set
    /// succeeds, and the recent history is untouched.
    #[instrument(skip(self))]
    pub async fn remove_custom_status(&self, user_id: &UserId) -> ServiceResult<()> {
        self.check_enabled()?;

        self.ctx
            .bounded(
                "custom status store",
                self.ctx.custom_status_store().clear(user_id),
            )
            .await?;

        info!(user_id = %user_id, "Custom status removed");
        Ok(())
    }

    /// Remember a status in the user's recent history (dedup + bounded).
    ///
    /// This is the client-driven "keep this as a suggestion" write; the
    /// active entry is untouched.
    #[instrument(skip(self, value), fields(text = %value.text))]
    pub async fn add_recent_custom_status(
        &self,
        user_id: &UserId,
        value: CustomStatus,
    ) -> ServiceResult<()> {
        self.check_enabled()?;

        let now = Utc::now();
        value.validate(now)?;

        self.ctx
            .bounded(
                "custom status store",
                self.ctx.custom_status_store().push_recent(user_id, value),
            )
            .await
    }

    /// Forget a suggestion: prune the history entry matching the
    /// (emoji, text) pair of `value`. Idempotent when absent; the active
    /// entry is untouched.
    #[instrument(skip(self, value), fields(text = %value.text))]
    pub async fn remove_recent_custom_status(
        &self,
        user_id: &UserId,
        value: &CustomStatus,
    ) -> ServiceResult<()> {
        self.check_enabled()?;

        let removed = self
            .ctx
            .bounded(
                "custom status store",
                self.ctx.custom_status_store().remove_recent(user_id, value),
            )
            .await?;

        if removed {
            info!(user_id = %user_id, "Recent custom status removed");
        }
        Ok(())
    }

    /// Get the recent-status history, most recent first
    #[instrument(skip(self))]
    pub async fn recent_custom_statuses(
        &self,
        user_id: &UserId,
    ) -> ServiceResult<RecentStatusList> {
        self.check_enabled()?;

        self.ctx
            .bounded(
                "custom status store",
                self.ctx.custom_status_store().recent(user_id),
            )
            .await
    }
}
