//! Batch status resolver
//!
//! Read-only lookups of presence records for one or many users. Identifier
//! shape is validated before any state is touched; a single malformed id
//! fails a batch call outright rather than returning partial results.

use presence_core::{DomainError, Status, UserId};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Batch status resolver
pub struct BatchStatusResolver {
    ctx: ServiceContext,
}

impl BatchStatusResolver {
    /// Create a new BatchStatusResolver
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve presence for a list of user ids in one pass.
    ///
    /// The result preserves input order. Ids with no known record are
    /// omitted; an empty input or any malformed id fails the whole call.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn get_statuses_by_ids(&self, ids: &[String]) -> ServiceResult<Vec<Status>> {
        if ids.is_empty() {
            return Err(DomainError::EmptyIdList.into());
        }

        let mut user_ids = Vec::with_capacity(ids.len());
        for raw in ids {
            let user_id = UserId::parse(raw).map_err(DomainError::from)?;
            user_ids.push(user_id);
        }

        self.ctx
            .bounded("status registry", self.ctx.registry().get_many(&user_ids))
            .await
    }

    /// Resolve presence for a single user id.
    ///
    /// Unlike the batch path, an unknown id is an explicit not-found error.
    #[instrument(skip(self))]
    pub async fn get_status(&self, id: &str) -> ServiceResult<Status> {
        let user_id = UserId::parse(id).map_err(DomainError::from)?;

        let status = self
            .ctx
            .bounded("status registry", self.ctx.registry().get(&user_id))
            .await?;

        status.ok_or_else(|| ServiceError::not_found("User status", id))
    }
}
