//! Member service
//!
//! Read-only member lookups for the HTTP layer.

use bandcal_core::value_objects::MemberId;
use tracing::instrument;

use crate::dto::{AvailabilityResponse, MemberResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all members ordered by name
    #[instrument(skip(self))]
    pub async fn list_members(&self) -> ServiceResult<Vec<MemberResponse>> {
        let members = self.ctx.member_repo().list().await?;
        Ok(members.into_iter().map(MemberResponse::from).collect())
    }

    /// Get member by ID
    #[instrument(skip(self))]
    pub async fn get_member(&self, member_id: MemberId) -> ServiceResult<MemberResponse> {
        self.ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .map(MemberResponse::from)
            .ok_or_else(|| ServiceError::not_found("Member", member_id))
    }

    /// Availability rows of a member across all events
    #[instrument(skip(self))]
    pub async fn get_member_availability(
        &self,
        member_id: MemberId,
    ) -> ServiceResult<Vec<AvailabilityResponse>> {
        if self.ctx.member_repo().find_by_id(member_id).await?.is_none() {
            return Err(ServiceError::not_found("Member", member_id));
        }

        let rows = self
            .ctx
            .availability_repo()
            .find_by_member(member_id)
            .await?;

        Ok(rows.into_iter().map(AvailabilityResponse::from).collect())
    }
}
