//! Service context - dependency container for services
//!
//! Holds the repositories (and, in production, the database pool) that
//! services borrow. Nothing here is global: every caller builds or clones
//! its own context.

use std::sync::Arc;

use bandcal_core::traits::{AvailabilityRepository, EventRepository, MemberRepository};
use bandcal_db::{PgAvailabilityRepository, PgEventRepository, PgMemberRepository, PgPool};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, absent when repositories are not database-backed
    pool: Option<PgPool>,

    // Repositories
    member_repo: Arc<dyn MemberRepository>,
    event_repo: Arc<dyn EventRepository>,
    availability_repo: Arc<dyn AvailabilityRepository>,
}

impl ServiceContext {
    /// Create a new service context from explicit repositories
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        event_repo: Arc<dyn EventRepository>,
        availability_repo: Arc<dyn AvailabilityRepository>,
    ) -> Self {
        Self {
            pool: None,
            member_repo,
            event_repo,
            availability_repo,
        }
    }

    /// Create a context backed by PostgreSQL repositories sharing one pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            member_repo: Arc::new(PgMemberRepository::new(pool.clone())),
            event_repo: Arc::new(PgEventRepository::new(pool.clone())),
            availability_repo: Arc::new(PgAvailabilityRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if the context has one
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the availability repository
    pub fn availability_repo(&self) -> &dyn AvailabilityRepository {
        self.availability_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    availability_repo: Option<Arc<dyn AvailabilityRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn availability_repo(mut self, repo: Arc<dyn AvailabilityRepository>) -> Self {
        self.availability_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let mut ctx = ServiceContext::new(
            self.member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.event_repo
                .ok_or_else(|| ServiceError::validation("event_repo is required"))?,
            self.availability_repo
                .ok_or_else(|| ServiceError::validation("availability_repo is required"))?,
        );
        ctx.pool = self.pool;
        Ok(ctx)
    }
}
