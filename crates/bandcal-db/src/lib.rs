//! # bandcal-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `bandcal-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers (rejecting values outside the closed enums)
//! - Repository implementations
//! - Idempotent schema bootstrap (`migrations/`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bandcal_core::traits::MemberRepository;
//! use bandcal_db::pool::{create_pool, DatabaseConfig};
//! use bandcal_db::repositories::PgMemberRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let members = PgMemberRepository::new(pool).list().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{PgAvailabilityRepository, PgEventRepository, PgMemberRepository};
pub use schema::apply_schema;
