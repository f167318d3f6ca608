//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Customize through the builder
//!     let admin = factory::user::UserFactory::new(&db)
//!         .username("admin")
//!         .groups(["admin"])
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod helpers;
pub mod user;

pub use user::{create_user, create_user_with_groups};
