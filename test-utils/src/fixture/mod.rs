//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests of entity conversions and as stand-ins for repository responses.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//!
//! let admin = fixture::user::entity_builder()
//!     .username("admin")
//!     .groups(["admin"])
//!     .build();
//! ```

pub mod user;

pub use user::{entity as user_entity, entity_builder as user_entity_builder};
