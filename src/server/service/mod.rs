//! Service layer for business logic.
//!
//! Services sit between controllers and repositories. They enforce validation and
//! business rules and work with domain models rather than DTOs or entities.

pub mod user;
