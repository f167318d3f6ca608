//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation and business rules
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request identity extraction
//!
//! Supporting modules: `config` (environment configuration), `state` (shared state),
//! `startup` (database, storage and admin seeding) and `router` (routes and API docs).
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
