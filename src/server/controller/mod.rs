//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into service parameters, call the
//! service layer and convert the resulting domain models back into DTOs.

pub mod user;
