//! Data transfer objects shared between the web client and the server.

pub mod api;
pub mod user;
