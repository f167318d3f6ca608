pub mod auth;
pub mod error;
pub mod user_list;
