#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod user;

#[cfg(feature = "web")]
pub use user::HttpUserApi;
