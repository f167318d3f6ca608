pub mod not_found;
pub mod settings;

pub use not_found::NotFound;
pub use settings::UserSettings;
