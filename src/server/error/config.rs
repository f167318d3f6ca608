use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but cannot be parsed.
    ///
    /// Variables with defaults only fail when a value is present and malformed, e.g. a
    /// `PORT` that is not a number.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },
}
