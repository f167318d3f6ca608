use std::{net::IpAddr, path::PathBuf};

use crate::{
    model::api::normalize_base_path,
    server::error::{config::ConfigError, AppError},
};

const DEFAULT_IP: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 9339;
const DEFAULT_DATABASE_URL: &str = "sqlite://./app/data/roster.db?mode=rwc";
const DEFAULT_FILE_STORAGE_PATH: &str = "./app/data/files";
const DEFAULT_USER_HEADER: &str = "X-Remote-User";

/// Server configuration resolved from environment variables.
///
/// Every variable has a default, so an empty environment yields a working setup that
/// listens on `0.0.0.0:9339` with a SQLite database under `./app/data`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub ip: IpAddr,
    pub port: u16,
    pub database_url: String,
    /// Account created with the `admin` group at startup. Empty disables seeding.
    pub admin_username: String,
    /// Prefix the whole app is mounted under, e.g. `/roster`. Empty mounts at the root.
    pub base_path: String,
    pub file_storage_path: PathBuf,
    /// Header set by the authenticating reverse proxy with the signed-in username.
    pub user_header: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let ip = var("IP", DEFAULT_IP);
        let ip = ip.parse::<IpAddr>().map_err(|_| ConfigError::InvalidEnvVar {
            name: "IP".to_string(),
            value: ip.clone(),
        })?;

        let port = var("PORT", &DEFAULT_PORT.to_string());
        let port = port.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
            name: "PORT".to_string(),
            value: port.clone(),
        })?;

        Ok(Self {
            ip,
            port,
            database_url: var("DATABASE_URL", DEFAULT_DATABASE_URL),
            admin_username: var("ADMIN_USERNAME", ""),
            base_path: normalize_base_path(&var("BASE_PATH", "")),
            file_storage_path: PathBuf::from(var("FILE_STORAGE_PATH", DEFAULT_FILE_STORAGE_PATH)),
            user_header: var("AUTH_USER_HEADER", DEFAULT_USER_HEADER),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.ip.to_string(), "0.0.0.0");
        assert_eq!(config.port, 9339);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.admin_username, "");
        assert_eq!(config.base_path, "");
        assert_eq!(config.file_storage_path, PathBuf::from("./app/data/files"));
        assert_eq!(config.user_header, "X-Remote-User");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("IP", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("ADMIN_USERNAME", "root"),
            ("BASE_PATH", "roster/"),
            ("AUTH_USER_HEADER", "X-Forwarded-User"),
        ])
        .unwrap();

        assert_eq!(config.ip.to_string(), "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.admin_username, "root");
        assert_eq!(config.base_path, "/roster");
        assert_eq!(config.user_header, "X-Forwarded-User");
    }

    #[test]
    fn rejects_invalid_port() {
        let result = config_from(&[("PORT", "not-a-port")]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "PORT"
        ));
    }

    #[test]
    fn rejects_invalid_ip() {
        let result = config_from(&[("IP", "localhost")]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "IP"
        ));
    }
}
