//! Configuration management for contactbook.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "contactbook";

/// Default contacts file name.
const CONTACTS_FILE_NAME: &str = "contacts.json";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "CONTACTBOOK_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CONTACTBOOK_`, `__` between
///    section and key, e.g. `CONTACTBOOK_SERVER__PORT=8080`)
/// 2. TOML config file at `~/.config/contactbook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_address: String,
    /// Port to listen on.
    pub port: u16,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the contacts JSON file.
    /// Defaults to `~/.local/share/contactbook/contacts.json`
    pub data_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Config {
    /// Load configuration from all sources, reading `config_path` instead of
    /// the default config file when given.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.server.bind_address.parse::<IpAddr>().is_err() {
            return Err(Error::ConfigValidation {
                message: format!(
                    "bind_address must be an IP address, got '{}'",
                    self.server.bind_address
                ),
            });
        }

        if self.server.port == 0 {
            return Err(Error::ConfigValidation {
                message: "port must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Get the contacts file path, resolving defaults if not set.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.storage
            .data_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(CONTACTS_FILE_NAME))
    }

    /// Get the socket address the server should listen on.
    ///
    /// # Errors
    ///
    /// Returns an error if the bind address is not a valid IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .server
            .bind_address
            .parse()
            .map_err(|_| Error::ConfigValidation {
                message: format!("invalid bind_address: {}", self.server.bind_address),
            })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert!(config.storage.data_path.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("port"));
    }

    #[test]
    fn test_validate_bad_bind_address() {
        let mut config = Config::default();
        config.server.bind_address = "localhost:80".to_string();

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("bind_address"));
    }

    #[test]
    fn test_socket_addr() {
        let mut config = Config::default();
        config.server.bind_address = "0.0.0.0".to_string();
        config.server.port = 8080;

        assert_eq!(
            config.socket_addr().unwrap(),
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_data_path_default() {
        let config = Config::default();
        let path = config.data_path();

        assert!(path.to_string_lossy().contains("contacts.json"));
        assert!(path.to_string_lossy().contains("contactbook"));
    }

    #[test]
    fn test_data_path_custom() {
        let mut config = Config::default();
        config.storage.data_path = Some(PathBuf::from("/custom/contacts.json"));

        assert_eq!(config.data_path(), PathBuf::from("/custom/contacts.json"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("contactbook"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Missing file falls back to defaults
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nport = 8088\n\n[storage]\ndata_path = \"/srv/contacts.json\""
        )
        .unwrap();

        let config = Config::load_from(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.data_path(), PathBuf::from("/srv/contacts.json"));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbind_address = \"not-an-ip\"").unwrap();

        let err = Config::load_from(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { .. }));
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("bind_address"));
        assert!(json.contains("data_path"));
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
