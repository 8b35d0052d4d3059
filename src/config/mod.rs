//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `FOLIO_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_MODEL, DEFAULT_TIMEOUT_MS};
use crate::project::{Project, default_projects, load_catalog};
use crate::reorder::RankingStrategy;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `FOLIO_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Model name handed to the provider client. Default: `gemini-2.0-flash`.
    pub model: String,

    /// Deadline for one prioritize call, in milliseconds. Default: `15000`.
    pub timeout_ms: u64,

    /// Ranking strategy. Default: [`RankingStrategy::Model`].
    pub strategy: RankingStrategy,

    /// JSON file replacing the built-in project catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            model: DEFAULT_MODEL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            strategy: RankingStrategy::default(),
            catalog_path: None,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "FOLIO_PORT";
    const ENV_BIND_ADDR: &'static str = "FOLIO_BIND_ADDR";
    const ENV_MODEL: &'static str = "FOLIO_MODEL";
    const ENV_TIMEOUT_MS: &'static str = "FOLIO_TIMEOUT_MS";
    const ENV_STRATEGY: &'static str = "FOLIO_STRATEGY";
    const ENV_CATALOG_PATH: &'static str = "FOLIO_CATALOG_PATH";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model = Self::parse_string_from_env(Self::ENV_MODEL, defaults.model);
        let timeout_ms = Self::parse_timeout_from_env(defaults.timeout_ms)?;
        let strategy = Self::parse_strategy_from_env(defaults.strategy)?;
        let catalog_path = Self::parse_optional_path_from_env(Self::ENV_CATALOG_PATH);

        Ok(Self {
            port,
            bind_addr,
            model,
            timeout_ms,
            strategy,
            catalog_path,
        })
    }

    /// Validates paths and basic invariants (does not read the catalog).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }

        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout {
                value: self.timeout_ms.to_string(),
            });
        }

        if let Some(ref path) = self.catalog_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Returns the configured catalog, or the built-in one when no file is set.
    pub fn load_projects(&self) -> Result<Vec<Project>, ConfigError> {
        match self.catalog_path {
            Some(ref path) => Ok(load_catalog(path)?),
            None => Ok(default_projects()),
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_timeout_from_env(default: u64) -> Result<u64, ConfigError> {
        match env::var(Self::ENV_TIMEOUT_MS) {
            Ok(value) => match value.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Ok(ms),
                _ => Err(ConfigError::InvalidTimeout { value }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_strategy_from_env(default: RankingStrategy) -> Result<RankingStrategy, ConfigError> {
        match env::var(Self::ENV_STRATEGY) {
            Ok(value) => value
                .parse()
                .map_err(|reason| ConfigError::InvalidStrategy { reason }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }
}
