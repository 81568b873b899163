use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolution::{ResolutionConfig, ResolutionMode};
use super::server::ServerConfig;

/// Main configuration structure for loopdns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (bind address, port, concurrency cap)
    #[serde(default)]
    pub server: ServerConfig,

    /// Resolution mode, upstream endpoints and walk limits
    #[serde(default)]
    pub resolution: ResolutionConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. loopdns.toml in current directory
    /// 3. /etc/loopdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("loopdns.toml").exists() {
            Self::from_file("loopdns.toml")?
        } else if std::path::Path::new("/etc/loopdns/config.toml").exists() {
            Self::from_file("/etc/loopdns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(mode) = overrides.mode {
            self.resolution.mode = Some(mode);
        }
        if let Some(resolver) = overrides.public_resolver {
            self.resolution.public_resolver = resolver;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        self.server.listen_address()?;

        if self.server.max_concurrent_requests == 0 {
            return Err(ConfigError::Validation(
                "max_concurrent_requests must be at least 1".to_string(),
            ));
        }

        self.resolution
            .public_resolver_endpoint()
            .map_err(|e| ConfigError::Validation(format!("public_resolver: {}", e)))?;

        if self.resolution.root_servers.is_empty() {
            return Err(ConfigError::Validation(
                "No root servers configured".to_string(),
            ));
        }

        self.resolution
            .root_endpoints()
            .map_err(|e| ConfigError::Validation(format!("root_servers: {}", e)))?;

        if self.resolution.max_cname_chain == 0 || self.resolution.max_referral_hops == 0 {
            return Err(ConfigError::Validation(
                "Resolution limits must be greater than 0".to_string(),
            ));
        }

        if self.resolution.forward_timeout_ms == 0 || self.resolution.hop_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeouts must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub mode: Option<ResolutionMode>,
    pub public_resolver: Option<String>,
    pub log_level: Option<String>,
}
