//! Configuration management for Jobboard
//!
//! Configuration is read from a TOML file and then overridden by
//! environment variables. A missing file is not an error: every field has a
//! default that points at a local development backend.
//!
//! ```toml
//! [api]
//! environment = "production"
//! timeout_secs = 10
//! health_probe = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::error::{ConfigError, Result};

pub const DEFAULT_DEVELOPMENT_URL: &str = "http://localhost:4000";
pub const DEFAULT_PRODUCTION_URL: &str = "https://next-hire-an-online-job-portal-37t9.vercel.app";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Transport settings for the shared API client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub environment: Environment,
    /// Explicit base address; wins over the per-environment URLs
    pub base_url: Option<String>,
    pub development_url: String,
    pub production_url: String,
    pub timeout_secs: u64,
    /// Probe `/health` before listing jobs for a clearer "backend down" error
    pub health_probe: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::InvalidValue {
                field: "api.environment".to_string(),
                reason: format!("'{}' is not one of: development, production", other),
            }),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            base_url: None,
            development_url: DEFAULT_DEVELOPMENT_URL.to_string(),
            production_url: DEFAULT_PRODUCTION_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            health_probe: true,
        }
    }
}

impl ApiConfig {
    /// Base address every request is resolved against (no trailing slash)
    pub fn resolved_base_url(&self) -> String {
        let url = match (&self.base_url, self.environment) {
            (Some(url), _) if !url.trim().is_empty() => url.as_str(),
            (_, Environment::Development) => self.development_url.as_str(),
            (_, Environment::Production) => self.production_url.as_str(),
        };
        url.trim().trim_end_matches('/').to_string()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        let base = self.resolved_base_url();
        let parsed = url::Url::parse(&base).map_err(|e| ConfigError::InvalidValue {
            field: "api.base_url".to_string(),
            reason: format!("'{}' is not a valid URL: {}", base, e),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from the default location, then apply env overrides
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        let mut config = if config_path.exists() {
            Self::load_from_path(&config_path)?
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Self::default()
        };
        config.apply_env_overrides()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.api.validate()?;
        Ok(config)
    }

    /// Apply `JOBBOARD_API_URL`, `JOBBOARD_ENV` and `JOBBOARD_TIMEOUT_SECS`
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(url) = std::env::var("JOBBOARD_API_URL") {
            if !url.trim().is_empty() {
                self.api.base_url = Some(url);
            }
        }

        if let Ok(env) = std::env::var("JOBBOARD_ENV") {
            self.api.environment = env.parse()?;
        }

        if let Ok(timeout) = std::env::var("JOBBOARD_TIMEOUT_SECS") {
            self.api.timeout_secs = timeout.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "JOBBOARD_TIMEOUT_SECS".to_string(),
                reason: format!("'{}' is not a number of seconds", timeout),
            })?;
        }

        Ok(())
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("JOBBOARD_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("jobboard").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for var in [
            "JOBBOARD_CONFIG",
            "JOBBOARD_API_URL",
            "JOBBOARD_ENV",
            "JOBBOARD_TIMEOUT_SECS",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_points_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.api.resolved_base_url(), "http://localhost:4000");
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert!(config.api.health_probe);
    }

    #[test]
    fn test_production_environment_uses_production_url() {
        let api = ApiConfig {
            environment: Environment::Production,
            ..ApiConfig::default()
        };
        assert_eq!(api.resolved_base_url(), DEFAULT_PRODUCTION_URL);
    }

    #[test]
    fn test_explicit_base_url_wins_and_is_trimmed() {
        let api = ApiConfig {
            environment: Environment::Production,
            base_url: Some("http://10.0.0.5:4000/".to_string()),
            ..ApiConfig::default()
        };
        assert_eq!(api.resolved_base_url(), "http://10.0.0.5:4000");
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("Development".parse::<Environment>().unwrap(), Environment::Development);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nenvironment = \"production\"\ntimeout_secs = 5").unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.api.environment, Environment::Production);
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.development_url, DEFAULT_DEVELOPMENT_URL);
        assert!(config.api.health_probe);
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"not a url\"").unwrap();

        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("api.base_url"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let api = ApiConfig {
            timeout_secs: 0,
            ..ApiConfig::default()
        };
        assert!(api.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_load_without_file_uses_defaults() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("JOBBOARD_CONFIG", dir.path().join("missing.toml"));

        let config = Config::load().unwrap();
        assert_eq!(config, Config::default());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_overrides_apply_after_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nenvironment = \"production\"").unwrap();
        std::env::set_var("JOBBOARD_CONFIG", file.path());
        std::env::set_var("JOBBOARD_API_URL", "http://127.0.0.1:5050");
        std::env::set_var("JOBBOARD_TIMEOUT_SECS", "3");

        let config = Config::load().unwrap();
        assert_eq!(config.api.resolved_base_url(), "http://127.0.0.1:5050");
        assert_eq!(config.api.timeout_secs, 3);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_bad_timeout_env_is_rejected() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("JOBBOARD_CONFIG", dir.path().join("missing.toml"));
        std::env::set_var("JOBBOARD_TIMEOUT_SECS", "soon");

        let err = Config::load().unwrap_err();
        assert!(err.to_string().contains("JOBBOARD_TIMEOUT_SECS"));

        clear_env();
    }
}
