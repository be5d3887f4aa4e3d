use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The registration endpoint used when nothing overrides it.
pub const DEFAULT_ENDPOINT: &str = "https://webapis.bloomtechdev.com/registration";

/// Request timeout applied to the submission call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for vestibule.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (VESTIBULE_* prefix)
/// 3. Config file (~/.config/vestibule/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Registration endpoint URL.
    ///
    /// Can be set via:
    /// - CLI: --endpoint https://...
    /// - ENV: VESTIBULE_ENDPOINT
    /// - Config: endpoint = "https://..."
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds.
    ///
    /// Can be set via:
    /// - ENV: VESTIBULE_TIMEOUT_SECS
    /// - Config: timeout_secs = 30
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for the config file at: ~/.config/vestibule/config.toml
    /// Reads environment variables with the VESTIBULE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("vestibule");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration from an explicit file path, ignoring the default
    /// search location and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;
        let path_str = path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
        builder
            .add_file(path_str)
            .context("Failed to load config file")?;
        let config: Self = builder.build().context("Failed to build configuration")?;
        Ok(config)
    }

    /// Load configuration with the endpoint overridden from the CLI.
    pub fn load_with_endpoint(endpoint: Option<String>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(endpoint) = endpoint {
            config.endpoint = endpoint;
        }
        Ok(config)
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/vestibule/config.toml
/// - macOS: ~/Library/Application Support/vestibule/config.toml
/// - Windows: %APPDATA%\vestibule\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vestibule")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Vestibule Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (VESTIBULE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Registration endpoint URL
#
# Can also be set via:
# - CLI: vestibule --endpoint https://example.test/registration form
# - Environment: VESTIBULE_ENDPOINT=https://example.test/registration
endpoint = "https://webapis.bloomtechdev.com/registration"

# Request timeout in seconds
#
# Can also be set via:
# - Environment: VESTIBULE_TIMEOUT_SECS=30
timeout_secs = 30
"#
}

/// Create the default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if the config file doesn't exist.
        let result = Config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_with_endpoint_override() {
        let config =
            Config::load_with_endpoint(Some("https://example.test/registration".to_string()));
        assert!(config.is_ok());
        assert_eq!(config.unwrap().endpoint, "https://example.test/registration");
    }

    #[test]
    fn test_config_without_override_keeps_loaded_endpoint() {
        let config = Config::load_with_endpoint(None).unwrap();
        assert!(!config.endpoint.is_empty());
    }

    #[test]
    fn test_load_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "endpoint = \"https://example.test/registration\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.endpoint, "https://example.test/registration");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_example_config_parses_to_defaults() {
        let config: Config = toml::from_str(example_config()).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_partial_config_file_fills_in_defaults() {
        let config: Config = toml::from_str("endpoint = \"https://example.test/r\"").unwrap();
        assert_eq!(config.endpoint, "https://example.test/r");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
