use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

use crate::policy::Policy;

/// Configuration for nextodd.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (NEXTODD_* prefix)
/// 3. Config file (~/.config/nextodd/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Input policy used when no `--policy` flag is given.
    ///
    /// Can be set via:
    /// - CLI: --policy strict | --strict
    /// - ENV: NEXTODD_POLICY
    /// - Config: policy = "strict"
    /// - Default: coercing
    #[serde(default)]
    pub policy: Policy,

    /// Log level: trace, debug, info, warn, or error.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Colour log output.
    ///
    /// Environment values arrive as strings, so `"true"`/`"false"` are
    /// accepted alongside TOML booleans.
    #[serde(default = "default_log_coloured", deserialize_with = "bool_or_string")]
    pub log_coloured: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            log_level: default_log_level(),
            log_coloured: default_log_coloured(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/nextodd/config.toml
    /// Reads environment variables with NEXTODD_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `config_path` (skipped when missing) and
    /// environment variables.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("nextodd");
        builder.add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build()
            .context("Failed to build configuration")?;

        log::debug!("Loaded configuration: policy={}", config.policy);

        Ok(config)
    }

    /// Apply a policy given on the command line, if any.
    #[must_use]
    pub fn with_policy(mut self, policy: Option<Policy>) -> Self {
        if let Some(policy) = policy {
            self.policy = policy;
        }
        self
    }

    /// Map `log_level` onto twyg's levels.
    pub fn log_level(&self) -> Result<twyg::LogLevel> {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(twyg::LogLevel::Trace),
            "debug" => Ok(twyg::LogLevel::Debug),
            "info" => Ok(twyg::LogLevel::Info),
            "warn" => Ok(twyg::LogLevel::Warn),
            "error" => Ok(twyg::LogLevel::Error),
            other => anyhow::bail!(
                "Unknown log level: {}\n\nValid levels: trace, debug, info, warn, error",
                other
            ),
        }
    }

    /// Build twyg logger options from this configuration.
    pub fn logging_opts(&self) -> Result<twyg::Opts> {
        twyg::OptsBuilder::new()
            .coloured(self.log_coloured)
            .level(self.log_level()?)
            .output(twyg::Output::Stderr)
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid logging options: {:?}", e))
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to render configuration")
    }
}

fn bool_or_string<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" => Ok(false),
            _ => Err(de::Error::custom(format!(
                "expected a boolean or \"true\"/\"false\", got {:?}",
                text
            ))),
        },
    }
}

fn default_log_level() -> String {
    String::from("warn")
}

fn default_log_coloured() -> bool {
    true
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/nextodd/config.toml
/// - macOS: ~/Library/Application Support/nextodd/config.toml
/// - Windows: %APPDATA%\nextodd\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nextodd")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# nextodd Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (NEXTODD_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Input policy
#
# "coercing": floats are truncated toward zero and numeric strings are parsed
# "strict":   only integers are accepted
#
# Can also be set via:
# - CLI: nextodd --policy strict compute 4
# - Environment: NEXTODD_POLICY=strict
policy = "coercing"

# Logging
#
# Levels: trace, debug, info, warn, error
log_level = "warn"
log_coloured = true
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config())
        .context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Environment variables are process-wide; tests touching them take this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 3] = ["NEXTODD_POLICY", "NEXTODD_LOG_LEVEL", "NEXTODD_LOG_COLOURED"];

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    fn load_isolated(config_path: &Path, vars: &[(&str, &str)]) -> Result<Config> {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        let result = Config::load_from(config_path);
        clear_env();
        result
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.policy, Policy::Coercing);
        assert_eq!(config.log_level, "warn");
        assert!(config.log_coloured);
    }

    #[test]
    fn test_config_load_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("config.toml");

        let config = load_isolated(&missing, &[]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "policy = \"strict\"\nlog_level = \"debug\"\nlog_coloured = false\n",
        )
        .unwrap();

        let config = load_isolated(&path, &[]).unwrap();
        assert_eq!(config.policy, Policy::Strict);
        assert_eq!(config.log_level, "debug");
        assert!(!config.log_coloured);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("config.toml");

        let config = load_isolated(
            &missing,
            &[
                ("NEXTODD_POLICY", "strict"),
                ("NEXTODD_LOG_LEVEL", "info"),
                ("NEXTODD_LOG_COLOURED", "false"),
            ],
        )
        .unwrap();
        assert_eq!(config.policy, Policy::Strict);
        assert_eq!(config.log_level, "info");
        assert!(!config.log_coloured);
    }

    #[test]
    fn test_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "policy = \"strict\"\nlog_coloured = true\n").unwrap();

        let config = load_isolated(
            &path,
            &[("NEXTODD_POLICY", "coercing"), ("NEXTODD_LOG_COLOURED", "false")],
        )
        .unwrap();
        assert_eq!(config.policy, Policy::Coercing);
        assert!(!config.log_coloured);
    }

    #[test]
    fn test_log_coloured_accepts_strings() {
        let config: Config = toml::from_str("log_coloured = \"false\"").unwrap();
        assert!(!config.log_coloured);

        let config: Config = toml::from_str("log_coloured = \"TRUE\"").unwrap();
        assert!(config.log_coloured);

        assert!(toml::from_str::<Config>("log_coloured = \"sometimes\"").is_err());
    }

    #[test]
    fn test_logging_goes_to_stderr() {
        let opts = Config::default().logging_opts().unwrap();
        assert!(matches!(opts.output(), twyg::Output::Stderr));
    }

    #[test]
    fn test_cli_policy_overrides() {
        let config = Config::default().with_policy(Some(Policy::Strict));
        assert_eq!(config.policy, Policy::Strict);

        let config = config.with_policy(None);
        assert_eq!(config.policy, Policy::Strict);
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(example_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("policy = \"strict\"").unwrap();
        assert_eq!(config.policy, Policy::Strict);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_log_level_mapping() {
        let mut config = Config::default();
        assert!(config.log_level().is_ok());

        config.log_level = String::from("DEBUG");
        assert!(config.log_level().is_ok());

        config.log_level = String::from("loud");
        assert!(config.log_level().is_err());
    }

    #[test]
    fn test_to_toml_round_trips() {
        let config = Config::default().with_policy(Some(Policy::Strict));
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("policy = \"strict\""));
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
