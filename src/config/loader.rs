//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/linebar/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Text file shown when no file is given on the command line.
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// JSON document listing registered sources and their positions.
    #[serde(default)]
    pub registry_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Name shared by launches that should collapse into one instance.
    #[serde(default)]
    pub instance_name: Option<String>,

    /// Directory holding the instance lock and socket.
    #[serde(default)]
    pub runtime_dir: Option<PathBuf>,

    /// How long a secondary launch keeps trying to reach the owner.
    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,

    /// Cells kept free between the text and the buttons.
    #[serde(default)]
    pub text_margin: Option<u16>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Text file opened at start.
    pub source: PathBuf,
    /// Source registry document.
    pub registry_path: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Single-instance name.
    pub instance_name: String,
    /// Directory for lock and socket files.
    pub runtime_dir: PathBuf,
    /// Secondary connect deadline in milliseconds.
    pub connect_timeout_ms: u64,
    /// Extra cells subtracted from the text area width.
    pub text_margin: u16,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            source: default_source_path(),
            registry_path: default_registry_path(),
            log_file_path: default_log_path(),
            instance_name: "linebar".to_string(),
            runtime_dir: default_runtime_dir(),
            connect_timeout_ms: 1000,
            text_margin: 1,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/linebar/linebar.log` on Unix-like systems.
/// If the state directory cannot be determined, falls back to the current
/// directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("linebar").join("linebar.log")
    } else {
        PathBuf::from("linebar.log")
    }
}

/// Default text file: `~/.local/share/linebar/default.txt`.
pub fn default_source_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("linebar").join("default.txt"),
        None => PathBuf::from("default.txt"),
    }
}

/// Default registry document: `~/.config/linebar/sources.json`.
pub fn default_registry_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("linebar").join("sources.json"),
        None => PathBuf::from("sources.json"),
    }
}

/// `$XDG_RUNTIME_DIR` where available, else the system temp directory.
pub fn default_runtime_dir() -> PathBuf {
    dirs::runtime_dir().unwrap_or_else(std::env::temp_dir)
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/linebar/config.toml` on Unix.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("linebar").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `LINEBAR_CONFIG` environment variable
/// 3. Default path `~/.config/linebar/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("LINEBAR_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        source: config.source.unwrap_or(defaults.source),
        registry_path: config.registry_path.unwrap_or(defaults.registry_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        instance_name: config.instance_name.unwrap_or(defaults.instance_name),
        runtime_dir: config.runtime_dir.unwrap_or(defaults.runtime_dir),
        connect_timeout_ms: config
            .connect_timeout_ms
            .unwrap_or(defaults.connect_timeout_ms),
        text_margin: config.text_margin.unwrap_or(defaults.text_margin),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `LINEBAR_SOURCE`: Override the start-up text file
/// - `LINEBAR_INSTANCE`: Override the instance name
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(source) = std::env::var("LINEBAR_SOURCE") {
        config.source = PathBuf::from(source);
    }

    if let Ok(name) = std::env::var("LINEBAR_INSTANCE") {
        config.instance_name = name;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    source_override: Option<PathBuf>,
    instance_override: Option<String>,
) -> ResolvedConfig {
    if let Some(source) = source_override {
        config.source = source;
    }

    if let Some(name) = instance_override {
        config.instance_name = name;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
