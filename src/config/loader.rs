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

    /// Config file contains invalid TOML syntax.
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
/// Corresponds to `~/.config/flextab/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Width of the fixed side panel in terminal cells.
    /// Folded into every column breakpoint as the allocator offset.
    #[serde(default)]
    pub side_panel_width: Option<u16>,

    /// Number of rows generated by `--sample`.
    #[serde(default)]
    pub sample_rows: Option<usize>,

    /// chrono format string for date cells.
    #[serde(default)]
    pub date_format: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Side panel width (allocator offset).
    pub side_panel_width: u16,
    /// Sample row count.
    pub sample_rows: usize,
    /// chrono format string for date cells.
    pub date_format: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            side_panel_width: 24,
            sample_rows: 40,
            date_format: "%Y-%m-%d %H:%M".to_string(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/flextab/flextab.log` on Unix-like systems, or the
/// platform equivalent elsewhere. Falls back to the current directory when
/// the state directory cannot be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("flextab").join("flextab.log")
    } else {
        PathBuf::from("flextab.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
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
/// Returns `~/.config/flextab/config.toml` on Unix, the platform equivalent
/// elsewhere. Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("flextab").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `FLEXTAB_CONFIG` environment variable
/// 3. Default path `~/.config/flextab/config.toml`
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

    if let Ok(env_path) = std::env::var("FLEXTAB_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        side_panel_width: config.side_panel_width.unwrap_or(defaults.side_panel_width),
        sample_rows: config.sample_rows.unwrap_or(defaults.sample_rows),
        date_format: config.date_format.unwrap_or(defaults.date_format),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FLEXTAB_SIDE_PANEL_WIDTH`: override the side panel width
/// - `FLEXTAB_DATE_FORMAT`: override the date format
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(width) = std::env::var("FLEXTAB_SIDE_PANEL_WIDTH") {
        if let Ok(width) = width.parse::<u16>() {
            config.side_panel_width = width;
        }
    }

    if let Ok(format) = std::env::var("FLEXTAB_DATE_FORMAT") {
        config.date_format = format;
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
    offset_override: Option<u16>,
    sample_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(offset) = offset_override {
        config.side_panel_width = offset;
    }

    if let Some(sample) = sample_override {
        config.sample_rows = sample;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    fn empty_config_file() -> ConfigFile {
        ConfigFile {
            side_panel_width: None,
            sample_rows: None,
            date_format: None,
            log_file_path: None,
        }
    }

    #[test]
    fn defaults_are_sensible() {
        let config = ResolvedConfig::default();
        assert_eq!(config.side_panel_width, 24);
        assert_eq!(config.sample_rows, 40);
        assert_eq!(config.date_format, "%Y-%m-%d %H:%M");
        assert!(!config.log_file_path.as_os_str().is_empty());
    }

    #[test]
    fn default_log_path_ends_with_flextab_log() {
        let path = default_log_path();
        assert!(
            path.to_string_lossy().ends_with("flextab.log"),
            "got: {path:?}"
        );
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let missing = std::env::temp_dir().join("flextab_no_such_config_98765.toml");
        let result = load_config_file(missing).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn valid_toml_parses_all_fields() {
        let test_file = std::env::temp_dir().join("flextab_config_valid.toml");
        fs::write(
            &test_file,
            "side_panel_width = 30\nsample_rows = 10\ndate_format = \"%d.%m.%Y\"\nlog_file_path = \"/tmp/ft.log\"\n",
        )
        .unwrap();

        let config = load_config_file(&test_file).unwrap().unwrap();
        let _ = fs::remove_file(&test_file);

        assert_eq!(config.side_panel_width, Some(30));
        assert_eq!(config.sample_rows, Some(10));
        assert_eq!(config.date_format.as_deref(), Some("%d.%m.%Y"));
        assert_eq!(config.log_file_path, Some(PathBuf::from("/tmp/ft.log")));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let test_file = std::env::temp_dir().join("flextab_config_invalid.toml");
        fs::write(&test_file, "side_panel_width = [not toml").unwrap();

        let result = load_config_file(&test_file);
        let _ = fs::remove_file(&test_file);

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let test_file = std::env::temp_dir().join("flextab_config_unknown.toml");
        fs::write(&test_file, "no_such_option = 1\n").unwrap();

        let result = load_config_file(&test_file);
        let _ = fs::remove_file(&test_file);

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn merge_uses_file_values_over_defaults() {
        let config_file = ConfigFile {
            side_panel_width: Some(32),
            ..empty_config_file()
        };

        let resolved = merge_config(Some(config_file));

        assert_eq!(resolved.side_panel_width, 32);
        assert_eq!(resolved.sample_rows, ResolvedConfig::default().sample_rows);
    }

    #[test]
    fn merge_without_file_yields_defaults() {
        assert_eq!(merge_config(None), ResolvedConfig::default());
    }

    #[test]
    #[serial]
    fn env_override_wins_over_file() {
        std::env::set_var("FLEXTAB_SIDE_PANEL_WIDTH", "50");

        let from_file = merge_config(Some(ConfigFile {
            side_panel_width: Some(32),
            ..empty_config_file()
        }));
        let resolved = apply_env_overrides(from_file);

        std::env::remove_var("FLEXTAB_SIDE_PANEL_WIDTH");

        assert_eq!(resolved.side_panel_width, 50);
    }

    #[test]
    #[serial]
    fn unparsable_env_value_is_ignored() {
        std::env::set_var("FLEXTAB_SIDE_PANEL_WIDTH", "wide");

        let resolved = apply_env_overrides(ResolvedConfig::default());

        std::env::remove_var("FLEXTAB_SIDE_PANEL_WIDTH");

        assert_eq!(resolved.side_panel_width, 24);
    }

    #[test]
    #[serial]
    fn cli_override_wins_over_env() {
        std::env::set_var("FLEXTAB_SIDE_PANEL_WIDTH", "50");

        let resolved = apply_cli_overrides(
            apply_env_overrides(ResolvedConfig::default()),
            Some(12),
            None,
        );

        std::env::remove_var("FLEXTAB_SIDE_PANEL_WIDTH");

        assert_eq!(resolved.side_panel_width, 12);
    }

    #[test]
    fn cli_sample_override_applies() {
        let resolved = apply_cli_overrides(ResolvedConfig::default(), None, Some(3));
        assert_eq!(resolved.sample_rows, 3);
    }

    #[test]
    #[serial]
    fn explicit_path_beats_env_config() {
        let explicit = std::env::temp_dir().join("flextab_config_explicit.toml");
        let via_env = std::env::temp_dir().join("flextab_config_via_env.toml");
        fs::write(&explicit, "sample_rows = 1\n").unwrap();
        fs::write(&via_env, "sample_rows = 2\n").unwrap();
        std::env::set_var("FLEXTAB_CONFIG", &via_env);

        let config = load_config_with_precedence(Some(explicit.clone()))
            .unwrap()
            .unwrap();

        std::env::remove_var("FLEXTAB_CONFIG");
        let _ = fs::remove_file(&explicit);
        let _ = fs::remove_file(&via_env);

        assert_eq!(config.sample_rows, Some(1));
    }

    #[test]
    #[serial]
    fn env_config_path_is_used_when_no_explicit_path() {
        let via_env = std::env::temp_dir().join("flextab_config_env_only.toml");
        fs::write(&via_env, "sample_rows = 7\n").unwrap();
        std::env::set_var("FLEXTAB_CONFIG", &via_env);

        let config = load_config_with_precedence(None).unwrap().unwrap();

        std::env::remove_var("FLEXTAB_CONFIG");
        let _ = fs::remove_file(&via_env);

        assert_eq!(config.sample_rows, Some(7));
    }
}
