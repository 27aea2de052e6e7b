// PortalNav - platform/config.rs
//
// Platform-specific configuration, data directory resolution, and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for PortalNav data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/portalnav/ or %APPDATA%\PortalNav\config\)
    pub config_dir: PathBuf,

    /// Data directory for the persisted session.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[server]` section.
    pub server: ServerSection,
    /// `[session]` section.
    pub session: SessionSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[server]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Backend base URL, e.g. "http://localhost:9090".
    pub base_url: Option<String>,
}

/// `[session]` config section: the permission and feature snapshot.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SessionSection {
    /// Allowed route paths.
    pub pages: Option<Vec<String>>,
    /// Enabled feature names.
    pub features: Option<Vec<String>>,
    pub operator_mode: Option<bool>,
    pub distributed_setup: Option<bool>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // -- Server --
    pub server_url: String,

    // -- Session --
    pub pages: Vec<String>,
    /// `None` when no feature list was configured.
    pub features: Option<Vec<String>>,
    pub operator_mode: bool,
    pub distributed_setup: Option<bool>,

    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: constants::DEFAULT_SERVER_URL.to_string(),
            pages: Vec::new(),
            features: None,
            operator_mode: false,
            distributed_setup: None,
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
            log_file: None,
        }
    }
}

/// Path of `config.toml` inside the config directory.
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(constants::CONFIG_FILE_NAME)
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file yields defaults with no warnings (first run). A file that
/// cannot be read or parsed yields defaults plus a warning; the application
/// still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let path = config_path(config_dir);

    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    match read_raw(&path) {
        Ok(raw) => {
            tracing::info!(path = %path.display(), "Loaded config.toml");
            validate(raw)
        }
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            (AppConfig::default(), vec![msg])
        }
    }
}

fn read_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Validate each field of a raw config, accumulating all problems.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let mut config = AppConfig::default();

    // -- Server: base_url --
    if let Some(url) = raw.server.base_url {
        let trimmed = url.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            config.server_url = trimmed.trim_end_matches('/').to_string();
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[server] base_url".to_string(),
                    value: url.clone(),
                    expected: format!(
                        "an http:// or https:// URL. Using default ({})",
                        constants::DEFAULT_SERVER_URL
                    ),
                }
                .to_string(),
            );
        }
    }

    // -- Session: pages --
    if let Some(pages) = raw.session.pages {
        config.pages = validate_list(
            pages,
            "[session] pages",
            constants::MAX_ALLOWED_PAGES,
            |p| p.starts_with('/'),
            "route paths must start with '/'",
            &mut warnings,
        );
    }

    // -- Session: features --
    if let Some(features) = raw.session.features {
        config.features = Some(validate_list(
            features,
            "[session] features",
            constants::MAX_FEATURES,
            |f| !f.trim().is_empty(),
            "feature names must not be empty",
            &mut warnings,
        ));
    }

    config.operator_mode = raw.session.operator_mode.unwrap_or(false);
    config.distributed_setup = raw.session.distributed_setup;

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
                ));
            }
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(format!(
                "[ui] font_size = {size} is out of range ({}-{}). Using default ({}).",
                constants::MIN_FONT_SIZE,
                constants::MAX_FONT_SIZE,
                constants::DEFAULT_FONT_SIZE,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    // -- Logging: file --
    if let Some(file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file);
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

/// Keep the valid, de-duplicated values of a list setting, capped at `max`.
fn validate_list(
    values: Vec<String>,
    field: &str,
    max: usize,
    is_valid: impl Fn(&str) -> bool,
    rule: &str,
    warnings: &mut Vec<String>,
) -> Vec<String> {
    let mut kept: Vec<String> = Vec::new();
    for value in values {
        if !is_valid(value.as_str()) {
            warnings.push(format!("{field}: ignoring \"{value}\" ({rule})."));
        } else if !kept.contains(&value) {
            kept.push(value);
        }
    }
    if kept.len() > max {
        warnings.push(format!(
            "{field}: {} entries exceed the maximum of {max}; extra entries ignored.",
            kept.len()
        ));
        kept.truncate(max);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(toml_text: &str) -> (AppConfig, Vec<String>) {
        validate(toml::from_str(toml_text).unwrap())
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_full_config() {
        let (config, warnings) = parse(
            r#"
            [server]
            base_url = "https://console.example.com/"

            [session]
            pages = ["/buckets", "/logs", "/tenants"]
            features = ["log-search"]
            operator_mode = true
            distributed_setup = false

            [ui]
            theme = "light"
            font_size = 16.0

            [logging]
            level = "debug"
            file = "portalnav.log"
            "#,
        );
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.server_url, "https://console.example.com");
        assert_eq!(config.pages, vec!["/buckets", "/logs", "/tenants"]);
        assert_eq!(config.features, Some(vec!["log-search".to_string()]));
        assert!(config.operator_mode);
        assert_eq!(config.distributed_setup, Some(false));
        assert!(!config.dark_mode);
        assert_eq!(config.font_size, 16.0);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file.as_deref(), Some("portalnav.log"));
    }

    #[test]
    fn test_invalid_values_fall_back_with_warnings() {
        let (config, warnings) = parse(
            r#"
            [server]
            base_url = "ftp://nope"

            [ui]
            theme = "neon"
            font_size = 99.0

            [logging]
            level = "loud"
            "#,
        );
        assert_eq!(warnings.len(), 4, "{warnings:?}");
        assert_eq!(config.server_url, constants::DEFAULT_SERVER_URL);
        assert!(config.dark_mode);
        assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_bad_pages_are_dropped_and_duplicates_merged() {
        let (config, warnings) = parse(
            r#"
            [session]
            pages = ["/buckets", "buckets", "/buckets"]
            features = ["", "log-search"]
            "#,
        );
        assert_eq!(config.pages, vec!["/buckets"]);
        assert_eq!(config.features, Some(vec!["log-search".to_string()]));
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_absent_features_stay_none() {
        let (config, _) = parse("[session]\npages = []\n");
        assert_eq!(config.features, None);
    }

    #[test]
    fn test_unparseable_file_warns() {
        let dir = TempDir::new().unwrap();
        std::fs::write(config_path(dir.path()), b"[server\nbase_url = ").unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
    }
}
