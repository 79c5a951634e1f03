//! Configuration management
//!
//! Config file is stored next to the executable as `config.toml`.
//! History and base URL slots live in the data directory (`data/` by default).

use crate::constants::{DEFAULT_TIMEOUT_SECS, MAX_LOGS};
use crate::error::{InspectorError, Result};
use crate::history::FilterMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

// =============================================================================
// Application Configuration
// =============================================================================

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub history: HistoryConfig,
    pub storage: StorageConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Initial base URL, used until one is saved from the console
    pub base_url: String,

    /// Origin stripped from recorded URLs when the base URL is not their prefix
    /// Example: "http://localhost:8080"
    pub origin: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum persisted entries
    pub max_entries: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the history slots (empty = `data/` next to config)
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Default filter: "all", "success", or "error"
    pub default_filter: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            origin: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: MAX_LOGS,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_filter: "all".to_string(),
        }
    }
}

impl Config {
    /// Reject values the inspector cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.history.max_entries == 0 {
            return Err(InspectorError::ConfigValidation {
                field: "history.max_entries",
                reason: "must be at least 1".into(),
            });
        }
        if self.http.timeout_secs == 0 {
            return Err(InspectorError::ConfigValidation {
                field: "http.timeout_secs",
                reason: "must be at least 1".into(),
            });
        }
        self.ui
            .default_filter
            .parse::<FilterMode>()
            .map_err(|reason| InspectorError::ConfigValidation {
                field: "ui.default_filter",
                reason,
            })?;
        Ok(())
    }

    /// Configured default filter, `All` when unparsable
    pub fn default_filter(&self) -> FilterMode {
        self.ui.default_filter.parse().unwrap_or_else(|e| {
            warn!("{}, showing all entries", e);
            FilterMode::All
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }
}

/// Get the project root directory
///
/// Searches in order:
/// 1. Next to executable (production deployment)
/// 2. Up from target/release or target/debug (dev builds)
fn find_project_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| InspectorError::Io {
        path: PathBuf::from("executable"),
        source: e,
    })?;
    let exe_dir = exe.parent().ok_or_else(|| InspectorError::ConfigValidation {
        field: "exe_path",
        reason: "no parent directory".into(),
    })?;

    if exe_dir.join("config.toml").exists() {
        return Ok(exe_dir.to_path_buf());
    }

    // exe_dir = .../target/release, we want the crate root
    if let Some(target_dir) = exe_dir.parent() {
        if target_dir
            .file_name()
            .map(|n| n == "target")
            .unwrap_or(false)
        {
            if let Some(project_root) = target_dir.parent() {
                if project_root.join("Cargo.toml").exists() {
                    return Ok(project_root.to_path_buf());
                }
            }
        }
    }

    Ok(exe_dir.to_path_buf())
}

/// Get the config file path (`--config` wins over the default location)
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(find_project_root()?.join("config.toml")),
    }
}

/// Directory for durable slots: CLI override, then config, then `data/` beside the config
pub fn data_dir(config: &Config, explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = &config.storage.dir {
        return Ok(dir.clone());
    }
    Ok(find_project_root()?.join("data"))
}

/// Load config from file, or create default if not exists
pub fn load(explicit: Option<&Path>) -> Config {
    let path = match config_path(explicit) {
        Ok(p) => p,
        Err(e) => {
            warn!("Failed to determine config path: {}, using defaults", e);
            return Config::default();
        }
    };

    if !path.exists() {
        let config = Config::default();
        if let Err(e) = save(&config, &path) {
            warn!("Failed to create default config: {}", e);
        }
        return config;
    }

    let config: Config = match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Config parse error in {:?}: {}, using defaults", path, e);
                return Config::default();
            }
        },
        Err(e) => {
            warn!("Failed to read config {:?}: {}, using defaults", path, e);
            return Config::default();
        }
    };

    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            warn!("{} in {:?}, using defaults", e, path);
            Config::default()
        }
    }
}

/// Save config to file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let content =
        toml::to_string_pretty(config).map_err(|e| InspectorError::ConfigValidation {
            field: "config",
            reason: e.to_string(),
        })?;
    fs::write(path, content).map_err(|e| InspectorError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.http.base_url, "");
        assert_eq!(config.http.origin, None);
        assert_eq!(config.http.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.history.max_entries, 200);
        assert_eq!(config.storage.dir, None);
        assert_eq!(config.default_filter(), FilterMode::All);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialize_deserialize_roundtrip() {
        let config = Config {
            http: HttpConfig {
                base_url: "http://api.test".to_string(),
                origin: Some("http://localhost:8080".to_string()),
                timeout_secs: 5,
            },
            history: HistoryConfig { max_entries: 50 },
            storage: StorageConfig {
                dir: Some(PathBuf::from("/tmp/inspector")),
            },
            ui: UiConfig {
                default_filter: "error".to_string(),
            },
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let restored: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(restored.http.base_url, "http://api.test");
        assert_eq!(
            restored.http.origin.as_deref(),
            Some("http://localhost:8080")
        );
        assert_eq!(restored.http.timeout_secs, 5);
        assert_eq!(restored.history.max_entries, 50);
        assert_eq!(restored.storage.dir, Some(PathBuf::from("/tmp/inspector")));
        assert_eq!(restored.default_filter(), FilterMode::Error);
    }

    #[test]
    fn test_config_partial_section() {
        let partial_toml = r#"
[http]
origin = "http://localhost:3000"
"#;

        let config: Config = toml::from_str(partial_toml).unwrap();
        assert_eq!(config.http.origin.as_deref(), Some("http://localhost:3000"));
        // Rest should be defaults
        assert_eq!(config.http.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.history.max_entries, 200);
    }

    #[test]
    fn test_config_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.history.max_entries, 200);
        assert_eq!(config.ui.default_filter, "all");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.history.max_entries = 0;
        assert!(matches!(
            config.validate(),
            Err(InspectorError::ConfigValidation {
                field: "history.max_entries",
                ..
            })
        ));

        let mut config = Config::default();
        config.ui.default_filter = "verbose".into();
        assert!(config.validate().is_err());
        assert_eq!(config.default_filter(), FilterMode::All);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = load(Some(&path));
        assert_eq!(config.history.max_entries, 200);
        assert!(path.exists());
    }

    #[test]
    fn test_load_invalid_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[history]\nmax_entries = 0\n").unwrap();
        assert_eq!(load(Some(&path)).history.max_entries, 200);
    }

    #[test]
    fn test_data_dir_override_order() {
        let mut config = Config::default();
        config.storage.dir = Some(PathBuf::from("/from/config"));
        assert_eq!(
            data_dir(&config, Some(Path::new("/from/cli"))).unwrap(),
            PathBuf::from("/from/cli")
        );
        assert_eq!(
            data_dir(&config, None).unwrap(),
            PathBuf::from("/from/config")
        );
    }
}
