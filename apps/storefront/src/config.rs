//! # Storefront Configuration
//!
//! Where shopper state is stored and how the stores read it back.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ATELIER_STORAGE=memory                                             │
//! │     ATELIER_DATA_PATH=/tmp/storefront.json                             │
//! │     ATELIER_ON_MALFORMED=fail                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/com.atelier.storefront/ (macOS)      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     File storage in the platform data dir, Reset policy                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [storage]
//! backend = "file"          # file | memory
//! path = "/var/lib/atelier/storefront.json"
//!
//! [store]
//! cart_key = "cart"
//! favorites_key = "favorites"
//! language_key = "language"
//! on_malformed = "reset"    # reset | fail
//! ```

use std::path::PathBuf;

use atelier_store::{MalformedStatePolicy, StoreOptions};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Fallback data file when no platform data directory is known.
const DATA_FILE_NAME: &str = "storefront.json";

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Storage Backend
// =============================================================================

/// Which key-value backend holds shopper state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file, survives restarts.
    File { path: PathBuf },

    /// Process memory only. Everything is gone on exit.
    Memory,
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::File {
            path: default_data_path(),
        }
    }
}

// =============================================================================
// Storefront Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub storage: StorageBackend,

    #[serde(default)]
    pub store: StoreOptions,
}

impl StorefrontConfig {
    /// In-memory storage with default keys. Used by tests and demos.
    pub fn in_memory() -> Self {
        StorefrontConfig {
            storage: StorageBackend::Memory,
            store: StoreOptions::default(),
        }
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let keys = [
            ("cart_key", &self.store.cart_key),
            ("favorites_key", &self.store.favorites_key),
            ("language_key", &self.store.language_key),
        ];

        for (field, key) in keys {
            if key.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", field)));
            }
        }

        for (i, (field, key)) in keys.iter().enumerate() {
            if let Some((other, _)) = keys[i + 1..].iter().find(|(_, k)| k == key) {
                return Err(ConfigError::Invalid(format!(
                    "{} and {} share the key '{}'",
                    field, other, key
                )));
            }
        }

        if let StorageBackend::File { path } = &self.storage {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("storage path must not be empty".into()));
            }
        }

        Ok(())
    }

    /// Applies overrides from `lookup`, normally the process environment.
    ///
    /// `ATELIER_DATA_PATH` implies file storage unless `ATELIER_STORAGE`
    /// asks for memory.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("ATELIER_DATA_PATH") {
            debug!(path = %path, "Overriding data path from environment");
            self.storage = StorageBackend::File {
                path: PathBuf::from(path),
            };
        }

        if let Some(storage) = lookup("ATELIER_STORAGE") {
            match storage.to_lowercase().as_str() {
                "memory" => self.storage = StorageBackend::Memory,
                "file" => {
                    if self.storage == StorageBackend::Memory {
                        self.storage = StorageBackend::default();
                    }
                }
                _ => warn!(storage = %storage, "Unknown storage backend in environment"),
            }
        }

        if let Some(policy) = lookup("ATELIER_ON_MALFORMED") {
            match policy.parse::<MalformedStatePolicy>() {
                Ok(parsed) => {
                    debug!(policy = %policy, "Overriding malformed-state policy from environment");
                    self.store.on_malformed = parsed;
                }
                Err(e) => warn!("{}", e),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "atelier", "storefront")
}

/// Platform data file, e.g. `~/.local/share/storefront/storefront.json`.
fn default_data_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join(DATA_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert!(matches!(config.storage, StorageBackend::File { .. }));
        assert_eq!(config.store, StoreOptions::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(
            &path,
            r#"
            [storage]
            backend = "file"
            path = "/srv/atelier/state.json"

            [store]
            cart_key = "atelier-cart"
            on_malformed = "fail"
            "#,
        )
        .unwrap();

        let mut config: StorefrontConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        config.apply_overrides(env(&[]));

        assert_eq!(
            config.storage,
            StorageBackend::File {
                path: PathBuf::from("/srv/atelier/state.json")
            }
        );
        assert_eq!(config.store.cart_key, "atelier-cart");
        assert_eq!(config.store.favorites_key, "favorites");
        assert_eq!(config.store.on_malformed, MalformedStatePolicy::Fail);
    }

    #[test]
    fn test_load_reads_given_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[storage]\nbackend = \"memory\"\n").unwrap();

        // environment overrides may apply on top, so only assert what they
        // cannot turn into an error
        let config = StorefrontConfig::load(Some(path)).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[storage\nbackend = ").unwrap();

        let err = StorefrontConfig::load(Some(path.clone())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        // falls back instead of failing
        let config = StorefrontConfig::load_or_default(Some(path));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = StorefrontConfig::default();
        config.apply_overrides(env(&[
            ("ATELIER_DATA_PATH", "/tmp/shop.json"),
            ("ATELIER_ON_MALFORMED", "FAIL"),
        ]));
        assert_eq!(
            config.storage,
            StorageBackend::File {
                path: PathBuf::from("/tmp/shop.json")
            }
        );
        assert_eq!(config.store.on_malformed, MalformedStatePolicy::Fail);

        config.apply_overrides(env(&[("ATELIER_STORAGE", "memory")]));
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    fn test_unknown_env_values_are_ignored() {
        let mut config = StorefrontConfig::in_memory();
        config.apply_overrides(env(&[
            ("ATELIER_STORAGE", "redis"),
            ("ATELIER_ON_MALFORMED", "shrug"),
        ]));
        assert_eq!(config, StorefrontConfig::in_memory());
    }

    #[test]
    fn test_validation() {
        let mut config = StorefrontConfig::in_memory();
        assert!(config.validate().is_ok());

        config.store.language_key = "  ".to_string();
        assert!(config.validate().is_err());

        config.store.language_key = "cart".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("cart_key and language_key"));

        config.store.language_key = "language".to_string();
        config.storage = StorageBackend::File {
            path: PathBuf::new(),
        };
        assert!(config.validate().is_err());
    }
}
