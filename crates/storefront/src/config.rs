//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SIDABUKKE_DATA_DIR` - Directory for stored JSON documents (default: .sidabukke)
//! - `SIDABUKKE_STORAGE` - `file` or `memory` (default: file)
//! - `SIDABUKKE_STORE_NAME` - Shop name shown in headers (default: Sidabukke Teh)
//! - `RUST_LOG` - Log filter, read by the binary's tracing subscriber

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".sidabukke";
const DEFAULT_STORE_NAME: &str = "Sidabukke Teh";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where the store container's collections are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// JSON files under the data directory.
    #[default]
    File,
    /// Process memory; nothing survives exit.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(format!("expected `file` or `memory`, got `{other}`")),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory holding `user.json`, `cart.json` and `orders.json`
    pub data_dir: PathBuf,
    /// Storage backend
    pub storage: StorageBackend,
    /// Shop name for display
    pub store_name: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage: StorageBackend::File,
            store_name: DEFAULT_STORE_NAME.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = get_env_or_default(&lookup, "SIDABUKKE_DATA_DIR", DEFAULT_DATA_DIR);
        let storage = get_optional_env(&lookup, "SIDABUKKE_STORAGE")
            .map(|v| {
                v.parse::<StorageBackend>()
                    .map_err(|e| ConfigError::InvalidEnvVar("SIDABUKKE_STORAGE".to_string(), e))
            })
            .transpose()?
            .unwrap_or_default();

        let store_name = get_env_or_default(&lookup, "SIDABUKKE_STORE_NAME", DEFAULT_STORE_NAME);

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            storage,
            store_name,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable; blank counts as unset.
fn get_optional_env(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> String {
    get_optional_env(lookup, key).unwrap_or_else(|| default.to_string())
}
