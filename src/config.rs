//! Catalog configuration module.
//!
//! Handles loading, validating, and merging `folio.toml`. Stock defaults are
//! serialized to a TOML table and the user's file is merged on top of it, so
//! a config file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! base_url = "http://localhost/folio"  # URL prefix collections are published under
//! root = "media"                       # Directory whose subdirectories are collections
//!
//! [scan]
//! batch_size = 10            # Directory entries per read (must be > 0)
//! sort_collections = false   # List collections sorted by name
//!
//! [logging]
//! filter = "info"            # tracing EnvFilter directive (RUST_LOG wins)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// File name looked up by [`load_config`].
pub const CONFIG_FILENAME: &str = "folio.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Catalog configuration loaded from `folio.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// URL prefix every collection URL is joined onto.
    pub base_url: String,
    /// Store root directory.
    pub root: String,
    /// Directory scanning options.
    pub scan: ScanConfig,
    /// Log filtering for the `folio` binary.
    pub logging: LoggingConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost/folio".to_string(),
            root: "media".to_string(),
            scan: ScanConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Validation("base_url must not be empty".into()));
        }
        if self.root.trim().is_empty() {
            return Err(ConfigError::Validation("root must not be empty".into()));
        }
        if self.scan.batch_size == 0 {
            return Err(ConfigError::Validation(
                "scan.batch_size must be greater than 0".into(),
            ));
        }
        if let Err(e) = EnvFilter::try_new(&self.logging.filter) {
            return Err(ConfigError::Validation(format!(
                "logging.filter is not a valid filter: {e}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Directory entries requested per read. Results do not depend on it.
    pub batch_size: usize,
    /// Return collection listings sorted by name instead of map order.
    pub sort_collections: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            batch_size: crate::store::DEFAULT_BATCH_SIZE,
            sort_collections: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(CatalogConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<CatalogConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: CatalogConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `folio.toml` from `dir`, falling back to defaults if it is absent.
pub fn load_config(dir: &Path) -> Result<CatalogConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    if !path.exists() {
        return resolve_config(None);
    }
    load_config_file(&path)
}

/// Load an explicit config file. The file must exist.
pub fn load_config_file(path: &Path) -> Result<CatalogConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    resolve_config(Some(value))
}

/// Returns a fully-commented stock `folio.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# URL prefix collections are published under. Collection and image URLs are
# always joined with "/", e.g. <base_url>/<collection>/<image>.
base_url = "http://localhost/folio"

# Store root. Every immediate subdirectory is a collection; files at the
# root and deeper subdirectories are ignored.
root = "media"

# ---------------------------------------------------------------------------
# Directory scanning
# ---------------------------------------------------------------------------
[scan]
# Directory entries requested per read. Any value > 0 gives the same result.
batch_size = 10

# List collections sorted by name. When false the order is unspecified but
# stable for each listing.
sort_collections = false

# ---------------------------------------------------------------------------
# Logging
# ---------------------------------------------------------------------------
[logging]
# tracing filter directive, e.g. "info" or "folio=debug".
# The RUST_LOG environment variable takes precedence.
filter = "info"
"##
}
