//! Static per-item-type configuration
//!
//! The host application declares its browsable item types once at
//! startup, either from a TOML file or programmatically. Each entry
//! carries the display name, default page size and preview settings for
//! one item type. The table is validated at load time and immutable
//! afterwards; requests resolve entries out of it by name but never
//! change it.

use config::{Config, File, FileFormat};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub mod error;

pub use error::ConfigError;

/// Page size applied when a configuration does not set one
pub const DEFAULT_LIMIT: usize = 25;

/// Item-type identifiers must start with a letter and contain only
/// letters, digits and underscores.
static ITEM_TYPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z][A-Za-z0-9_]*$").expect("valid identifier pattern"));

/// Settings for one browsable item type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemTypeConfig {
    /// Item-type identifier, the registry key for this type's backend
    pub item_type: String,
    /// Human-readable name shown in browser UIs
    pub name: String,
    /// Page size used when a request does not specify one
    pub default_limit: usize,
    /// Whether item previews are enabled for this type
    pub preview: bool,
    /// Template reference used to render previews
    pub template: Option<String>,
}

impl ItemTypeConfig {
    /// The preview template, if previews are enabled and a template is set
    #[must_use]
    pub fn preview_template(&self) -> Option<&str> {
        if self.preview {
            self.template.as_deref()
        } else {
            None
        }
    }
}

/// One `[item_types.<id>]` table as it appears in the TOML source
#[derive(Debug, Deserialize)]
struct ItemTypeEntry {
    name: String,
    #[serde(default = "default_limit")]
    default_limit: usize,
    #[serde(default = "default_preview")]
    preview: bool,
    #[serde(default)]
    template: Option<String>,
}

const fn default_limit() -> usize {
    DEFAULT_LIMIT
}

const fn default_preview() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    item_types: IndexMap<String, ItemTypeEntry>,
}

/// Validated table of item-type configurations, keyed by identifier
///
/// Preserves declaration order so enumeration is stable for UI display.
#[derive(Debug, Default)]
pub struct BrowserConfig {
    item_types: IndexMap<String, ItemTypeConfig>,
}

impl BrowserConfig {
    /// Create an empty configuration table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, if an
    /// item-type identifier fails the identifier pattern, or if a default
    /// limit is zero.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref().to_path_buf()).format(FileFormat::Toml))
            .build()?;

        Self::from_raw(settings.try_deserialize()?)
    }

    /// Load and validate configuration from an inline TOML string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` under the same conditions as [`Self::from_file`].
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Self::from_raw(toml::from_str(source)?)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let mut config = Self::new();
        for (item_type, entry) in raw.item_types {
            config.add(ItemTypeConfig {
                item_type,
                name: entry.name,
                default_limit: entry.default_limit,
                preview: entry.preview,
                template: entry.template,
            })?;
        }

        Ok(config)
    }

    /// Add a configuration entry, validating its identifier and limits
    ///
    /// A second entry for the same item type replaces the first.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidItemType` if the identifier fails the
    /// identifier pattern and `ConfigError::InvalidLimit` if the default
    /// limit is zero.
    pub fn add(&mut self, item_type_config: ItemTypeConfig) -> Result<(), ConfigError> {
        if !ITEM_TYPE_PATTERN.is_match(&item_type_config.item_type) {
            return Err(ConfigError::InvalidItemType(item_type_config.item_type));
        }
        if item_type_config.default_limit == 0 {
            return Err(ConfigError::InvalidLimit(item_type_config.item_type));
        }

        self.item_types
            .insert(item_type_config.item_type.clone(), item_type_config);
        Ok(())
    }

    /// Get the configuration for an item type by name
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownConfig` carrying the requested name
    /// if no such configuration exists.
    pub fn get(&self, name: &str) -> Result<&ItemTypeConfig, ConfigError> {
        self.item_types
            .get(name)
            .ok_or_else(|| ConfigError::UnknownConfig(name.to_string()))
    }

    /// Whether a configuration exists for the item type
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.item_types.contains_key(name)
    }

    /// Iterate over all configurations in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &ItemTypeConfig> {
        self.item_types.values()
    }

    /// Number of configured item types
    #[must_use]
    pub fn len(&self) -> usize {
        self.item_types.len()
    }

    /// Whether no item type is configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_types.is_empty()
    }
}
