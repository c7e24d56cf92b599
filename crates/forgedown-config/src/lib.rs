//! Forgedown Config
//!
//! This crate handles site configuration loading for forgedown,
//! supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration lives next to the content it describes: `load()`
//! reads `./forgedown.toml` from the working directory when present
//! and falls back to defaults otherwise.
//!
//! # Example
//!
//! ```
//! use forgedown_config::Config;
//!
//! let config = Config::default();
//! assert!(config.site.base_url.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use forgedown_core::{ForgedownError, Result};

/// Name of the configuration file searched in the working directory.
pub const CONFIG_FILE: &str = "forgedown.toml";

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[site]
base_url = ""

[content]
system_dir = "./Content/System"
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings
    #[serde(default)]
    pub site: SiteConfig,

    /// Content-tree settings
    #[serde(default)]
    pub content: ContentConfig,
}

/// Site-wide settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL for permalink and asset rewriting, no trailing slash
    #[serde(default)]
    pub base_url: String,
}

/// Content-tree settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding series-index files
    #[serde(default = "default_system_dir")]
    pub system_dir: PathBuf,
}

fn default_system_dir() -> PathBuf {
    PathBuf::from("./Content/System")
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            system_dir: default_system_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use forgedown_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[site]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Load configuration from `./forgedown.toml`, falling back to the
    /// defaults when no such file exists.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| ForgedownError::Config(format!("{}: {}", path.display(), e)))
    }
}
