//! numjumble configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `numjumble_core::Config` (flattened via serde)
//! - The extraction strategy to run
//!
//! # Example
//!
//! ```rust
//! use numjumble::{JumbleConfig, Strategy};
//!
//! let config = JumbleConfig::from_toml_str("strategy = \"scan\"\nstrip_noise = false").unwrap();
//! assert_eq!(config.strategy, Strategy::Scan);
//! assert!(!config.base().strip_noise);
//! ```
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Which extractor answers a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Incremental prefix-tree matcher
    #[default]
    Trie,
    /// Earliest-completion regex scan
    Scan,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct JumbleConfig {
    /// Base configuration fields (noise filtering)
    #[serde(flatten)]
    pub base: numjumble_core::Config,

    #[serde(default)]
    pub strategy: Strategy,
}

impl JumbleConfig {
    /// Convert this config into the base config
    pub fn into_base(self) -> numjumble_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &numjumble_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut numjumble_core::Config {
        &mut self.base
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: JumbleConfig = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
