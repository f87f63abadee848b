//! numjumble-core
//!
//! Digit-word alphabet, letter filter, growing prefix tree and the generic
//! extraction engine shared by the strategies in the `numjumble` crate.
//!
//! Public API:
//! - `DIGIT_WORDS`, `word_to_digit` - the alphabet and its digit lookup
//! - `strip_noise` - removes letters no digit-word uses
//! - `PrefixTree` - prefix tree grown one letter at a time
//! - `DigitExtractor` / `Engine` - strategy seam and the filter+extract pipeline
//! - `Config` - configuration shared by every strategy
use anyhow::Context;
use serde::{Deserialize, Serialize};

pub mod digits;
pub use digits::{digit_word, spell_digits, word_to_digit, word_value, DIGIT_WORDS};

pub mod filter;
pub use filter::{is_noise, strip_noise, NOISE_LETTERS};

pub mod trie;
pub use trie::{PrefixTree, TrieNode};

pub mod engine;
pub use engine::{DigitExtractor, Engine};

/// Generic configuration for extraction.
///
/// Strategy-specific options belong in `JumbleConfig` in the numjumble crate,
/// which flattens this struct.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Remove letters that belong to no digit-word before matching.
    /// Matching results are the same either way; the matcher just sees less input.
    pub strip_noise: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { strip_noise: true }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
