//! numjumble crate root
//!
//! Finds digit-words ("zero" .. "nine") hidden in a jumble of letters and
//! returns the digits they spell, e.g. `"oaadnggeghthwhtohtthrtthehe"`
//! gives `"123"`.
//!
//! Public API exported here:
//! - `find_number` / `scan_number` / `solve` convenience entry points
//! - `IncrementalMatcher` and `TrieStrategy` from `matcher`
//! - `ScanStrategy` from `scanner`
//! - `JumbleConfig` and `Strategy` from `config`

pub mod config;
pub mod matcher;
pub mod scanner;

// Convenience re-exports for common types used by callers.
pub use config::{JumbleConfig, Strategy};
pub use matcher::{IncrementalMatcher, TrieStrategy};
pub use numjumble_core::{spell_digits, strip_noise, Config, DigitExtractor, Engine, DIGIT_WORDS};
pub use scanner::ScanStrategy;

/// Find the number hidden in `input` with the trie matcher.
///
/// Returns `None` when no digit-word occurs at all.
///
/// # Example
/// ```
/// assert_eq!(numjumble::find_number("oaadnggeghthwhtohtthrtthehe"), Some("123".to_string()));
/// assert_eq!(numjumble::find_number("abcd"), None);
/// ```
pub fn find_number(input: &str) -> Option<String> {
    Engine::<TrieStrategy>::default().find_number(input)
}

/// Same as [`find_number`] but with the regex scanner.
pub fn scan_number(input: &str) -> Option<String> {
    Engine::<ScanStrategy>::default().find_number(input)
}

/// Run the strategy selected in `config`.
pub fn solve(input: &str, config: &JumbleConfig) -> Option<String> {
    let base = config.base().clone();
    match config.strategy {
        Strategy::Trie => Engine::new(TrieStrategy, base).find_number(input),
        Strategy::Scan => Engine::new(ScanStrategy::new(), base).find_number(input),
    }
}
