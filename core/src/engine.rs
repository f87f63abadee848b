// core/src/engine.rs
//
// Generic extraction engine that works with any digit extractor.
// The trie matcher and the regex scanner in the numjumble crate both plug in here.

use tracing::debug;

use crate::filter::strip_noise;
use crate::Config;

/// Trait that extraction strategies must implement to work with the generic Engine.
pub trait DigitExtractor {
    /// Short strategy name used in log records.
    fn name(&self) -> &'static str;

    /// Extract the digits hidden in `letters`, in order.
    ///
    /// Returns an empty string when nothing matched; the engine turns that
    /// into `None`.
    fn extract_digits(&self, letters: &str) -> String;
}

/// Generic engine combining the letter filter with an extraction strategy.
///
/// Every call builds and discards its own matching state, so one engine can
/// serve any number of inputs.
#[derive(Debug, Clone)]
pub struct Engine<E> {
    extractor: E,
    config: Config,
}

impl<E: DigitExtractor> Engine<E> {
    pub fn new(extractor: E, config: Config) -> Self {
        Self { extractor, config }
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Find the number hidden in `input`.
    ///
    /// 1. Strip noise letters (unless disabled in the config)
    /// 2. Run the extractor over what is left
    /// 3. Report `None` if no digit-word was found at all
    pub fn find_number(&self, input: &str) -> Option<String> {
        let letters = if self.config.strip_noise {
            strip_noise(input)
        } else {
            input.into()
        };

        let digits = self.extractor.extract_digits(&letters);
        debug!(
            strategy = self.extractor.name(),
            input_len = input.len(),
            filtered_len = letters.len(),
            digits = %digits,
            "extraction finished"
        );

        if digits.is_empty() {
            None
        } else {
            Some(digits)
        }
    }
}

impl<E: DigitExtractor + Default> Default for Engine<E> {
    fn default() -> Self {
        Self::new(E::default(), Config::default())
    }
}
