//! Regex scan strategy.
//!
//! Each target word becomes a pattern that allows any letters between its
//! own letters (`o.*?n.*?e`). Scanning repeatedly takes the match that
//! completes first, records its digit and resumes right after it. Picking
//! the earliest completion (ties go to the earlier start) is what makes this
//! strategy agree with the trie matcher, which also reports a word on the
//! letter that completes it.

use numjumble_core::{word_to_digit, DigitExtractor, DIGIT_WORDS};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

static DIGIT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    DIGIT_WORDS
        .iter()
        .map(|w| Regex::new(&gapped_pattern(w)).expect("digit-word patterns are valid"))
        .collect()
});

/// Build a pattern matching `word`'s letters in order with arbitrary gaps.
fn gapped_pattern(word: &str) -> String {
    let letters: Vec<String> = word
        .chars()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect();
    format!("(?s){}", letters.join(".*?"))
}

/// Regex-based extraction strategy.
#[derive(Debug, Clone)]
pub struct ScanStrategy {
    patterns: Vec<Regex>,
}

impl Default for ScanStrategy {
    fn default() -> Self {
        Self {
            patterns: (*DIGIT_PATTERNS).clone(),
        }
    }
}

impl ScanStrategy {
    /// Scanner over the ten digit-words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scanner over a custom word list.
    ///
    /// Matched spans are still converted with the first/last letter digit
    /// lookup, so words outside that table are found but contribute nothing.
    pub fn with_words<T: AsRef<str>>(words: &[T]) -> Result<Self, regex::Error> {
        let patterns = words
            .iter()
            .map(|w| w.as_ref())
            .filter(|w| !w.is_empty())
            .map(|w| Regex::new(&gapped_pattern(w)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Matched spans in scan order, as `(start, end)` byte offsets.
    pub fn spans(&self, letters: &str) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        let mut pos = 0;
        while pos <= letters.len() {
            let best = self
                .patterns
                .iter()
                .filter_map(|re| re.find_at(letters, pos))
                .min_by_key(|m| (m.end(), m.start()));
            match best {
                Some(m) => {
                    spans.push((m.start(), m.end()));
                    pos = m.end();
                }
                None => break,
            }
        }
        spans
    }
}

impl DigitExtractor for ScanStrategy {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn extract_digits(&self, letters: &str) -> String {
        let mut digits = String::new();
        for (start, end) in self.spans(letters) {
            let span = &letters[start..end];
            match word_to_digit(span) {
                Some(d) => {
                    debug!(span, digit = %d, "digit-word matched");
                    digits.push(d);
                }
                None => warn!(span, "matched span has no digit"),
            }
        }
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gapped_pattern() {
        assert_eq!(gapped_pattern("one"), "(?s)o.*?n.*?e");
    }

    #[test]
    fn test_spans_resume_after_match() {
        let scanner = ScanStrategy::new();
        assert_eq!(scanner.spans("onetwo"), vec![(0, 3), (3, 6)]);
        assert_eq!(scanner.spans("xxsix"), vec![(2, 5)]);
        assert!(scanner.spans("").is_empty());
    }

    #[test]
    fn test_earliest_completion_wins_over_earlier_start() {
        // "four" could start at 0 and swallow "five", but "five" completes first
        assert_eq!(ScanStrategy::new().extract_digits("fivefour"), "54");
    }

    #[test]
    fn test_tie_goes_to_earlier_start() {
        // "one" and "three" both complete on the final 'e'
        assert_eq!(ScanStrategy::new().extract_digits("othrene"), "1");
    }

    #[test]
    fn test_custom_words() {
        let scanner = ScanStrategy::with_words(&["cat", "", "dog"]).expect("valid patterns");
        assert_eq!(scanner.spans("xcaztdog"), vec![(1, 5), (5, 8)]);
        // neither word is in the digit table
        assert_eq!(scanner.extract_digits("xcaztdog"), "");
    }

    #[test]
    fn test_prefix_word_found_in_either_order() {
        for words in [["a", "ab"], ["ab", "a"]] {
            let scanner = ScanStrategy::with_words(&words).expect("valid patterns");
            assert_eq!(scanner.spans("xab"), vec![(1, 2)], "words {:?}", words);
        }
    }
}
