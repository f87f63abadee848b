// numjumble/src/matcher.rs
//
// Incremental word matcher.
// - Grows a PrefixTree one letter at a time toward the ten digit-words
// - Emits a digit and resets the tree whenever a branch completes
// - Simultaneous completions keep only the branch that was started first

use numjumble_core::{word_to_digit, DigitExtractor, PrefixTree, DIGIT_WORDS};
use tracing::{debug, warn};

/// Streaming matcher over a cleaned letter sequence.
///
/// Letters are pushed one by one. Each recognized word is turned into its
/// digit and appended to the running result, after which all partial
/// matches are abandoned and matching starts over from a bare root.
///
/// # Example
/// ```
/// use numjumble::IncrementalMatcher;
///
/// let mut matcher = IncrementalMatcher::new();
/// let digits: Vec<char> = "twxo".chars().filter_map(|l| matcher.push(l)).collect();
/// assert_eq!(digits, vec!['2']);
/// assert_eq!(matcher.finish(), Some("2".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct IncrementalMatcher {
    tree: PrefixTree,
    digits: String,
}

impl Default for IncrementalMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl IncrementalMatcher {
    pub fn new() -> Self {
        Self {
            tree: PrefixTree::new(&DIGIT_WORDS),
            digits: String::new(),
        }
    }

    /// Consume one letter. Returns the digit recognized on this letter, if any.
    pub fn push(&mut self, letter: char) -> Option<char> {
        let word = self.tree.extend(letter)?;
        let digit = word_to_digit(word);
        match digit {
            Some(d) => {
                debug!(word, digit = %d, "digit-word recognized");
                self.digits.push(d);
            }
            None => warn!(word, "completed word has no digit"),
        }
        self.tree.reset();
        digit
    }

    /// Digits found so far.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The prefix tree as it stands after the last letter.
    pub fn tree(&self) -> &PrefixTree {
        &self.tree
    }

    /// Final result: `None` if no digit-word was ever completed.
    pub fn finish(self) -> Option<String> {
        if self.digits.is_empty() {
            None
        } else {
            Some(self.digits)
        }
    }
}

/// Trie-based extraction strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrieStrategy;

impl DigitExtractor for TrieStrategy {
    fn name(&self) -> &'static str {
        "trie"
    }

    fn extract_digits(&self, letters: &str) -> String {
        let mut matcher = IncrementalMatcher::new();
        for l in letters.chars() {
            matcher.push(l);
        }
        matcher.digits
    }
}
