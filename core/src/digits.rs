//! Digit-word alphabet and the first/last letter digit lookup.

/// Target words, indexed by the digit they spell.
pub const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Map a matched digit-word to its digit character.
///
/// Only the first letter is inspected, plus the last letter where two words
/// share a first letter ("two"/"three", "four"/"five", "six"/"seven"). The
/// text is assumed to already be a validated match, so any gap letters
/// between the first and last letter are irrelevant.
///
/// Returns `None` when the first/last pair does not belong to a digit-word.
///
/// # Example
/// ```
/// use numjumble_core::digits::word_to_digit;
///
/// assert_eq!(word_to_digit("three"), Some('3'));
/// assert_eq!(word_to_digit("fxxive"), Some('5'));
/// assert_eq!(word_to_digit("hello"), None);
/// ```
pub fn word_to_digit(text: &str) -> Option<char> {
    let first = text.chars().next()?;
    let last = text.chars().next_back()?;
    match (first, last) {
        ('z', _) => Some('0'),
        ('o', _) => Some('1'),
        ('e', _) => Some('8'),
        ('n', _) => Some('9'),
        ('t', 'o') => Some('2'),
        ('t', 'e') => Some('3'),
        ('f', 'r') => Some('4'),
        ('f', 'e') => Some('5'),
        ('s', 'x') => Some('6'),
        ('s', 'n') => Some('7'),
        _ => None,
    }
}

/// Same lookup as [`word_to_digit`], as a number.
pub fn word_value(text: &str) -> Option<u8> {
    word_to_digit(text)
        .and_then(|d| d.to_digit(10))
        .map(|v| v as u8)
}

/// Spelling of a single digit.
pub fn digit_word(digit: u8) -> Option<&'static str> {
    DIGIT_WORDS.get(digit as usize).copied()
}

/// Spell out a digit string, skipping anything that is not a digit.
///
/// # Example
/// ```
/// use numjumble_core::digits::spell_digits;
///
/// assert_eq!(spell_digits("120"), vec!["one", "two", "zero"]);
/// ```
pub fn spell_digits(digits: &str) -> Vec<&'static str> {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .filter_map(|d| digit_word(d as u8))
        .collect()
}
