//! Letter filter.
//!
//! Removes the lowercase letters that appear in none of the digit-words
//! before matching. Anything else (including characters the matcher will
//! never use) is left alone.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Lowercase letters absent from every digit-word.
pub const NOISE_LETTERS: &str = "abcdjklmpqy";

static NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[{}]", NOISE_LETTERS)).expect("noise class is a valid pattern")
});

/// True if `c` is one of [`NOISE_LETTERS`].
pub fn is_noise(c: char) -> bool {
    NOISE_LETTERS.contains(c)
}

/// Strip all noise letters from `input`.
///
/// Borrows the input unchanged when there is nothing to strip, so running
/// it on an already filtered string costs no allocation.
///
/// # Example
/// ```
/// use numjumble_core::filter::strip_noise;
///
/// assert_eq!(strip_noise("oaadnggeghthwhtohtthrtthehe"), "onggeghthwhtohtthrtthehe");
/// ```
pub fn strip_noise(input: &str) -> Cow<'_, str> {
    NOISE.replace_all(input, "")
}
