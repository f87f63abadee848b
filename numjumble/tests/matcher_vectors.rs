// numjumble/tests/matcher_vectors.rs
//
// Extraction vectors for the trie matcher.
//
// Notes:
// - Inputs go through the full pipeline (noise filter + matcher) via `find_number`.
// - Tie-break vectors document the "earliest started branch wins" behavior:
//   when two words complete on the same letter only one digit is reported.

use numjumble::{find_number, IncrementalMatcher, DIGIT_WORDS};
use numjumble_core::NOISE_LETTERS;

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

/// Interleave one noise letter between every letter of `word`, plus padding.
fn scatter(word: &str, salt: usize) -> String {
    let noise: Vec<char> = NOISE_LETTERS.chars().collect();
    let mut out = String::new();
    out.push(noise[salt % noise.len()]);
    for (i, c) in word.chars().enumerate() {
        out.push(c);
        out.push(noise[(salt + i * 3) % noise.len()]);
        out.push(noise[(salt + i * 7 + 1) % noise.len()]);
    }
    out
}

#[test]
fn sample_jumble() {
    assert_eq!(find_number("oaadnggeghthwhtohtthrtthehe"), some("123"));
}

#[test]
fn simultaneous_completion_keeps_first_branch() {
    assert_eq!(find_number("othrene"), some("1"));
}

#[test]
fn each_word_with_noise_yields_its_digit() {
    for (digit, word) in DIGIT_WORDS.iter().enumerate() {
        for salt in 0..5 {
            let input = scatter(word, salt);
            assert_eq!(
                find_number(&input),
                Some(digit.to_string()),
                "input {}",
                input
            );
        }
    }
}

#[test]
fn all_words_end_to_end() {
    let input: String = DIGIT_WORDS.concat();
    assert_eq!(find_number(&input), some("0123456789"));

    let noisy: String = DIGIT_WORDS
        .iter()
        .enumerate()
        .map(|(i, w)| scatter(w, i))
        .collect();
    assert_eq!(find_number(&noisy), some("0123456789"));
}

#[test]
fn sequences() {
    assert_eq!(find_number("ojnkkeapbtcwdo"), some("12"));
    assert_eq!(find_number("threeone"), some("31"));
    assert_eq!(find_number("sixsixsix"), some("666"));
    assert_eq!(find_number("nineeight"), some("98"));
    assert_eq!(find_number("fivefour"), some("54"));
}

#[test]
fn leading_zeros_are_kept() {
    assert_eq!(find_number("zerozero"), some("00"));
    assert_eq!(find_number("zbearqo"), some("0"));
}

#[test]
fn merged_words_only_count_once() {
    // the shared letters belong to the first completed word
    assert_eq!(find_number("twone"), some("2"));
    assert_eq!(find_number("eightwo"), some("8"));
    assert_eq!(find_number("sevenineight"), some("78"));
}

#[test]
fn branches_in_progress_do_not_survive_a_match() {
    // the 'o' that completes "two" must not also leave an "o" branch behind
    // for the following "ne" to finish as "one"
    assert_eq!(find_number("xfnthewqonboeuootqt"), some("2"));
}

#[test]
fn absence_instead_of_empty_string() {
    assert_eq!(find_number(""), None);
    assert_eq!(find_number(NOISE_LETTERS), None);
    assert_eq!(find_number("thre"), None);
    assert_eq!(find_number("ONE"), None);
}

#[test]
fn foreign_characters_are_skipped() {
    assert_eq!(find_number("ONEtwo"), some("2"));
    assert_eq!(find_number("one two\nthree"), some("123"));
    assert_eq!(find_number("o-n-e 1 é"), some("1"));
}

#[test]
fn streaming_matches_batch() {
    let input = "oaadnggeghthwhtohtthrtthehe";
    let mut matcher = IncrementalMatcher::new();
    let emitted: String = numjumble::strip_noise(input)
        .chars()
        .filter_map(|l| matcher.push(l))
        .collect();
    assert_eq!(emitted, "123");
    assert_eq!(matcher.finish(), find_number(input));
}
