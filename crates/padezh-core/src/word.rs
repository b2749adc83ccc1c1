// Char-based suffix slicing helpers
//
// Every helper here works on char boundaries and never panics, whatever
// the length of its input. Slices borrow from the input where possible.

use crate::character::simple_lower;

/// Last character of the word, if any.
pub fn last(word: &str) -> Option<char> {
    word.chars().next_back()
}

/// True if the last character (compared in lowercase) is one of `set`.
pub fn last_is(word: &str, set: &[char]) -> bool {
    last(word).is_some_and(|c| set.contains(&simple_lower(c)))
}

/// The word without its last character.
///
/// Returns an empty string for words of one character or fewer.
pub fn init(word: &str) -> &str {
    let mut chars = word.char_indices();
    match chars.next_back() {
        Some((idx, _)) if idx > 0 => &word[..idx],
        _ => "",
    }
}

/// Apply [`init`] `n` times.
pub fn n_init(word: &str, n: usize) -> &str {
    let mut part = word;
    for _ in 0..n {
        part = init(part);
    }
    part
}

/// The last `n` characters of the word (the whole word if it is shorter).
pub fn last_n(word: &str, n: usize) -> &str {
    let count = word.chars().count();
    if n >= count {
        return word;
    }
    skip_chars(word, count - n)
}

/// Last character of `n_init(word, n)`.
pub fn last_of_n_init(word: &str, n: usize) -> Option<char> {
    last(n_init(word, n))
}

/// The word without its first `n` characters.
pub fn skip_chars(word: &str, n: usize) -> &str {
    match word.char_indices().nth(n) {
        Some((idx, _)) => &word[idx..],
        None => "",
    }
}

/// Number of characters (not bytes).
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

pub fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| word.ends_with(s))
}

/// Lowercase the whole word.
pub fn to_lower(word: &str) -> String {
    word.chars().map(simple_lower).collect()
}

/// Replace the first ё with е and the first Ё with Е.
pub fn un_yo(word: &str) -> String {
    word.replacen('ё', "е", 1).replacen('Ё', "Е", 1)
}

/// Replace the first е with ё and the first Е with Ё.
pub fn re_yo(word: &str) -> String {
    word.replacen('е', "ё", 1).replacen('Е', "Ё", 1)
}
