// Word-shape predicates shared by the case generators and the pluralizer
//
// Predicates take the lowercased word unless noted. Builders that return
// text take the original word so capitalization survives.

use padezh_core::character::{
    CONSONANTS_EXCEPT_J, is_basic_cyrillic, is_vowel, simple_lower, syllable_count,
};
use padezh_core::word::{
    char_len, ends_with_any, init, last, last_is, last_n, last_of_n_init, n_init, skip_chars, to_lower,
};

use crate::lexicon::{OK_EXCLUDED_TOK, OK_WORDS_TOK, TS_KEEPS_VOWEL, contains};

/// Nouns in "-ок"/"-чек"/"-шек" whose vowel drops before the "-к-"
/// ("замок" -> "замка", "кусочек" -> "кусочка").
pub fn ok_word(lc: &str) -> bool {
    if ends_with_any(lc, &["чек", "шек"]) && char_len(lc) >= 6 {
        return true;
    }
    if ends_with_any(lc, OK_WORDS_TOK) {
        return true;
    }
    lc.ends_with("ок")
        && !lc.ends_with("шок")
        && lc != "урок"
        && !ends_with_any(lc, OK_EXCLUDED_TOK)
        && !last_of_n_init(lc, 2).is_some_and(is_vowel)
        && (last_of_n_init(lc, 3).is_some_and(is_vowel) || ends_with_any(n_init(lc, 2), &["ст", "рт"]))
        && char_len(lc) >= 4
}

/// The word without the "-ок" of an [`ok_word`], ready for "-к-" + ending.
pub fn ok_stem(word: &str) -> &str {
    n_init(word, 2)
}

pub fn ts_word(lc: &str) -> bool {
    last(lc) == Some('ц')
}

/// Stem of a "-ц" noun, without the final "ц".
///
/// Alternating "-ец" stems lose their vowel ("отец" -> "от-ца", "боец" ->
/// "бой-ца", "палец" -> "паль-ца"); others keep it ("-ец" after "а", and
/// the listed words such as "кузнец" and "месяц").
pub fn ts_stem(word: &str) -> String {
    let lc = to_lower(word);
    let head = init(word);
    let lc_head = init(&lc);

    if last(lc_head) == Some('а') || contains(TS_KEEPS_VOWEL, &lc) {
        return head.to_string();
    }
    if last_n(lc_head, 2) == "ле" {
        let before_le = last_of_n_init(lc_head, 2);
        return if before_le.is_some_and(|c| is_vowel(c) || c == 'л') {
            format!("{}ь", init(head))
        } else {
            head.to_string()
        };
    }
    let penultimate = last(lc_head);
    if penultimate.is_some_and(is_vowel) && penultimate != Some('и') {
        let base = n_init(word, 2);
        return if last_of_n_init(word, 2).is_some_and(is_vowel) {
            format!("{base}й")
        } else {
            base.to_string()
        };
    }
    head.to_string()
}

/// Soft-stem class 1 words: final "ь", or "е"/"ё" except after "ц".
pub fn soft_d1(lc: &str) -> bool {
    match last(lc) {
        Some('ь') => true,
        Some('е' | 'ё') => !lc.ends_with("це"),
        _ => false,
    }
}

/// "Half-X" compounds: "полдня", "полминуты", "полдень".
///
/// The word starts with "пол", ends in и/ы/а/я/ь, has at least two
/// syllables, and the first letter after "пол" (skipping hyphens) is a
/// consonant or "й".
pub fn half_compound(lc: &str) -> bool {
    if !lc.starts_with("пол") || !last_is(lc, &['и', 'ы', 'а', 'я', 'ь']) {
        return false;
    }
    if syllable_count(lc) < 2 {
        return false;
    }
    skip_chars(lc, 3)
        .chars()
        .find(|&c| is_basic_cyrillic(c))
        .map(simple_lower)
        .is_some_and(|c| c == 'й' || CONSONANTS_EXCEPT_J.contains(&c))
}

/// Replace the leading "пол" of a half compound with "полу".
pub fn half_to_full(word: &str) -> String {
    format!("полу{}", skip_chars(word, 3))
}
