// Capitalization detection and transfer
//
// Lexical replacements ("лоб" -> "лбу", "человек" -> "люди") are looked up
// in lowercase. The caller's capitalization is carried over onto the
// replacement afterwards.

use crate::character::{is_lower, is_upper, simple_lower, simple_upper};

/// Capitalization pattern of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capitalization {
    /// No letters found in the word.
    NoLetters,
    /// All letters are lowercase: "гора".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Москва".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "ЖэКа".
    Mixed,
    /// All letters are uppercase, at least two of them: "МГУ".
    AllUpper,
}

/// Detect the capitalization pattern of a word.
///
/// Non-letter characters (hyphens, digits) are ignored. A single uppercase
/// letter is reported as `FirstUpper`.
pub fn detect(word: &str) -> Capitalization {
    let mut letters = 0usize;
    let mut first_upper = false;
    let mut rest_lower = true;
    let mut all_upper = true;

    for c in word.chars() {
        if !is_upper(c) && !is_lower(c) {
            continue;
        }
        if letters == 0 {
            first_upper = is_upper(c);
        } else if is_upper(c) {
            rest_lower = false;
        }
        if is_lower(c) {
            all_upper = false;
        }
        letters += 1;
    }

    match letters {
        0 => Capitalization::NoLetters,
        1 if first_upper => Capitalization::FirstUpper,
        1 => Capitalization::AllLower,
        _ if all_upper => Capitalization::AllUpper,
        _ if !rest_lower => Capitalization::Mixed,
        _ if first_upper => Capitalization::FirstUpper,
        _ => Capitalization::AllLower,
    }
}

/// Apply a capitalization pattern to a word.
///
/// - `NoLetters` / `Mixed` -- no change.
/// - `AllLower` -- every letter is lowercased.
/// - `AllUpper` -- every letter is uppercased.
/// - `FirstUpper` -- first letter is uppercased, rest are lowercased.
pub fn apply(cap: Capitalization, word: &str) -> String {
    match cap {
        Capitalization::NoLetters | Capitalization::Mixed => word.to_string(),
        Capitalization::AllLower => word.chars().map(simple_lower).collect(),
        Capitalization::AllUpper => word.chars().map(simple_upper).collect(),
        Capitalization::FirstUpper => {
            let mut seen_letter = false;
            word.chars()
                .map(|c| {
                    if !is_upper(c) && !is_lower(c) {
                        c
                    } else if seen_letter {
                        simple_lower(c)
                    } else {
                        seen_letter = true;
                        simple_upper(c)
                    }
                })
                .collect()
        }
    }
}

/// Carry the capitalization of `source` over onto `target`.
pub fn transfer(source: &str, target: &str) -> String {
    apply(detect(source), target)
}

/// Carry the capitalization of `source` onto `target`, a form built by
/// changing the ending of `source`.
///
/// Unlike [`transfer`], mixed case is copied letter by letter from the
/// matching positions of `source` ("МакДональды" -> "МакДональдов");
/// letters past the end of `source` stay as they are in `target`.
pub fn transfer_inflected(source: &str, target: &str) -> String {
    match detect(source) {
        Capitalization::Mixed => {
            let mut pattern = source.chars();
            target
                .chars()
                .map(|c| match pattern.next() {
                    Some(s) if is_upper(s) => simple_upper(c),
                    Some(s) if is_lower(s) => simple_lower(c),
                    _ => c,
                })
                .collect()
        }
        cap => apply(cap, target),
    }
}
