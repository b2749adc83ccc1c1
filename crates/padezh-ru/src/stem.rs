// Stem deriver
//
// The stem is the citation form with its inflectional ending removed and,
// where needed, a fleeting vowel dropped or an "й"/"ь" inserted. Rules are
// tried top to bottom; the first rule whose predicate holds derives the
// stem. Lexical rules come first, the general vowel-stripping rule last.

use padezh_core::character::{CONSONANTS_EXCEPT_J, is_vowel, syllable_count};
use padezh_core::word::{ends_with_any, init, last, last_is, last_of_n_init, n_init, to_lower};
use padezh_core::{Gender, Lemma};

use crate::lexicon::{EN_KEEPS_VOWEL, FLEETING_STEM_WORDS};

/// Input to a stem rule: the original word, its lowercase form and gender.
pub struct StemInput<'a> {
    pub word: &'a str,
    pub lc: String,
    pub gender: Option<Gender>,
}

impl<'a> StemInput<'a> {
    pub fn new(word: &'a str, gender: Option<Gender>) -> Self {
        Self {
            word,
            lc: to_lower(word),
            gender,
        }
    }
}

/// One entry of the stem cascade.
pub struct StemRule {
    pub name: &'static str,
    pub applies: fn(&StemInput<'_>) -> bool,
    pub derive: fn(&StemInput<'_>) -> String,
}

/// The stem cascade, in precedence order.
pub const STEM_RULES: &[StemRule] = &[
    StemRule {
        name: "lexical-fleeting-vowel",
        applies: |i| FLEETING_STEM_WORDS.contains(&i.lc.as_str()),
        derive: |i| {
            let last_char = last(i.word).map(String::from).unwrap_or_default();
            format!("{}{}", n_init(i.word, 2), last_char)
        },
    },
    StemRule {
        name: "rek-diminutive",
        applies: |i| i.lc.ends_with("рёк") && syllable_count(i.word) >= 2,
        derive: |i| format!("{}ьк", n_init(i.word, 2)),
    },
    StemRule {
        name: "yok-diminutive",
        applies: |i| i.lc.ends_with("ёк") && last_of_n_init(i.word, 2).is_some_and(is_vowel),
        derive: |i| format!("{}йк", n_init(i.word, 2)),
    },
    StemRule {
        name: "hard-consonant",
        applies: |i| last_is(&i.lc, CONSONANTS_EXCEPT_J),
        derive: |i| i.word.to_string(),
    },
    StemRule {
        name: "masculine-en",
        applies: |i| {
            i.lc.ends_with("ень")
                && i.gender == Some(Gender::Masculine)
                && !ends_with_any(&i.lc, EN_KEEPS_VOWEL)
        },
        derive: |i| format!("{}н", n_init(i.word, 3)),
    },
    StemRule {
        name: "soft-sign",
        applies: |i| last(&i.lc) == Some('ь'),
        derive: |i| init(i.word).to_string(),
    },
    StemRule {
        name: "soft-sign-penultimate",
        applies: |i| last(init(&i.lc)) == Some('ь'),
        derive: |i| init(i.word).to_string(),
    },
    StemRule {
        name: "o-after-closed-set",
        applies: |i| {
            last(&i.lc) == Some('о')
                && last(init(&i.lc)).is_some_and(|c| ['л', 'м', 'н', 'т', 'х', 'в', 'с'].contains(&c))
        },
        derive: |i| init(i.word).to_string(),
    },
    StemRule {
        name: "general",
        applies: |_| true,
        derive: |i| general_stem(i.word),
    },
];

/// Strip a final vowel, or a vowel/й that follows another vowel together
/// with that vowel.
pub fn general_stem(word: &str) -> String {
    let c = last(word);
    let after_vowel = last(init(word)).is_some_and(is_vowel);
    if c.is_some_and(|c| c == 'й' || c == 'Й' || is_vowel(c)) && after_vowel {
        return n_init(word, 2).to_string();
    }
    if c.is_some_and(is_vowel) {
        return init(word).to_string();
    }
    word.to_string()
}

/// Derive the stem of a word with the given gender.
pub fn stem_of(word: &str, gender: Option<Gender>) -> String {
    let input = StemInput::new(word, gender);
    for rule in STEM_RULES {
        if (rule.applies)(&input) {
            log::trace!("stem rule {} fired for {word:?}", rule.name);
            return (rule.derive)(&input);
        }
    }
    word.to_string()
}

/// Derive the stem of a lemma.
pub fn noun_stem(lemma: &Lemma) -> String {
    stem_of(lemma.text(), lemma.gender())
}

/// Name of the first rule that fires for the word.
pub fn matching_rule(word: &str, gender: Option<Gender>) -> Option<&'static str> {
    let input = StemInput::new(word, gender);
    STEM_RULES.iter().find(|r| (r.applies)(&input)).map(|r| r.name)
}
