// Plural forms
//
// `pluralize` produces the nominative plural; `decline_plural` declines a
// known nominative plural through the oblique cases.

mod cases;
mod genitive;

pub use cases::decline_plural;

use padezh_core::character::{is_upper, is_vowel, simple_lower, syllable_count};
use padezh_core::letter_case::transfer;
use padezh_core::word::{
    char_len, ends_with_any, init, last, last_is, last_of_n_init, n_init, re_yo, to_lower, un_yo,
};
use padezh_core::{DeclensionClass, Forms, Gender, InflectionError, Lemma};

use crate::classifier::classify;
use crate::lexicon::{
    A_PLURAL_ENDINGS, A_PLURALS, ANIN_PLURALS, DUAL_A_PLURALS, DUAL_YA_PLURALS, ENOK_EXCLUDED,
    EXTENDED_STEMS, FLEETING_EY_WORDS, IRREGULAR_PLURALS, KO_EXCLUDED, NEUTER_YA_PLURAL_ENDINGS, SOFT_YA_PLURALS,
    STRESSED_OY_ENDINGS, STRESSED_OY_EXCLUDED, YO_SHIFT_PLURALS, contains, lookup,
};
use crate::patterns::{ok_stem, ok_word, soft_d1, ts_stem, ts_word};
use crate::stem::noun_stem;

/// Stem-final letters that take "-и" rather than "-ы".
const I_AFTER: &[char] = &['г', 'х', 'ч', 'ж', 'ш', 'щ', 'к'];

/// Velars and hushing consonants: adjectival plurals in "-ие".
const IE_AFTER: &[char] = &['г', 'к', 'х', 'ж', 'ш', 'ч', 'щ'];

/// Nominative plural form(s) of `lemma`.
///
/// Plurale tantum and indeclinable words return their citation text. At
/// most two forms are returned, preferred first.
pub fn pluralize(lemma: &Lemma) -> Result<Forms, InflectionError> {
    if lemma.is_plurale_tantum() || lemma.is_indeclinable() {
        return Ok(Forms::one(lemma.text()));
    }
    let class = classify(lemma)?;
    log::trace!("pluralizing {:?} (class {class})", lemma.text());

    let p = Pluralizer::new(lemma);
    if class == DeclensionClass::Indeclinable {
        return Ok(Forms::one(p.word));
    }

    if let Some(forms) = lookup(IRREGULAR_PLURALS, &p.lc) {
        let found: Vec<String> = forms.iter().map(|f| transfer(p.word, f)).collect();
        return collect(p.word, found);
    }

    let found = match class {
        DeclensionClass::Irregular => p.irregular()?,
        DeclensionClass::First => p.first(),
        DeclensionClass::Second => p.second(),
        DeclensionClass::Third => p.third(),
        DeclensionClass::Indeclinable => vec![p.word.to_string()],
    };
    collect(p.word, found)
}

/// The first two candidates, preferred first. The rule cascade never
/// proposes more; extra candidates are logged and dropped.
fn collect(word: &str, found: Vec<String>) -> Result<Forms, InflectionError> {
    if found.len() > 2 {
        log::warn!("dropping plural candidates {:?} for {word:?}", &found[2..]);
    }
    debug_assert!(found.len() <= 2, "too many plural candidates for {word:?}: {found:?}");
    let mut found = found.into_iter();
    match (found.next(), found.next()) {
        (Some(a), Some(b)) => Ok(Forms::two(a, b)),
        (Some(a), None) => Ok(Forms::one(a)),
        _ => Err(InflectionError::UnsupportedForm(format!(
            "no plural form for {word:?}"
        ))),
    }
}

struct Pluralizer<'a> {
    lemma: &'a Lemma,
    word: &'a str,
    lc: String,
    stem: String,
    lc_stem: String,
    /// Stem for "-ы/-и": the word minus its last letter when that letter
    /// is a vowel or "й" following another vowel ("армия" -> "арми").
    simple: String,
}

impl<'a> Pluralizer<'a> {
    fn new(lemma: &'a Lemma) -> Self {
        let word = lemma.text();
        let lc = to_lower(word);
        let stem = noun_stem(lemma);
        let lc_stem = to_lower(&stem);
        let ends_open = last(&lc) == Some('й') || last(word).is_some_and(is_vowel);
        let simple = if contains(FLEETING_EY_WORDS, &lc) {
            format!("{}ь", n_init(word, 2))
        } else if ends_open && last(init(word)).is_some_and(is_vowel) {
            init(word).to_string()
        } else {
            stem.clone()
        };
        Self {
            lemma,
            word,
            lc,
            stem,
            lc_stem,
            simple,
        }
    }

    /// Patronymics in "-евич/-евна" spelled with "ье" ("Васильевич") also
    /// have an "ие" spelling.
    fn soft_patronymic(&self) -> bool {
        ends_with_any(&self.lc, &["евич", "евна"]) && self.lc.contains("ье")
    }

    fn soft_patronymic_variant(&self) -> String {
        let mut chars: Vec<char> = self.simple.chars().collect();
        let at = chars
            .windows(2)
            .position(|w| simple_lower(w[0]) == 'ь' && simple_lower(w[1]) == 'е');
        if let Some(i) = at {
            chars[i] = if is_upper(chars[i]) { 'И' } else { 'и' };
        }
        chars.into_iter().collect()
    }

    /// The default "-ы"/"-и" plural.
    fn y_or_i(&self) -> Vec<String> {
        let ending = if last_is(&self.lc_stem, I_AFTER) || last_is(&self.lc, &['я', 'й', 'ь']) {
            "и"
        } else if ts_word(&self.lc) {
            return vec![format!("{}цы", ts_stem(self.word))];
        } else {
            "ы"
        };
        if self.soft_patronymic() {
            vec![
                format!("{}{ending}", self.soft_patronymic_variant()),
                format!("{}{ending}", self.simple),
            ]
        } else {
            vec![format!("{}{ending}", self.simple)]
        }
    }

    /// Stem with a soft sign, velars palatalized: "друг" -> "друзь".
    fn soft_stem(&self) -> String {
        match last(&self.lc_stem) {
            Some('ь') => self.stem.clone(),
            Some('к') => format!("{}чь", init(&self.stem)),
            Some('г') => format!("{}зь", init(&self.stem)),
            _ => format!("{}ь", self.stem),
        }
    }

    fn irregular(&self) -> Result<Vec<String>, InflectionError> {
        if self.lc == "путь" {
            Ok(vec![format!("{}и", init(self.word))])
        } else if self.lc.ends_with("дитя") {
            Ok(vec![format!("{}ети", n_init(self.word, 3))])
        } else {
            Err(InflectionError::UnsupportedForm(format!(
                "{:?} has no known irregular plural",
                self.word
            )))
        }
    }

    fn first(&self) -> Vec<String> {
        if contains(SOFT_YA_PLURALS, &self.lc) {
            return vec![format!("{}я", self.soft_stem())];
        }
        match self.lemma.gender() {
            Some(Gender::Masculine) => self.first_masculine(),
            Some(Gender::Neuter) => self.first_neuter(),
            _ => self.y_or_i(),
        }
    }

    fn first_masculine(&self) -> Vec<String> {
        let lc = self.lc.as_str();
        let word = self.word;

        if contains(DUAL_YA_PLURALS, lc) {
            let mut found = self.y_or_i();
            found.push(format!("{}я", self.soft_stem()));
            return found;
        }

        let dual_a = contains(DUAL_A_PLURALS, lc);
        if contains(A_PLURALS, lc) || ends_with_any(lc, A_PLURAL_ENDINGS) || dual_a {
            let ending = if soft_d1(lc) { "я" } else { "а" };
            let mut found = vec![format!("{}{ending}", un_yo(&self.stem))];
            if dual_a {
                found.extend(self.y_or_i());
            }
            return found;
        }

        let found = if ends_with_any(lc, &["анин", "янин"]) || contains(ANIN_PLURALS, lc) {
            format!("{}е", n_init(word, 2))
        } else if lc == "цыган" {
            format!("{word}е")
        } else if ends_with_any(lc, &["ёнок", "енок"]) && !ends_with_any(lc, ENOK_EXCLUDED) {
            format!("{}ята", n_init(word, 4))
        } else if lc.ends_with("ёночек") {
            format!("{}ятки", n_init(word, 6))
        } else if lc.ends_with("онок")
            && last_of_n_init(lc, 4).is_some_and(|c| ['ч', 'ж', 'ш'].contains(&c))
            && !lc.ends_with("бочонок")
        {
            format!("{}ата", n_init(word, 4))
        } else if ok_word(lc) {
            format!("{}ки", ok_stem(word))
        } else if lc.ends_with("ый")
            || ends_with_any(lc, &["щий", "чий", "ший", "жий", "жний", "шний"])
        {
            format!("{}е", init(word))
        } else if (lc.ends_with("вой") && syllable_count(n_init(word, 3)) >= 2)
            || (lc.ends_with("ной") && char_len(lc) >= 6)
        {
            format!("{}ые", n_init(word, 2))
        } else if ends_with_any(lc, STRESSED_OY_ENDINGS)
            && syllable_count(lc) >= 2
            && !contains(STRESSED_OY_EXCLUDED, lc)
        {
            format!("{}ие", n_init(word, 2))
        } else if lc.ends_with("его") {
            format!("{}ие", n_init(word, 3))
        } else {
            return self.y_or_i();
        };
        vec![found]
    }

    fn first_neuter(&self) -> Vec<String> {
        let lc = self.lc.as_str();
        let word = self.word;
        let stem = &self.stem;

        let found = if ends_with_any(lc, &["ко", "чо"]) && !ends_with_any(lc, KO_EXCLUDED) {
            format!("{}и", init(word))
        } else if lc.ends_with("имое") {
            format!("{stem}ые")
        } else if lc.ends_with("ее") {
            format!("{stem}ие")
        } else if lc.ends_with("ое") {
            let ending = if last_is(&self.lc_stem, &['г', 'к', 'ж', 'ш']) {
                "ие"
            } else {
                "ые"
            };
            format!("{stem}{ending}")
        } else if ends_with_any(lc, &["ие", "иё"]) {
            format!("{}ия", n_init(word, 2))
        } else if ends_with_any(lc, &["ье", "ьё"]) {
            let base = n_init(word, 2);
            let mut found = Vec::with_capacity(2);
            if last(lc) == Some('е') {
                found.push(format!("{base}ия"));
            }
            found.push(format!("{base}ья"));
            return found;
        } else if ends_with_any(lc, NEUTER_YA_PLURAL_ENDINGS) {
            format!("{stem}ья")
        } else if ends_with_any(lc, &["ле", "ре"]) {
            format!("{stem}я")
        } else if contains(YO_SHIFT_PLURALS, lc) {
            format!("{}а", re_yo(stem))
        } else {
            format!("{stem}а")
        };
        vec![found]
    }

    fn second(&self) -> Vec<String> {
        if self.lc.ends_with("ая") {
            let ending = if last_is(&self.lc_stem, IE_AFTER) {
                "ие"
            } else {
                "ые"
            };
            return vec![format!("{}{ending}", self.stem)];
        }
        self.y_or_i()
    }

    fn third(&self) -> Vec<String> {
        if self.lc.ends_with("мя") {
            return vec![format!("{}ена", self.stem)];
        }
        if let Some(extended) = lookup(EXTENDED_STEMS, &self.lc) {
            let extended = transfer(self.word, extended);
            return vec![format!("{}и", init(&extended))];
        }
        let ending = if self.lemma.gender() == Some(Gender::Feminine) {
            "и"
        } else if last(&self.simple) == Some('и') {
            "я"
        } else {
            "а"
        };
        vec![format!("{}{ending}", self.simple)]
    }
}
