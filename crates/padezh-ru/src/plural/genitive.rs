// Genitive plural
//
// The genitive plural is the least regular plural case: it depends on the
// declension class of the singular, on the plural ending, and on whether a
// fleeting vowel appears in the zero ending ("окошек", "земель").

use padezh_core::character::{CONSONANTS_EXCEPT_J, is_hushing, is_sonorant, is_velar, is_vowel};
use padezh_core::word::{ends_with_any, init, last, last_is, n_init, un_yo};
use padezh_core::{Case, DeclensionClass, Forms, Gender};

use crate::lexicon::{
    ANIN_PLURALS, IRREGULAR_GENITIVE_PLURALS, NEUTER_EY_GENITIVES, TS_STRESSED_ENDING, contains,
    lookup,
};
use crate::stress::StressPattern;

/// What the genitive rules read. All strings are lowercase.
pub(super) struct GenitiveInput<'a> {
    /// Lowercased citation form.
    pub lemma: &'a str,
    pub gender: Option<Gender>,
    /// `None` for plurale tantum words.
    pub class: Option<DeclensionClass>,
    /// Lowercased nominative plural.
    pub plural: &'a str,
    /// The plural without its final vowel.
    pub base: &'a str,
    pub stress: Option<&'a StressPattern>,
}

pub(super) fn genitive(input: &GenitiveInput<'_>) -> Forms {
    if let Some(form) = lookup(IRREGULAR_GENITIVE_PLURALS, input.plural) {
        return Forms::one(form);
    }
    let form = match input.class {
        None => plurale_tantum(input),
        Some(DeclensionClass::Indeclinable) => input.plural.to_string(),
        Some(DeclensionClass::Irregular) => format!("{}ей", input.base),
        Some(DeclensionClass::Third) if input.lemma.ends_with("мя") => input.base.to_string(),
        Some(DeclensionClass::Third) => format!("{}ей", input.base),
        Some(DeclensionClass::First) if input.gender == Some(Gender::Neuter) => first_neuter(input),
        Some(DeclensionClass::First) => return first_masculine(input),
        Some(DeclensionClass::Second) => second(input),
    };
    Forms::one(form)
}

fn plurale_tantum(input: &GenitiveInput<'_>) -> String {
    let base = input.base;
    match last(input.plural) {
        Some('и') if last(base).is_some_and(is_velar) => with_fleeting_vowel(base, false),
        Some('и') => format!("{base}ей"),
        Some('ы' | 'а') => with_fleeting_vowel(base, false),
        _ => base.to_string(),
    }
}

fn first_masculine(input: &GenitiveInput<'_>) -> Forms {
    let (lemma, plural, base) = (input.lemma, input.plural, input.base);

    let form = if ends_with_any(plural, &["ята", "ата"]) && lemma.ends_with("нок") {
        base.to_string()
    } else if plural.ends_with("ятки") {
        format!("{}ок", n_init(plural, 2))
    } else if ends_with_any(lemma, &["анин", "янин"]) || contains(ANIN_PLURALS, lemma) {
        init(plural).to_string()
    } else if plural.ends_with("ья") {
        format!("{base}ев")
    } else if last_is(lemma, &['ж', 'ш', 'ч', 'щ', 'ь']) {
        format!("{base}ей")
    } else if last(base).is_some_and(is_vowel) || last(lemma) == Some('й') {
        format!("{base}ев")
    } else if last(lemma) == Some('ц') {
        // "-ев" after a stressed stem ("немцев"), "-ов" after a stressed
        // ending ("отцов").
        let ev = format!("{base}ев");
        let ov = format!("{base}ов");
        return match input.stress {
            Some(s) => s.plural(Case::Genitive).choose(ev, ov),
            None if contains(TS_STRESSED_ENDING, lemma) => Forms::one(ov),
            None => Forms::one(ev),
        };
    } else {
        format!("{base}ов")
    };
    Forms::one(form)
}

fn first_neuter(input: &GenitiveInput<'_>) -> String {
    let (lemma, plural, base) = (input.lemma, input.plural, input.base);

    if plural.ends_with("ия") {
        format!("{}й", init(plural))
    } else if plural.ends_with("ья") {
        if contains(NEUTER_EY_GENITIVES, &un_yo(lemma)) {
            format!("{}ей", init(base))
        } else if ends_with_any(lemma, &["ье", "ьё"]) {
            format!("{}ий", init(base))
        } else {
            format!("{base}ев")
        }
    } else if plural.ends_with('я') {
        format!("{base}ей")
    } else {
        with_fleeting_vowel(base, true)
    }
}

fn second(input: &GenitiveInput<'_>) -> String {
    let (lemma, plural, base) = (input.lemma, input.plural, input.base);

    if lemma.ends_with("ия") {
        format!("{base}й")
    } else if plural.ends_with("ья") || lemma.ends_with("ья") {
        format!("{}ей", init(base))
    } else if lemma.ends_with('я') {
        if last(init(lemma)).is_some_and(is_vowel) {
            format!("{base}й")
        } else {
            soft_zero_ending(base)
        }
    } else {
        with_fleeting_vowel(base, false)
    }
}

/// Zero ending of a hard stem, with "о"/"е" inserted where Russian
/// breaks up the final cluster: "окошк" -> "окошек", "сутк" -> "суток",
/// "копейк" -> "копеек", "окн" -> "окон" (neuter only).
fn with_fleeting_vowel(base: &str, neuter: bool) -> String {
    let mut chars: Vec<char> = base.chars().collect();
    let n = chars.len();
    if n < 2 {
        return base.to_string();
    }
    let (prev, fin) = (chars[n - 2], chars[n - 1]);
    let prev_consonant = CONSONANTS_EXCEPT_J.contains(&prev);

    if fin == 'к' && prev_consonant && !(neuter && prev == 'с') {
        let vowel = if is_hushing(prev) || prev == 'ц' { 'е' } else { 'о' };
        chars.insert(n - 1, vowel);
    } else if matches!(prev, 'ь' | 'й') && CONSONANTS_EXCEPT_J.contains(&fin) {
        chars[n - 2] = 'е';
    } else if neuter && is_sonorant(fin) && prev_consonant && !is_sonorant(prev) && prev != fin {
        let vowel = if is_velar(prev) { 'о' } else { 'е' };
        chars.insert(n - 1, vowel);
    }
    chars.into_iter().collect()
}

/// Zero ending of a soft stem: "земл" -> "земель", "бур" -> "бурь",
/// "пашн" -> "пашен", "спальн" -> "спален".
fn soft_zero_ending(base: &str) -> String {
    let mut chars: Vec<char> = base.chars().collect();
    let n = chars.len();
    if n < 2 {
        return format!("{base}ь");
    }
    let (prev, fin) = (chars[n - 2], chars[n - 1]);

    if matches!(prev, 'ь' | 'й') && CONSONANTS_EXCEPT_J.contains(&fin) {
        chars[n - 2] = 'е';
    } else if CONSONANTS_EXCEPT_J.contains(&prev) && is_sonorant(fin) {
        chars.insert(n - 1, 'е');
    }
    if fin != 'н' {
        chars.push('ь');
    }
    chars.into_iter().collect()
}
