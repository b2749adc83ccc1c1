// Class 1: masculine zero-ending and neuter "-о"/"-е" nouns
//
// The densest generator. Checks run in a fixed priority order per case:
// adjectival endings first, then "-ий"/"-й" nouns, soft stems, "-ц"
// stems, "-ок" diminutives and finally the plain hard stem.

use padezh_core::character::syllable_count;
use padezh_core::letter_case::transfer;
use padezh_core::word::{ends_with_any, init, last, last_is, last_n, n_init, to_lower};
use padezh_core::{Case, Forms, Gender, InflectionError, Lemma};

use super::{irregular, second, third};
use crate::lexicon::{
    FLEETING_EY_WORDS, HARD_ADJECTIVE_ENDINGS, HUSHING_IY_ENDINGS, SPECIAL_LOCATIVES,
    STRESSED_OY_ENDINGS, STRESSED_OY_EXCLUDED, TS_STRESSED_ENDING, U_LOCATIVE_WORDS, contains,
    lookup,
};
use crate::patterns::{half_compound, half_to_full, ok_stem, ok_word, soft_d1, ts_stem, ts_word};
use crate::stem::noun_stem;
use crate::stress::StressPattern;

/// Stem-final consonants after which the adjectival instrumental is "-им".
const SOFT_INSTRUMENTAL_AFTER: &[char] = &['г', 'к', 'х', 'ж', 'ш', 'ч', 'щ'];

/// Adjective-like nouns, by which set of endings they take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Adjectival {
    /// "-ого/-ому/-ом": "целое", "лихой", "Толстой".
    Hard,
    /// "-его/-ему/-ем": "адаптировавшее", "лесничий".
    Soft,
}

/// Everything the case rules need to know about the word, computed once.
struct Shape<'a> {
    lemma: &'a Lemma,
    word: &'a str,
    lc: String,
    stem: String,
    lc_stem: String,
    head: String,
    soft: bool,
    adjectival: Option<Adjectival>,
}

impl<'a> Shape<'a> {
    fn new(lemma: &'a Lemma) -> Self {
        let word = lemma.text();
        let lc = to_lower(word);
        let half = half_compound(&lc);

        let mut stem = noun_stem(lemma);
        let lc_stem = to_lower(&stem);
        let mut head = init(word).to_string();
        if contains(FLEETING_EY_WORDS, &lc) {
            // "чирей" -> "чирь-я"
            head = format!("{}ь", n_init(word, 2));
        }
        if half {
            stem = half_to_full(&stem);
            head = half_to_full(&head);
        }
        let soft = (half && lc.ends_with('я')) || soft_d1(&lc);

        let mut shape = Self {
            lemma,
            word,
            lc,
            stem,
            lc_stem,
            head,
            soft,
            adjectival: None,
        };
        shape.adjectival = shape.adjectival_kind();
        shape
    }

    fn adjectival_kind(&self) -> Option<Adjectival> {
        let lc = self.lc.as_str();
        let syllables = syllable_count(lc);

        let iyoy = last_n(lc, 2) == "ый" || (lc.ends_with("ной") && syllables >= 2);
        let velar_oy = ends_with_any(lc, STRESSED_OY_ENDINGS)
            && syllables >= 2
            && !contains(STRESSED_OY_EXCLUDED, lc);
        let hushing_iy = ends_with_any(lc, HUSHING_IY_ENDINGS) && syllables >= 2;

        if iyoy || ends_with_any(lc, HARD_ADJECTIVE_ENDINGS) || velar_oy {
            Some(Adjectival::Hard)
        } else if lc.ends_with("ее") || hushing_iy {
            Some(Adjectival::Soft)
        } else if self.iy_word() && self.lemma.is_surname() {
            Some(Adjectival::Hard)
        } else {
            None
        }
    }

    /// "-й" nouns and "-ий/-ие/-иё": "музей", "пролетарий", "строение".
    fn iy_word(&self) -> bool {
        last(&self.lc) == Some('й') || matches!(last_n(&self.lc, 2), "ий" | "ие" | "иё")
    }

    fn sch_word(&self) -> bool {
        last_is(&self.lc_stem, &['ч', 'щ'])
    }

    /// Surnames in "-ин/-ов/-ев" ("Пушкин", "Иванов").
    fn surname_type1(&self) -> bool {
        self.lemma.is_surname() && ends_with_any(&self.lc, &["ин", "ов", "ев"])
    }

    fn ts(&self) -> bool {
        ts_word(&self.lc)
    }

    fn ok(&self) -> bool {
        ok_word(&self.lc)
    }

    fn stem_plus(&self, ending: &str) -> String {
        format!("{}{ending}", self.stem)
    }

    fn head_plus(&self, ending: &str) -> String {
        format!("{}{ending}", self.head)
    }

    fn ts_plus(&self, ending: &str) -> String {
        format!("{}{ending}", ts_stem(self.word))
    }

    fn ok_plus(&self, ending: &str) -> String {
        format!("{}{ending}", ok_stem(self.word))
    }

    /// Genitive and dative share one rule chain. `endings` is
    /// (hard adjectival, soft adjectival, noun).
    fn genitive_or_dative(&self, endings: (&str, &str, &str)) -> String {
        let (hard, soft, noun) = endings;
        // Noun endings "-а"/"-у" soften to "-я"/"-ю".
        let soft_noun = match noun {
            "а" => "я",
            _ => "ю",
        };
        match self.adjectival {
            Some(Adjectival::Hard) => return self.stem_plus(hard),
            Some(Adjectival::Soft) => return self.stem_plus(soft),
            None => {}
        }
        if self.iy_word() {
            self.head_plus(soft_noun)
        } else if self.soft && !self.sch_word() {
            self.stem_plus(soft_noun)
        } else if self.ts() {
            self.ts_plus(&format!("ц{noun}"))
        } else if self.ok() {
            self.ok_plus(&format!("к{noun}"))
        } else {
            self.stem_plus(noun)
        }
    }

    fn instrumental(&self, stress: Option<&StressPattern>) -> Forms {
        let stress = stress.map(|s| s.singular(Case::Instrumental));

        if self.adjectival.is_some() {
            let soft = ends_with_any(&self.lc, &["ий", "ее"])
                || last_is(&self.lc_stem, SOFT_INSTRUMENTAL_AFTER);
            return Forms::one(self.stem_plus(if soft { "им" } else { "ым" }));
        }
        if self.iy_word() {
            return Forms::one(self.head_plus("ем"));
        }
        if self.soft {
            return Forms::one(self.stem_plus("ем"));
        }
        if last_is(&self.lc_stem, &['ж', 'ч', 'ш', 'щ']) {
            return match stress {
                Some(s) => s.choose(self.stem_plus("ем"), self.stem_plus("ом")),
                None if last_is(&self.lc_stem, &['щ']) => Forms::one(self.stem_plus("ом")),
                None => Forms::one(self.stem_plus("ем")),
            };
        }
        if self.ts() {
            return match stress {
                Some(s) => s.choose(self.ts_plus("цем"), self.ts_plus("цом")),
                None if contains(TS_STRESSED_ENDING, &self.lc) => Forms::one(self.ts_plus("цом")),
                None => Forms::one(self.ts_plus("цем")),
            };
        }
        if self.lc.ends_with("це") {
            return Forms::one(format!("{}м", self.word));
        }
        if self.ok() {
            return Forms::one(self.ok_plus("ком"));
        }
        if self.surname_type1() {
            return Forms::one(format!("{}ым", self.word));
        }
        Forms::one(self.stem_plus("ом"))
    }

    fn prepositional(&self) -> String {
        match self.adjectival {
            Some(Adjectival::Hard) => return self.stem_plus("ом"),
            Some(Adjectival::Soft) => return self.stem_plus("ем"),
            None => {}
        }
        if matches!(last_n(&self.lc, 2), "ий" | "ие") {
            self.head_plus("и")
        } else if last(&self.lc) == Some('й') || last_n(&self.lc, 2) == "иё" {
            self.head_plus("е")
        } else if self.ts() {
            self.ts_plus("це")
        } else if self.ok() {
            self.ok_plus("ке")
        } else {
            self.stem_plus("е")
        }
    }

    fn locative(&self) -> String {
        if let Some(form) = lookup(SPECIAL_LOCATIVES, &self.lc) {
            return transfer(self.word, form);
        }
        if contains(U_LOCATIVE_WORDS, &self.lc) {
            return if last(&self.lc) == Some('й') {
                format!("{}ю", init(self.word))
            } else {
                format!("{}у", self.word)
            };
        }
        self.prepositional()
    }
}

pub(crate) fn decline(
    lemma: &Lemma,
    case: Case,
    stress: Option<&StressPattern>,
) -> Result<Forms, InflectionError> {
    let lc = to_lower(lemma.text());
    if half_compound(&lc) && last_is(&lc, &['и', 'ы']) {
        return decline_half(lemma, &lc, case);
    }

    let shape = Shape::new(lemma);
    let forms = match case {
        Case::Nominative => Forms::one(shape.word),
        Case::Genitive => Forms::one(shape.genitive_or_dative(("ого", "его", "а"))),
        Case::Dative => Forms::one(shape.genitive_or_dative(("ому", "ему", "у"))),
        Case::Accusative => {
            if lemma.gender() != Some(Gender::Neuter) && lemma.is_animate() {
                Forms::one(shape.genitive_or_dative(("ого", "его", "а")))
            } else {
                Forms::one(shape.word)
            }
        }
        Case::Instrumental => shape.instrumental(stress),
        Case::Prepositional => Forms::one(shape.prepositional()),
        Case::Locative => Forms::one(shape.locative()),
    };
    Ok(forms)
}

/// "Half-X" compounds in "-и"/"-ы" ("полминуты", "полчашки", "полпути")
/// decline through the full word they abbreviate, as a feminine noun.
fn decline_half(lemma: &Lemma, lc: &str, case: Case) -> Result<Forms, InflectionError> {
    let word = lemma.text();
    if matches!(case, Case::Nominative | Case::Accusative) {
        return Ok(Forms::one(word));
    }

    let full = if lc == "полминуты" {
        word.to_string()
    } else {
        half_to_full(word)
    };
    let full_lc = to_lower(&full);
    let base = init(&full);

    if lc == "полпути" {
        if matches!(case, Case::Prepositional | Case::Locative) {
            return Ok(Forms::one(word));
        }
        let full_lemma = lemma.with_text(format!("{base}ь")).with_gender(Gender::Feminine);
        return irregular::decline(&full_lemma, case);
    }

    if full_lc.ends_with("зни") {
        let full_lemma = lemma.with_text(format!("{base}ь")).with_gender(Gender::Feminine);
        return Ok(third::decline(&full_lemma, case));
    }

    // "-ы" always comes from "-а"; "-и" comes from "-а" after velars and
    // hushing consonants and from "-я" elsewhere.
    let ending = if full_lc.ends_with('ы') || last_is(base, SOFT_INSTRUMENTAL_AFTER) {
        "а"
    } else {
        "я"
    };
    let full_lemma = lemma
        .with_text(format!("{base}{ending}"))
        .with_gender(Gender::Feminine);
    second::decline(&full_lemma, case, None)
}
