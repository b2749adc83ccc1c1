// Class 2: nouns in "-а"/"-я" of any gender ("гора", "земля", "дядя")
//
// Also covers feminine adjectival nouns in "-ая" ("чистая", "рабочая") and
// feminine surnames in "-ова/-ева/-ина".

use padezh_core::character::{is_hushing, is_vowel};
use padezh_core::word::{char_len, ends_with_any, init, last, last_is, last_n, to_lower};
use padezh_core::{Case, Forms, InflectionError, Lemma};

use crate::lexicon::STRESSED_AYA_WORDS;
use crate::stem::noun_stem;
use crate::stress::{Stress, StressPattern};

/// Consonants after which the genitive ending is "-и".
const GENITIVE_I_AFTER: &[char] = &['ч', 'ж', 'ш', 'щ', 'г', 'к', 'х'];

/// Consonants after which the instrumental may be "-ей" instead of "-ой".
const INSTRUMENTAL_EY_AFTER: &[char] = &['ц', 'ч', 'ж', 'ш', 'щ'];

struct Word<'a> {
    lemma: &'a Lemma,
    word: &'a str,
    lc: String,
    stem: String,
    head: &'a str,
}

impl Word<'_> {
    fn soft(&self) -> bool {
        last(&self.lc) == Some('я')
    }

    /// Feminine surname in "-ова/-ева/-ина" ("-стина" is a common noun).
    fn surname(&self) -> bool {
        self.lemma.is_surname()
            && (ends_with_any(&self.lc, &["ова", "ева"])
                || (self.lc.ends_with("ина") && !self.lc.ends_with("стина")))
    }

    /// Adjectival "-ая" noun with a consonant stem.
    fn adjectival(&self) -> bool {
        self.lc.ends_with("ая")
            && char_len(self.word) >= 3
            && !last(&self.stem).is_some_and(is_vowel)
    }

    /// Oblique-case ending of an adjectival noun: "-ей" after a hushing
    /// consonant with unstressed ending ("рабочей"), "-ой" otherwise.
    fn adjectival_oblique(&self) -> String {
        let soft = last(&self.stem).is_some_and(is_hushing)
            && !STRESSED_AYA_WORDS.contains(&self.lc.as_str());
        format!("{}{}", self.stem, if soft { "ей" } else { "ой" })
    }

    fn ia(&self) -> bool {
        last_n(&self.lc, 2) == "ия"
    }

    fn with(&self, ending: &str) -> String {
        format!("{}{ending}", self.head)
    }
}

pub(crate) fn decline(
    lemma: &Lemma,
    case: Case,
    stress: Option<&StressPattern>,
) -> Result<Forms, InflectionError> {
    let word = lemma.text();
    let stem = noun_stem(lemma);
    let w = Word {
        lemma,
        word,
        lc: to_lower(word),
        stem,
        head: init(word),
    };
    let lc_stem = to_lower(&w.stem);

    let forms = match case {
        Case::Nominative => Forms::one(word),
        Case::Genitive => {
            if w.adjectival() {
                Forms::one(w.adjectival_oblique())
            } else if w.surname() {
                Forms::one(w.with("ой"))
            } else if w.soft() || last_is(&lc_stem, GENITIVE_I_AFTER) {
                Forms::one(w.with("и"))
            } else {
                Forms::one(w.with("ы"))
            }
        }
        Case::Dative | Case::Prepositional | Case::Locative => {
            if w.adjectival() {
                Forms::one(w.adjectival_oblique())
            } else if w.surname() {
                Forms::one(w.with("ой"))
            } else if w.ia() {
                Forms::one(w.with("и"))
            } else {
                Forms::one(w.with("е"))
            }
        }
        Case::Accusative => {
            if w.adjectival() {
                Forms::one(format!("{}ую", w.stem))
            } else if w.soft() {
                Forms::one(w.with("ю"))
            } else {
                Forms::one(w.with("у"))
            }
        }
        Case::Instrumental => {
            if w.adjectival() {
                Forms::one(w.adjectival_oblique())
            } else if w.soft() {
                if last_is(w.head, &['и']) {
                    Forms::one(w.with("ей"))
                } else {
                    Forms::two(w.with("ей"), w.with("ею"))
                }
            } else if last_is(&lc_stem, INSTRUMENTAL_EY_AFTER) {
                match stress.map(|s| s.singular(Case::Instrumental)) {
                    Some(s) => hushing_instrumental(&w, s),
                    None => Forms::two(w.with("ей"), w.with("ею")),
                }
            } else {
                Forms::two(w.with("ой"), w.with("ою"))
            }
        }
    };
    Ok(forms)
}

/// Instrumental after "ц"/hushing consonants: "-ей/-ею" under stem stress
/// ("птицей"), "-ой/-ою" under ending stress ("свечой"). When both stresses
/// are in use the competing spellings are returned without doublets.
fn hushing_instrumental(w: &Word<'_>, stress: Stress) -> Forms {
    match stress {
        Stress::Stem => Forms::two(w.with("ей"), w.with("ею")),
        Stress::Ending => Forms::two(w.with("ой"), w.with("ою")),
        _ => stress.choose(w.with("ей"), w.with("ой")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padezh_core::Gender;

    fn paradigm(lemma: &Lemma) -> Vec<Vec<String>> {
        Case::ALL
            .iter()
            .map(|&c| decline(lemma, c, None).unwrap().to_vec())
            .collect()
    }

    fn firsts(text: &str, gender: Gender) -> Vec<String> {
        let lemma = Lemma::new(text, gender).unwrap();
        paradigm(&lemma).into_iter().map(|f| f[0].clone()).collect()
    }

    #[test]
    fn mountain() {
        let lemma = Lemma::new("гора", Gender::Feminine).unwrap();
        let p = paradigm(&lemma);
        assert_eq!(p[0], vec!["гора"]);
        assert_eq!(p[1], vec!["горы"]);
        assert_eq!(p[2], vec!["горе"]);
        assert_eq!(p[3], vec!["гору"]);
        assert_eq!(p[4], vec!["горой", "горою"]);
        assert_eq!(p[5], vec!["горе"]);
        assert_eq!(p[6], vec!["горе"]);
    }

    #[test]
    fn velar_and_hushing_stems() {
        assert_eq!(
            firsts("рука", Gender::Feminine),
            vec!["рука", "руки", "руке", "руку", "рукой", "руке", "руке"]
        );
        assert_eq!(
            firsts("чаша", Gender::Feminine),
            vec!["чаша", "чаши", "чаше", "чашу", "чашей", "чаше", "чаше"]
        );
        assert_eq!(
            firsts("птица", Gender::Feminine),
            vec!["птица", "птицы", "птице", "птицу", "птицей", "птице", "птице"]
        );
    }

    #[test]
    fn soft_stems() {
        assert_eq!(
            firsts("земля", Gender::Feminine),
            vec!["земля", "земли", "земле", "землю", "землей", "земле", "земле"]
        );
        assert_eq!(
            firsts("армия", Gender::Feminine),
            vec!["армия", "армии", "армии", "армию", "армией", "армии", "армии"]
        );
        assert_eq!(
            firsts("соя", Gender::Feminine),
            vec!["соя", "сои", "сое", "сою", "соей", "сое", "сое"]
        );
        assert_eq!(
            firsts("дядя", Gender::Masculine),
            vec!["дядя", "дяди", "дяде", "дядю", "дядей", "дяде", "дяде"]
        );
    }

    #[test]
    fn i_before_ya_suppresses_second_instrumental() {
        let army = Lemma::new("армия", Gender::Feminine).unwrap();
        assert_eq!(decline(&army, Case::Instrumental, None).unwrap().len(), 1);
        let earth = Lemma::new("земля", Gender::Feminine).unwrap();
        assert_eq!(
            decline(&earth, Case::Instrumental, None).unwrap().to_vec(),
            vec!["землей", "землею"]
        );
    }

    #[test]
    fn adjectival_nouns() {
        assert_eq!(
            firsts("чистая", Gender::Feminine),
            vec!["чистая", "чистой", "чистой", "чистую", "чистой", "чистой", "чистой"]
        );
        assert_eq!(
            firsts("адаптировавшая", Gender::Feminine),
            vec![
                "адаптировавшая",
                "адаптировавшей",
                "адаптировавшей",
                "адаптировавшую",
                "адаптировавшей",
                "адаптировавшей",
                "адаптировавшей"
            ]
        );
        assert_eq!(firsts("большая", Gender::Feminine)[1], "большой");
    }

    #[test]
    fn surnames() {
        let ivanova = Lemma::builder("Иванова")
            .gender(Gender::Feminine)
            .surname(true)
            .build()
            .unwrap();
        let p = paradigm(&ivanova);
        assert_eq!(p[1], vec!["Ивановой"]);
        assert_eq!(p[2], vec!["Ивановой"]);
        assert_eq!(p[3], vec!["Иванову"]);
        assert_eq!(p[5], vec!["Ивановой"]);

        // A surname that does not look like one declines as a noun.
        let kocherga = Lemma::builder("Кочерга")
            .gender(Gender::Feminine)
            .surname(true)
            .build()
            .unwrap();
        assert_eq!(paradigm(&kocherga)[1], vec!["Кочерги"]);

        // "-стина" is a common noun even when flagged as a surname.
        let lemma = Lemma::builder("Истина")
            .gender(Gender::Feminine)
            .surname(true)
            .build()
            .unwrap();
        assert_eq!(paradigm(&lemma)[1], vec!["Истины"]);
    }

    #[test]
    fn stress_selects_hushing_instrumental() {
        let urine = Lemma::new("моча", Gender::Feminine).unwrap();
        let ending: StressPattern = "SEESESE-EEEEEE".parse().unwrap();
        assert_eq!(
            decline(&urine, Case::Instrumental, Some(&ending)).unwrap().to_vec(),
            vec!["мочой", "мочою"]
        );
        let both: StressPattern = "SEESbSE-EEEEEE".parse().unwrap();
        assert_eq!(
            decline(&urine, Case::Instrumental, Some(&both)).unwrap().to_vec(),
            vec!["мочей", "мочой"]
        );
        assert_eq!(
            decline(&urine, Case::Instrumental, None).unwrap().to_vec(),
            vec!["мочей", "мочею"]
        );
    }
}
