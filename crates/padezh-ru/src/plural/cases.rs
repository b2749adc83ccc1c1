// Plural case forms
//
// Declines a known nominative plural. The plural is supplied by the caller
// (usually from `pluralize`), so words with several plurals ("года" and
// "годы") decline whichever one was chosen.

use padezh_core::character::is_vowel;
use padezh_core::letter_case::transfer_inflected;
use padezh_core::word::{ends_with_any, init, last, last_is, to_lower};
use padezh_core::{Case, DeclensionClass, Forms, InflectionError, Lemma};

use super::genitive::{GenitiveInput, genitive};
use crate::classifier::classify;
use crate::lexicon::{IRREGULAR_INSTRUMENTAL_PLURALS, lookup};
use crate::stress::StressPattern;

/// Letters after which a final "-и" does not make the plural soft.
const HARD_BEFORE_I: &[char] = &['г', 'к', 'х', 'ж', 'ш', 'щ', 'ч', 'ц'];

/// Plural form(s) of `lemma` in `case`, given its nominative plural.
pub fn decline_plural(
    lemma: &Lemma,
    case: Case,
    plural: &str,
    stress: Option<&StressPattern>,
) -> Result<Forms, InflectionError> {
    let plural = plural.trim();
    if plural.is_empty() {
        return Err(InflectionError::InvalidLemma(format!(
            "{:?}: empty plural form",
            lemma.text()
        )));
    }
    if lemma.is_indeclinable() {
        return Ok(Forms::one(plural));
    }
    let class = if lemma.is_plurale_tantum() {
        None
    } else {
        Some(classify(lemma)?)
    };
    if class == Some(DeclensionClass::Indeclinable) {
        return Ok(Forms::one(plural));
    }

    let case = match case {
        Case::Nominative => return Ok(Forms::one(plural)),
        Case::Accusative if lemma.is_animate() => Case::Genitive,
        Case::Accusative => return Ok(Forms::one(plural)),
        Case::Locative => Case::Prepositional,
        other => other,
    };

    let lc = to_lower(plural);
    let lemma_lc = to_lower(lemma.text());
    let forms = Plural {
        lemma,
        lemma_lc: &lemma_lc,
        class,
        lc: &lc,
    }
    .oblique(case, stress);
    log::trace!("plural {case:?} of {plural:?}: {forms}");
    Ok(forms.map(|f| transfer_inflected(plural, f)))
}

struct Plural<'a> {
    lemma: &'a Lemma,
    lemma_lc: &'a str,
    class: Option<DeclensionClass>,
    lc: &'a str,
}

impl Plural<'_> {
    fn oblique(&self, case: Case, stress: Option<&StressPattern>) -> Forms {
        let lc = self.lc;

        if ends_with_any(lc, &["ые", "ие"]) {
            return Forms::one(adjectival(init(lc), "", case));
        }
        if self.lemma.is_surname() && ends_with_any(lc, &["овы", "евы", "ёвы", "ины"]) {
            return Forms::one(adjectival(init(lc), "ы", case));
        }

        let base = if last(lc).is_some_and(is_vowel) {
            init(lc)
        } else {
            lc
        };
        let soft = last(lc) == Some('я') || (last(lc) == Some('и') && !last_is(base, HARD_BEFORE_I));

        match case {
            Case::Genitive => genitive(&GenitiveInput {
                lemma: self.lemma_lc,
                gender: self.lemma.gender(),
                class: self.class,
                plural: lc,
                base,
                stress,
            }),
            Case::Dative => Forms::one(format!("{base}{}", if soft { "ям" } else { "ам" })),
            Case::Instrumental => match lookup(IRREGULAR_INSTRUMENTAL_PLURALS, lc) {
                Some(&[first, second]) => Forms::two(first, second),
                Some(&[first, ..]) => Forms::one(first),
                _ => Forms::one(format!("{base}{}", if soft { "ями" } else { "ами" })),
            },
            _ => Forms::one(format!("{base}{}", if soft { "ях" } else { "ах" })),
        }
    }
}

/// Adjective-style plural endings on `stem` + `vowel`: "лихи" -> "лихих",
/// "иванов" + "ы" -> "ивановых".
fn adjectival(stem: &str, vowel: &str, case: Case) -> String {
    let ending = match case {
        Case::Dative => "м",
        Case::Instrumental => "ми",
        _ => "х",
    };
    format!("{stem}{vowel}{ending}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use padezh_core::Gender;

    fn all_cases(lemma: &Lemma, plural: &str) -> Vec<Vec<String>> {
        Case::ALL
            .iter()
            .map(|&c| decline_plural(lemma, c, plural, None).unwrap().to_vec())
            .collect()
    }

    fn firsts(lemma: &Lemma, plural: &str) -> Vec<String> {
        all_cases(lemma, plural).into_iter().map(|f| f[0].clone()).collect()
    }

    #[test]
    fn mountains() {
        let mountain = Lemma::new("гора", Gender::Feminine).unwrap();
        assert_eq!(
            all_cases(&mountain, "горы"),
            vec![
                vec!["горы"],
                vec!["гор"],
                vec!["горам"],
                vec!["горы"],
                vec!["горами"],
                vec!["горах"],
                vec!["горах"],
            ]
        );
    }

    #[test]
    fn plurale_tantum_declines_its_own_text() {
        let scissors = Lemma::plurale_tantum("ножницы").unwrap();
        assert_eq!(
            firsts(&scissors, "ножницы"),
            vec!["ножницы", "ножниц", "ножницам", "ножницы", "ножницами", "ножницах", "ножницах"]
        );
        let gates = Lemma::plurale_tantum("ворота").unwrap();
        assert_eq!(firsts(&gates, "ворота")[1], "ворот");
    }

    #[test]
    fn animate_accusative_is_genitive() {
        let horse = Lemma::builder("конь")
            .gender(Gender::Masculine)
            .animate(true)
            .build()
            .unwrap();
        assert_eq!(
            firsts(&horse, "кони"),
            vec!["кони", "коней", "коням", "коней", "конями", "конях", "конях"]
        );
        let whirl = Lemma::new("вихрь", Gender::Masculine).unwrap();
        assert_eq!(firsts(&whirl, "Вихри")[3], "Вихри");
    }

    #[test]
    fn adjectival_plurals() {
        for (text, gender, animate) in [
            ("адаптировавший", Gender::Masculine, true),
            ("адаптировавшая", Gender::Feminine, false),
            ("адаптировавшее", Gender::Neuter, false),
        ] {
            let lemma = Lemma::builder(text)
                .gender(gender)
                .animate(animate)
                .build()
                .unwrap();
            let forms = firsts(&lemma, "адаптировавшие");
            assert_eq!(forms[1], "адаптировавших");
            assert_eq!(forms[2], "адаптировавшим");
            let accusative = if animate {
                "адаптировавших"
            } else {
                "адаптировавшие"
            };
            assert_eq!(forms[3], accusative);
            assert_eq!(forms[4], "адаптировавшими");
            assert_eq!(forms[5], "адаптировавших");
            assert_eq!(forms[6], "адаптировавших");
        }
    }

    #[test]
    fn surname_plurals() {
        let ivanov = Lemma::builder("Иванов")
            .gender(Gender::Masculine)
            .surname(true)
            .build()
            .unwrap();
        assert_eq!(
            firsts(&ivanov, "Ивановы"),
            vec!["Ивановы", "Ивановых", "Ивановым", "Ивановых", "Ивановыми", "Ивановых", "Ивановых"]
        );
    }

    #[test]
    fn lexical_instrumentals() {
        let horse = Lemma::builder("лошадь")
            .gender(Gender::Feminine)
            .animate(true)
            .build()
            .unwrap();
        assert_eq!(
            decline_plural(&horse, Case::Instrumental, "лошади", None)
                .unwrap()
                .to_vec(),
            vec!["лошадьми", "лошадями"]
        );
        let child = Lemma::new("дитя", Gender::Neuter).unwrap();
        assert_eq!(
            decline_plural(&child, Case::Instrumental, "дети", None)
                .unwrap()
                .to_vec(),
            vec!["детьми"]
        );
        assert_eq!(
            decline_plural(&child, Case::Dative, "дети", None).unwrap().to_vec(),
            vec!["детям"]
        );
    }

    #[test]
    fn capitalization_follows_the_plural() {
        let eye = Lemma::new("Око", Gender::Neuter).unwrap();
        assert_eq!(
            decline_plural(&eye, Case::Instrumental, "Очи", None)
                .unwrap()
                .to_vec(),
            vec!["Очами"]
        );
        let cloud = Lemma::new("облако", Gender::Neuter).unwrap();
        assert_eq!(
            decline_plural(&cloud, Case::Genitive, "ОБЛАКА", None)
                .unwrap()
                .to_vec(),
            vec!["ОБЛАКОВ"]
        );
        let restaurant = Lemma::new("МакДональд", Gender::Masculine).unwrap();
        assert_eq!(
            firsts(&restaurant, "МакДональды"),
            vec![
                "МакДональды",
                "МакДональдов",
                "МакДональдам",
                "МакДональды",
                "МакДональдами",
                "МакДональдах",
                "МакДональдах"
            ]
        );
    }

    #[test]
    fn empty_plural_is_rejected() {
        let cloud = Lemma::new("облако", Gender::Neuter).unwrap();
        assert!(matches!(
            decline_plural(&cloud, Case::Genitive, "  ", None),
            Err(InflectionError::InvalidLemma(_))
        ));
    }

    #[test]
    fn indeclinable_plural_is_identity() {
        let hippie = Lemma::new("хиппи", Gender::Common).unwrap();
        for case in Case::ALL {
            assert_eq!(
                decline_plural(&hippie, case, "хиппи", None).unwrap().to_vec(),
                vec!["хиппи"]
            );
        }
    }
}
