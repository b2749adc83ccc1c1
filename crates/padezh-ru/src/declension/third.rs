// Class 3: feminine zero-ending nouns ("тень") and neuter "-мя" nouns ("имя")

use padezh_core::letter_case::transfer;
use padezh_core::word::{last_n, to_lower};
use padezh_core::{Case, Forms, Lemma};

use crate::lexicon::{EXTENDED_STEMS, lookup};
use crate::stem::noun_stem;

pub(crate) fn decline(lemma: &Lemma, case: Case) -> Forms {
    let word = lemma.text();
    let lc = to_lower(word);

    if !matches!(case, Case::Nominative | Case::Accusative) {
        if let Some(extended) = lookup(EXTENDED_STEMS, &lc) {
            return decline(&lemma.with_text(transfer(word, extended)), case);
        }
    }

    let stem = noun_stem(lemma);
    let men = last_n(&lc, 2) == "мя";

    let form = match case {
        Case::Nominative | Case::Accusative => word.to_string(),
        Case::Genitive | Case::Dative | Case::Prepositional | Case::Locative if men => {
            format!("{stem}ени")
        }
        Case::Instrumental if men => format!("{stem}енем"),
        Case::Genitive | Case::Dative | Case::Prepositional | Case::Locative => {
            format!("{stem}и")
        }
        Case::Instrumental => format!("{stem}ью"),
    };
    Forms::one(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use padezh_core::Gender;

    fn paradigm(text: &str, gender: Gender) -> Vec<String> {
        let lemma = Lemma::new(text, gender).unwrap();
        Case::ALL
            .iter()
            .map(|&c| decline(&lemma, c).preferred().to_string())
            .collect()
    }

    #[test]
    fn men_nouns() {
        assert_eq!(
            paradigm("имя", Gender::Neuter),
            vec!["имя", "имени", "имени", "имя", "именем", "имени", "имени"]
        );
        assert_eq!(
            paradigm("вымя", Gender::Neuter),
            vec!["вымя", "вымени", "вымени", "вымя", "выменем", "вымени", "вымени"]
        );
    }

    #[test]
    fn feminine_soft_sign() {
        assert_eq!(
            paradigm("бровь", Gender::Feminine),
            vec!["бровь", "брови", "брови", "бровь", "бровью", "брови", "брови"]
        );
        assert_eq!(
            paradigm("мочь", Gender::Feminine),
            vec!["мочь", "мочи", "мочи", "мочь", "мочью", "мочи", "мочи"]
        );
    }

    #[test]
    fn extended_stems() {
        assert_eq!(
            paradigm("дочь", Gender::Feminine),
            vec!["дочь", "дочери", "дочери", "дочь", "дочерью", "дочери", "дочери"]
        );
        assert_eq!(paradigm("Мать", Gender::Feminine)[4], "Матерью");
    }
}
