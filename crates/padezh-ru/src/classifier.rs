// Declension classifier

use padezh_core::word::{last, last_n, to_lower};
use padezh_core::{DeclensionClass, Gender, InflectionError, Lemma};

use crate::lexicon::IRREGULAR_NEUTER;

/// Determine the declension class of a lemma.
///
/// The indeclinable flag wins over everything else. Otherwise the class is
/// a function of gender, final letters and a few lexical exceptions.
///
/// Plurale tantum words without a gender have no singular paradigm and
/// yield `UnsupportedForm`.
pub fn classify(lemma: &Lemma) -> Result<DeclensionClass, InflectionError> {
    if lemma.is_indeclinable() {
        return Ok(DeclensionClass::Indeclinable);
    }

    let gender = match lemma.gender() {
        Some(g) => g,
        None if lemma.is_plurale_tantum() => {
            return Err(InflectionError::UnsupportedForm(format!(
                "{:?}: plurale tantum without gender has no declension class",
                lemma.text()
            )));
        }
        None => {
            return Err(InflectionError::InvalidLemma(format!(
                "{:?}: a grammatical gender is required",
                lemma.text()
            )));
        }
    };

    let lc = to_lower(lemma.text());
    let a_ya = matches!(last(&lc), Some('а' | 'я'));

    let class = match gender {
        Gender::Feminine if a_ya => DeclensionClass::Second,
        Gender::Feminine => DeclensionClass::Third,
        Gender::Masculine if a_ya => DeclensionClass::Second,
        Gender::Masculine if lc == "путь" => DeclensionClass::Irregular,
        Gender::Masculine => DeclensionClass::First,
        Gender::Neuter if IRREGULAR_NEUTER.contains(&lc.as_str()) => DeclensionClass::Irregular,
        Gender::Neuter if last_n(&lc, 2) == "мя" => DeclensionClass::Third,
        Gender::Neuter => DeclensionClass::First,
        Gender::Common if a_ya => DeclensionClass::Second,
        Gender::Common if last(&lc) == Some('и') => DeclensionClass::Indeclinable,
        Gender::Common => DeclensionClass::First,
    };

    log::trace!("classified {:?} ({gender:?}) as class {class}", lemma.text());
    Ok(class)
}

/// School numbering of [`classify`]: 1 and 2 swapped.
pub fn school_declension(lemma: &Lemma) -> Result<i8, InflectionError> {
    classify(lemma).map(DeclensionClass::school_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_of(text: &str, gender: Gender) -> DeclensionClass {
        classify(&Lemma::new(text, gender).unwrap()).unwrap()
    }

    #[test]
    fn feminine() {
        assert_eq!(class_of("гора", Gender::Feminine), DeclensionClass::Second);
        assert_eq!(class_of("земля", Gender::Feminine), DeclensionClass::Second);
        assert_eq!(class_of("тень", Gender::Feminine), DeclensionClass::Third);
        assert_eq!(class_of("мышь", Gender::Feminine), DeclensionClass::Third);
    }

    #[test]
    fn masculine() {
        assert_eq!(class_of("дядя", Gender::Masculine), DeclensionClass::Second);
        assert_eq!(class_of("Гоша", Gender::Masculine), DeclensionClass::Second);
        assert_eq!(class_of("путь", Gender::Masculine), DeclensionClass::Irregular);
        assert_eq!(class_of("Путь", Gender::Masculine), DeclensionClass::Irregular);
        assert_eq!(class_of("стол", Gender::Masculine), DeclensionClass::First);
        assert_eq!(class_of("музей", Gender::Masculine), DeclensionClass::First);
    }

    #[test]
    fn neuter() {
        assert_eq!(class_of("дитя", Gender::Neuter), DeclensionClass::Irregular);
        assert_eq!(class_of("полудитя", Gender::Neuter), DeclensionClass::Irregular);
        assert_eq!(class_of("имя", Gender::Neuter), DeclensionClass::Third);
        assert_eq!(class_of("вымя", Gender::Neuter), DeclensionClass::Third);
        assert_eq!(class_of("село", Gender::Neuter), DeclensionClass::First);
        assert_eq!(class_of("строение", Gender::Neuter), DeclensionClass::First);
    }

    #[test]
    fn common() {
        assert_eq!(class_of("сирота", Gender::Common), DeclensionClass::Second);
        assert_eq!(class_of("хиппи", Gender::Common), DeclensionClass::Indeclinable);
        assert_eq!(class_of("молодец", Gender::Common), DeclensionClass::First);
    }

    #[test]
    fn indeclinable_flag_wins() {
        let coat = Lemma::builder("пальто")
            .gender(Gender::Neuter)
            .indeclinable(true)
            .build()
            .unwrap();
        assert_eq!(classify(&coat).unwrap(), DeclensionClass::Indeclinable);
        assert_eq!(school_declension(&coat).unwrap(), -1);
    }

    #[test]
    fn school_numbers() {
        let mountain = Lemma::new("гора", Gender::Feminine).unwrap();
        assert_eq!(classify(&mountain).unwrap().number(), 2);
        assert_eq!(school_declension(&mountain).unwrap(), 1);
        let table = Lemma::new("стол", Gender::Masculine).unwrap();
        assert_eq!(school_declension(&table).unwrap(), 2);
    }

    #[test]
    fn plurale_tantum_without_gender() {
        let scissors = Lemma::plurale_tantum("ножницы").unwrap();
        assert!(matches!(
            classify(&scissors),
            Err(InflectionError::UnsupportedForm(_))
        ));
    }
}
