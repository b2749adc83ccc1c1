//! Public API scenarios: classification, identity paths, paradigms and the
//! stress side-table, exercised through the crate root and `Engine`.

use padezh_ru::{
    Case, DeclensionClass, Engine, Gender, InflectionError, Lemma, StressDictionary, StressPattern,
};

fn lemma(text: &str, gender: Gender) -> Lemma {
    Lemma::new(text, gender).unwrap()
}

fn forms(lemma: &Lemma, case: Case) -> Vec<String> {
    padezh_ru::decline(lemma, case).unwrap().to_vec()
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[test]
fn declension_numbers() {
    let mountain = lemma("гора", Gender::Feminine);
    assert_eq!(padezh_ru::classify(&mountain).unwrap().number(), 2);
    assert_eq!(padezh_ru::school_declension(&mountain).unwrap(), 1);

    let way = lemma("путь", Gender::Masculine);
    assert_eq!(padezh_ru::classify(&way).unwrap(), DeclensionClass::Irregular);
    assert_eq!(padezh_ru::classify(&way).unwrap().number(), 0);

    let coat = Lemma::builder("пальто")
        .gender(Gender::Neuter)
        .indeclinable(true)
        .build()
        .unwrap();
    assert_eq!(padezh_ru::classify(&coat).unwrap().number(), -1);
}

// ---------------------------------------------------------------------------
// Literal paradigms
// ---------------------------------------------------------------------------

#[test]
fn mountain() {
    let mountain = lemma("гора", Gender::Feminine);
    assert_eq!(forms(&mountain, Case::Genitive), vec!["горы"]);
    assert_eq!(forms(&mountain, Case::Instrumental), vec!["горой", "горою"]);

    let plural = padezh_ru::pluralize(&mountain).unwrap();
    assert_eq!(plural.to_vec(), vec!["горы"]);
    assert_eq!(
        padezh_ru::decline_plural(&mountain, Case::Genitive, plural.preferred())
            .unwrap()
            .to_vec(),
        vec!["гор"]
    );
}

#[test]
fn way_and_name() {
    assert_eq!(
        forms(&lemma("путь", Gender::Masculine), Case::Instrumental),
        vec!["путем"]
    );
    let name = lemma("имя", Gender::Neuter);
    assert_eq!(forms(&name, Case::Genitive), vec!["имени"]);
    assert_eq!(forms(&name, Case::Instrumental), vec!["именем"]);
}

#[test]
fn indeclinable_coat() {
    let coat = Lemma::builder("пальто")
        .gender(Gender::Neuter)
        .indeclinable(true)
        .build()
        .unwrap();
    for case in Case::ALL {
        assert_eq!(forms(&coat, case), vec!["пальто"]);
    }
    assert_eq!(padezh_ru::pluralize(&coat).unwrap().to_vec(), vec!["пальто"]);
}

#[test]
fn scissors() {
    let scissors = Lemma::plurale_tantum("ножницы").unwrap();
    for case in Case::ALL {
        assert_eq!(forms(&scissors, case), vec!["ножницы"]);
    }
    assert_eq!(
        padezh_ru::pluralize(&scissors).unwrap().to_vec(),
        vec!["ножницы"]
    );
    assert!(matches!(
        padezh_ru::classify(&scissors),
        Err(InflectionError::UnsupportedForm(_))
    ));
}

#[test]
fn capitalization_survives_lexical_forms() {
    assert_eq!(
        forms(&lemma("Лоб", Gender::Masculine), Case::Locative),
        vec!["Лбу"]
    );
    assert_eq!(
        forms(&lemma("Дочь", Gender::Feminine), Case::Genitive),
        vec!["Дочери"]
    );
    let person = Lemma::builder("Человек")
        .gender(Gender::Masculine)
        .animate(true)
        .build()
        .unwrap();
    assert_eq!(padezh_ru::pluralize(&person).unwrap().to_vec(), vec!["Люди"]);
}

#[test]
fn missing_gender_is_rejected() {
    assert!(matches!(
        Lemma::builder("стол").build(),
        Err(InflectionError::InvalidLemma(_))
    ));
}

// ---------------------------------------------------------------------------
// Stress side-table
// ---------------------------------------------------------------------------

#[test]
fn cringe_overrides() {
    let cringe = lemma("кринж", Gender::Masculine);
    let mut engine = Engine::new();
    let instrumental = |engine: &Engine| engine.decline(&cringe, Case::Instrumental).unwrap().to_vec();

    assert_eq!(instrumental(&engine), vec!["кринжем"]);

    for (pattern, expected) in [
        ("SEESESE-EEEEEE", vec!["кринжом"]),
        ("SEESbSE-EEEEEE", vec!["кринжем", "кринжом"]),
        ("SEESsSE-EEEEEE", vec!["кринжем", "кринжом"]),
        ("SEESeSE-EEEEEE", vec!["кринжом", "кринжем"]),
    ] {
        engine.put_stress(&cringe, pattern.parse().unwrap());
        assert_eq!(instrumental(&engine), expected, "pattern {pattern}");
    }

    // The free function never sees the engine's table.
    assert_eq!(forms(&cringe, Case::Instrumental), vec!["кринжем"]);
}

#[test]
fn engine_over_borrowed_dictionary() {
    let cringe = lemma("кринж", Gender::Masculine);
    let mut dictionary = StressDictionary::new();
    let pattern: StressPattern = "SEESESE-EEEEEE".parse().unwrap();
    dictionary.put(&cringe, pattern);

    let engine = Engine::with_stress(&dictionary);
    assert_eq!(
        engine.decline(&cringe, Case::Instrumental).unwrap().to_vec(),
        vec!["кринжом"]
    );
    assert_eq!(dictionary.len(), 1);
}

#[test]
fn malformed_stress_patterns() {
    assert!("SEES-EEEEEE".parse::<StressPattern>().is_err());
    assert!("SEESESE".parse::<StressPattern>().is_err());
    assert!("SEESXSE-EEEEEE".parse::<StressPattern>().is_err());
}
