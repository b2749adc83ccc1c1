// Singular case-form generators, one per declension class
//
// `decline` is the public entry: indeclinable and plurale tantum words
// short-circuit to their citation form. `decline_with_class` skips those
// short-circuits and goes straight to the class generator, which rejects
// plurale tantum words.

mod first;
mod irregular;
mod second;
mod third;

use padezh_core::{Case, DeclensionClass, Forms, InflectionError, Lemma};

use crate::classifier::classify;
use crate::stress::StressPattern;

/// Singular form(s) of `lemma` in `case`.
pub fn decline(
    lemma: &Lemma,
    case: Case,
    stress: Option<&StressPattern>,
) -> Result<Forms, InflectionError> {
    if lemma.is_indeclinable() || lemma.is_plurale_tantum() {
        return Ok(Forms::one(lemma.text()));
    }
    decline_with_class(lemma, case, stress)
}

/// Classify `lemma` and run the matching generator.
pub fn decline_with_class(
    lemma: &Lemma,
    case: Case,
    stress: Option<&StressPattern>,
) -> Result<Forms, InflectionError> {
    if lemma.is_plurale_tantum() {
        return Err(InflectionError::UnsupportedForm(format!(
            "{:?} is plurale tantum and has no singular forms",
            lemma.text()
        )));
    }
    let class = classify(lemma)?;
    log::trace!("declining {:?} (class {class}) in {}", lemma.text(), case.name());
    match class {
        DeclensionClass::Indeclinable => Ok(Forms::one(lemma.text())),
        DeclensionClass::Irregular => irregular::decline(lemma, case),
        DeclensionClass::First => first::decline(lemma, case, stress),
        DeclensionClass::Second => second::decline(lemma, case, stress),
        DeclensionClass::Third => Ok(third::decline(lemma, case)),
    }
}
