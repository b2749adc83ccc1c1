//! Russian noun declension and pluralization.
//!
//! The free functions below run the rule cascades with their built-in
//! heuristics. Use [`Engine`] when some words need a registered stress
//! pattern to pick between stress-dependent spellings.
//!
//! ```
//! use padezh_ru::{Case, Gender, Lemma};
//!
//! let lemma = Lemma::new("гора", Gender::Feminine).unwrap();
//! let forms = padezh_ru::decline(&lemma, Case::Instrumental).unwrap();
//! assert_eq!(forms.to_vec(), vec!["горой", "горою"]);
//! ```

pub mod classifier;
pub mod declension;
pub mod engine;
mod lexicon;
mod patterns;
pub mod plural;
pub mod stem;
pub mod stress;

pub use engine::Engine;
pub use padezh_core::{Case, DeclensionClass, Forms, Gender, InflectionError, Lemma, LemmaBuilder};
pub use stress::{NoStress, Stress, StressDictionary, StressLookup, StressPattern, StressPatternError};

/// Declension class of `lemma`.
pub fn classify(lemma: &Lemma) -> Result<DeclensionClass, InflectionError> {
    classifier::classify(lemma)
}

/// School-textbook declension number of `lemma`.
pub fn school_declension(lemma: &Lemma) -> Result<i8, InflectionError> {
    classifier::school_declension(lemma)
}

/// Singular form(s) of `lemma` in `case`.
pub fn decline(lemma: &Lemma, case: Case) -> Result<Forms, InflectionError> {
    declension::decline(lemma, case, None)
}

/// Plural form(s) of `lemma` in `case`, given its nominative plural.
pub fn decline_plural(lemma: &Lemma, case: Case, plural: &str) -> Result<Forms, InflectionError> {
    plural::decline_plural(lemma, case, plural, None)
}

/// Nominative plural form(s) of `lemma`.
pub fn pluralize(lemma: &Lemma) -> Result<Forms, InflectionError> {
    plural::pluralize(lemma)
}
