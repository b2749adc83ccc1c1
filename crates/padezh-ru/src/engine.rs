// Engine: stress-aware entry point
//
// The free functions in the crate root decline with the default heuristics
// only. An `Engine` owns a stress lookup and consults it before the
// heuristics wherever Russian spelling depends on stress.
//
// Design notes:
// - The lookup is a type parameter so callers can plug in their own
//   dictionary; the default is an in-memory `StressDictionary`.
// - All methods take `&self`. Registering a pattern goes through
//   `stress_mut`/`put_stress`, which need `&mut self`.

use padezh_core::{Case, DeclensionClass, Forms, InflectionError, Lemma};

use crate::stress::{StressDictionary, StressLookup, StressPattern};
use crate::{classifier, declension, plural};

/// Declension engine with a stress side-table.
#[derive(Debug, Clone, Default)]
pub struct Engine<S: StressLookup = StressDictionary> {
    stress: S,
}

impl Engine<StressDictionary> {
    /// An engine with an empty stress dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the stress pattern of a lemma.
    pub fn put_stress(&mut self, lemma: &Lemma, pattern: StressPattern) -> Option<StressPattern> {
        self.stress.put(lemma, pattern)
    }
}

impl<S: StressLookup> Engine<S> {
    pub fn with_stress(stress: S) -> Self {
        Self { stress }
    }

    pub fn stress(&self) -> &S {
        &self.stress
    }

    pub fn stress_mut(&mut self) -> &mut S {
        &mut self.stress
    }

    // =========================================================================
    // Classification
    // =========================================================================

    pub fn classify(&self, lemma: &Lemma) -> Result<DeclensionClass, InflectionError> {
        classifier::classify(lemma)
    }

    pub fn school_declension(&self, lemma: &Lemma) -> Result<i8, InflectionError> {
        classifier::school_declension(lemma)
    }

    // =========================================================================
    // Inflection
    // =========================================================================

    /// Singular form(s) of `lemma` in `case`.
    ///
    /// Indeclinable and plurale tantum words return their citation form.
    pub fn decline(&self, lemma: &Lemma, case: Case) -> Result<Forms, InflectionError> {
        log::debug!("decline {:?} {}", lemma.text(), case.name());
        declension::decline(lemma, case, self.stress.stress_of(lemma))
    }

    /// Plural form(s) of `lemma` in `case`, given its nominative plural.
    pub fn decline_plural(
        &self,
        lemma: &Lemma,
        case: Case,
        plural: &str,
    ) -> Result<Forms, InflectionError> {
        log::debug!("decline {:?} {} plural {plural:?}", lemma.text(), case.name());
        plural::decline_plural(lemma, case, plural, self.stress.stress_of(lemma))
    }

    /// Nominative plural form(s) of `lemma`.
    pub fn pluralize(&self, lemma: &Lemma) -> Result<Forms, InflectionError> {
        log::debug!("pluralize {:?}", lemma.text());
        plural::pluralize(lemma)
    }

    /// All seven singular cases in canonical order.
    pub fn paradigm(&self, lemma: &Lemma) -> Result<Vec<Forms>, InflectionError> {
        Case::ALL.iter().map(|&c| self.decline(lemma, c)).collect()
    }

    /// All seven plural cases in canonical order, built on the preferred
    /// nominative plural.
    pub fn plural_paradigm(&self, lemma: &Lemma) -> Result<Vec<Forms>, InflectionError> {
        let nominative = self.pluralize(lemma)?;
        Case::ALL
            .iter()
            .map(|&c| self.decline_plural(lemma, c, nominative.preferred()))
            .collect()
    }
}
