// Lemma: citation form plus the lexical flags that drive inflection

use crate::character::{is_vowel, simple_lower};
use crate::enums::Gender;
use crate::error::InflectionError;

/// A noun in its dictionary form.
///
/// Lemmas are immutable values. The engine never modifies a caller's
/// lemma; words that must be re-routed through another declension are
/// rebuilt with [`Lemma::with_text`] / [`Lemma::with_gender`].
///
/// Equality and hashing cover every field, so two lemmas with the same text
/// but different flags are distinct keys in a stress dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Lemma {
    text: String,
    gender: Option<Gender>,
    plurale_tantum: bool,
    indeclinable: bool,
    animate: bool,
    surname: bool,
}

impl Lemma {
    /// Create a lemma with no flags set.
    pub fn new(text: impl Into<String>, gender: Gender) -> Result<Self, InflectionError> {
        LemmaBuilder::new(text).gender(gender).build()
    }

    /// Create a plurale tantum lemma ("ножницы") without a gender.
    pub fn plurale_tantum(text: impl Into<String>) -> Result<Self, InflectionError> {
        LemmaBuilder::new(text).plurale_tantum(true).build()
    }

    pub fn builder(text: impl Into<String>) -> LemmaBuilder {
        LemmaBuilder::new(text)
    }

    /// Citation form (nominative singular, or nominative plural for
    /// plurale tantum words).
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn is_plurale_tantum(&self) -> bool {
        self.plurale_tantum
    }

    pub fn is_indeclinable(&self) -> bool {
        self.indeclinable
    }

    /// Surnames are always animate.
    pub fn is_animate(&self) -> bool {
        self.animate || self.surname
    }

    pub fn is_surname(&self) -> bool {
        self.surname
    }

    /// A copy of this lemma with a different citation text.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    /// A copy of this lemma with a different gender.
    pub fn with_gender(&self, gender: Gender) -> Self {
        Self {
            gender: Some(gender),
            ..self.clone()
        }
    }
}

/// Builder for [`Lemma`] that validates on [`LemmaBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct LemmaBuilder {
    text: String,
    gender: Option<Gender>,
    plurale_tantum: bool,
    indeclinable: bool,
    animate: bool,
    surname: bool,
}

impl LemmaBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn maybe_gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    pub fn plurale_tantum(mut self, yes: bool) -> Self {
        self.plurale_tantum = yes;
        self
    }

    pub fn indeclinable(mut self, yes: bool) -> Self {
        self.indeclinable = yes;
        self
    }

    pub fn animate(mut self, yes: bool) -> Self {
        self.animate = yes;
        self
    }

    pub fn surname(mut self, yes: bool) -> Self {
        self.surname = yes;
        self
    }

    /// Validate and build.
    ///
    /// Fails with `InvalidLemma` if the text is empty (after trimming), if
    /// a word that is not plurale tantum has no gender, or if a declinable
    /// word has nothing left once its ending is removed ("э", "ие").
    pub fn build(self) -> Result<Lemma, InflectionError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(InflectionError::InvalidLemma(
                "citation text must not be empty".to_string(),
            ));
        }
        if !self.indeclinable && !has_stem(text) {
            return Err(InflectionError::InvalidLemma(format!(
                "{text:?}: no stem to inflect"
            )));
        }
        if self.gender.is_none() && !self.plurale_tantum {
            return Err(InflectionError::InvalidLemma(format!(
                "{text:?}: a grammatical gender is required"
            )));
        }
        Ok(Lemma {
            text: text.to_string(),
            gender: self.gender,
            plurale_tantum: self.plurale_tantum,
            indeclinable: self.indeclinable,
            animate: self.animate,
            surname: self.surname,
        })
    }
}

/// Whether the text has a letter other than a vowel, "й" or a sign.
fn has_stem(text: &str) -> bool {
    !text
        .chars()
        .all(|c| is_vowel(c) || matches!(simple_lower(c), 'й' | 'ь' | 'ъ'))
}
