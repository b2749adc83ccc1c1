// Error taxonomy shared by all inflection operations

/// Errors returned by classification, declension and pluralization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InflectionError {
    /// Empty citation text, or a missing or unknown gender on a word that
    /// is not plurale tantum.
    #[error("invalid lemma: {0}")]
    InvalidLemma(String),

    /// No inflection is known for the requested form. Callers are expected
    /// to treat this as "no form" rather than a crash.
    #[error("unsupported form: {0}")]
    UnsupportedForm(String),
}
