// Surface-form result: one preferred form and an optional alternative

use std::fmt;

/// Ordered, non-empty list of one or two surface forms.
///
/// The first form is the preferred one. A second form models free
/// variation ("горой" / "горою"), never algorithmic ambiguity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Forms {
    first: String,
    second: Option<String>,
}

impl Forms {
    pub fn one(form: impl Into<String>) -> Self {
        Self {
            first: form.into(),
            second: None,
        }
    }

    /// Two co-valid forms. Identical forms collapse into one.
    pub fn two(first: impl Into<String>, second: impl Into<String>) -> Self {
        let first = first.into();
        let second = second.into();
        if first == second {
            Self::one(first)
        } else {
            Self {
                first,
                second: Some(second),
            }
        }
    }

    /// Keep the preferred form and set `alternative` as the second one.
    pub fn with_alternative(self, alternative: impl Into<String>) -> Self {
        Self::two(self.first, alternative)
    }

    pub fn preferred(&self) -> &str {
        &self.first
    }

    pub fn alternative(&self) -> Option<&str> {
        self.second.as_deref()
    }

    /// The last form: the alternative if present, else the preferred one.
    pub fn last(&self) -> &str {
        self.second.as_deref().unwrap_or(&self.first)
    }

    pub fn len(&self) -> usize {
        if self.second.is_some() { 2 } else { 1 }
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, form: &str) -> bool {
        self.iter().any(|f| f == form)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.first.as_str()).chain(self.second.as_deref())
    }

    /// Apply `f` to every form, keeping order.
    pub fn map(self, mut f: impl FnMut(&str) -> String) -> Self {
        let first = f(&self.first);
        match self.second {
            Some(second) => Self::two(first, f(&second)),
            None => Self::one(first),
        }
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }
}

impl From<String> for Forms {
    fn from(form: String) -> Self {
        Self::one(form)
    }
}

impl From<&str> for Forms {
    fn from(form: &str) -> Self {
        Self::one(form)
    }
}

impl IntoIterator for Forms {
    type Item = String;
    type IntoIter = std::iter::Chain<std::iter::Once<String>, std::option::IntoIter<String>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.first).chain(self.second)
    }
}

impl fmt::Display for Forms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.first)?;
        if let Some(second) = &self.second {
            write!(f, ", {second}")?;
        }
        Ok(())
    }
}
