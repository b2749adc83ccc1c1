// Grammatical enumerations: gender, case, declension class

use std::fmt;
use std::str::FromStr;

use crate::error::InflectionError;

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// Grammatical gender of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
    /// Nouns that agree as either masculine or feminine ("сирота", "хиппи").
    Common,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Masculine,
        Gender::Feminine,
        Gender::Neuter,
        Gender::Common,
    ];

    /// Russian display label.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Masculine => "мужской",
            Gender::Feminine => "женский",
            Gender::Neuter => "средний",
            Gender::Common => "общий",
        }
    }

    /// Lowercase English identifier.
    pub fn name(self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
            Gender::Common => "common",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = InflectionError;

    /// Accepts English identifiers, their one-letter abbreviations and the
    /// Russian labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Gender::ALL
            .into_iter()
            .find(|g| key == g.name() || key == g.label())
            .or(match key.as_str() {
                "m" | "м" => Some(Gender::Masculine),
                "f" | "ж" => Some(Gender::Feminine),
                "n" | "с" => Some(Gender::Neuter),
                "c" => Some(Gender::Common),
                _ => None,
            })
            .ok_or_else(|| InflectionError::InvalidLemma(format!("unknown gender: {s:?}")))
    }
}

// ---------------------------------------------------------------------------
// Case
// ---------------------------------------------------------------------------

/// Grammatical case, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Prepositional,
    /// Second prepositional ("в снегу"). Differs from the prepositional only
    /// for a closed set of masculine nouns.
    Locative,
}

impl Case {
    pub const ALL: [Case; 7] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Prepositional,
        Case::Locative,
    ];

    /// Position in the canonical order (0-based).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Russian display label.
    pub fn label(self) -> &'static str {
        match self {
            Case::Nominative => "именительный",
            Case::Genitive => "родительный",
            Case::Dative => "дательный",
            Case::Accusative => "винительный",
            Case::Instrumental => "творительный",
            Case::Prepositional => "предложный",
            Case::Locative => "местный",
        }
    }

    /// Lowercase English identifier.
    pub fn name(self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Genitive => "genitive",
            Case::Dative => "dative",
            Case::Accusative => "accusative",
            Case::Instrumental => "instrumental",
            Case::Prepositional => "prepositional",
            Case::Locative => "locative",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Case {
    type Err = InflectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Case::ALL
            .into_iter()
            .find(|c| key == c.name() || key == c.label())
            .ok_or_else(|| InflectionError::UnsupportedForm(format!("unknown case: {s:?}")))
    }
}

// ---------------------------------------------------------------------------
// DeclensionClass
// ---------------------------------------------------------------------------

/// Declension class in the academic numbering.
///
/// Class 1 is masculine/neuter with a zero or -о/-е ending, class 2 is the
/// -а/-я type. School textbooks swap these two numbers, see
/// [`DeclensionClass::school_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeclensionClass {
    /// Heteroclitic nouns: "путь", "дитя".
    Irregular,
    First,
    Second,
    Third,
    Indeclinable,
}

impl DeclensionClass {
    /// Academic number: 0..=3, or -1 for indeclinable words.
    pub fn number(self) -> i8 {
        match self {
            DeclensionClass::Irregular => 0,
            DeclensionClass::First => 1,
            DeclensionClass::Second => 2,
            DeclensionClass::Third => 3,
            DeclensionClass::Indeclinable => -1,
        }
    }

    /// School number: 1 and 2 swapped, everything else unchanged.
    pub fn school_number(self) -> i8 {
        match self {
            DeclensionClass::First => 2,
            DeclensionClass::Second => 1,
            other => other.number(),
        }
    }

    pub fn from_number(n: i8) -> Option<Self> {
        match n {
            0 => Some(DeclensionClass::Irregular),
            1 => Some(DeclensionClass::First),
            2 => Some(DeclensionClass::Second),
            3 => Some(DeclensionClass::Third),
            -1 => Some(DeclensionClass::Indeclinable),
            _ => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DeclensionClass::Irregular => "разносклоняемые \"путь\" и \"дитя\"",
            DeclensionClass::First => "муж., средний род без окончания",
            DeclensionClass::Second => "слова на \"а\", \"я\" (м., ж. и общий род)",
            DeclensionClass::Third => "жен. род без окончания, слова на \"мя\"",
            DeclensionClass::Indeclinable => "несклоняемые",
        }
    }
}

impl fmt::Display for DeclensionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
