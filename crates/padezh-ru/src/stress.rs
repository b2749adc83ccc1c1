// Stress side-table
//
// Some spellings depend on stress that the citation form does not show:
// "кринжем" vs "кринжом", "птицей" vs "овцой", "немцев" vs "отцов". A
// caller can register a stress pattern per lemma; the generators consult it
// before falling back to their default heuristics.

use std::fmt;
use std::str::FromStr;

use hashbrown::HashMap;
use padezh_core::{Case, Forms, Lemma};

/// Stress placement for one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stress {
    /// `S`: stem stressed.
    Stem,
    /// `E`: ending stressed.
    Ending,
    /// `b`: both are used; the unstressed-ending spelling comes first.
    Both,
    /// `s`: both are used, stem stress preferred.
    StemPreferred,
    /// `e`: both are used, ending stress preferred.
    EndingPreferred,
}

impl Stress {
    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            'S' => Some(Stress::Stem),
            'E' => Some(Stress::Ending),
            'b' => Some(Stress::Both),
            's' => Some(Stress::StemPreferred),
            'e' => Some(Stress::EndingPreferred),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Stress::Stem => 'S',
            Stress::Ending => 'E',
            Stress::Both => 'b',
            Stress::StemPreferred => 's',
            Stress::EndingPreferred => 'e',
        }
    }

    /// Pick between the spelling used under stem stress and the one used
    /// under ending stress.
    pub fn choose(self, stem_stressed: String, ending_stressed: String) -> Forms {
        match self {
            Stress::Stem => Forms::one(stem_stressed),
            Stress::Ending => Forms::one(ending_stressed),
            Stress::Both | Stress::StemPreferred => Forms::two(stem_stressed, ending_stressed),
            Stress::EndingPreferred => Forms::two(ending_stressed, stem_stressed),
        }
    }
}

/// Error parsing a textual stress pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StressPatternError {
    #[error("stress pattern must have the form SSSSSSS-PPPPPP[P], got {0:?}")]
    MissingSeparator(String),

    #[error("expected {expected} singular stress markers, found {found}")]
    SingularLength { expected: usize, found: usize },

    #[error("expected 6 or 7 plural stress markers, found {0}")]
    PluralLength(usize),

    #[error("invalid stress marker {0:?} (expected one of S, E, b, s, e)")]
    InvalidMarker(char),
}

/// Stress markers for all seven cases in both numbers.
///
/// Textual form: seven singular markers in canonical case order, a dash,
/// then six or seven plural markers. When the plural locative is omitted it
/// copies the plural prepositional. Example: `SEESESE-EEEEEE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StressPattern {
    singular: [Stress; 7],
    plural: [Stress; 7],
}

impl StressPattern {
    pub fn new(singular: [Stress; 7], plural: [Stress; 7]) -> Self {
        Self { singular, plural }
    }

    pub fn singular(&self, case: Case) -> Stress {
        self.singular[case.index()]
    }

    pub fn plural(&self, case: Case) -> Stress {
        self.plural[case.index()]
    }
}

fn parse_markers(part: &str) -> Result<Vec<Stress>, StressPatternError> {
    part.chars()
        .map(|c| Stress::from_marker(c).ok_or(StressPatternError::InvalidMarker(c)))
        .collect()
}

impl FromStr for StressPattern {
    type Err = StressPatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (sg, pl) = s
            .split_once('-')
            .ok_or_else(|| StressPatternError::MissingSeparator(s.to_string()))?;

        let sg = parse_markers(sg)?;
        let mut pl = parse_markers(pl)?;

        let singular: [Stress; 7] = sg.as_slice().try_into().map_err(|_| {
            StressPatternError::SingularLength {
                expected: 7,
                found: sg.len(),
            }
        })?;

        if pl.len() == 6 {
            pl.push(pl[Case::Prepositional.index()]);
        }
        let plural: [Stress; 7] = pl
            .as_slice()
            .try_into()
            .map_err(|_| StressPatternError::PluralLength(pl.len()))?;

        Ok(Self { singular, plural })
    }
}

/// Always writes all fourteen markers: a pattern parsed with six plural
/// markers is printed with the copied plural locative as the seventh.
impl fmt::Display for StressPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.singular {
            write!(f, "{}", s.marker())?;
        }
        f.write_str("-")?;
        for s in &self.plural {
            write!(f, "{}", s.marker())?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Lookup capability
// ---------------------------------------------------------------------------

/// Source of per-lemma stress patterns.
pub trait StressLookup {
    fn stress_of(&self, lemma: &Lemma) -> Option<&StressPattern>;
}

/// A lookup that never has an entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStress;

impl StressLookup for NoStress {
    fn stress_of(&self, _lemma: &Lemma) -> Option<&StressPattern> {
        None
    }
}

/// Stress patterns keyed by lemma identity (text, gender and flags).
#[derive(Debug, Clone, Default)]
pub struct StressDictionary {
    entries: HashMap<Lemma, StressPattern>,
}

impl StressDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace the pattern for a lemma.
    pub fn put(&mut self, lemma: &Lemma, pattern: StressPattern) -> Option<StressPattern> {
        self.entries.insert(lemma.clone(), pattern)
    }

    pub fn get(&self, lemma: &Lemma) -> Option<&StressPattern> {
        self.entries.get(lemma)
    }

    pub fn remove(&mut self, lemma: &Lemma) -> Option<StressPattern> {
        self.entries.remove(lemma)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Lemma, &StressPattern)> {
        self.entries.iter()
    }
}

impl StressLookup for StressDictionary {
    fn stress_of(&self, lemma: &Lemma) -> Option<&StressPattern> {
        self.get(lemma)
    }
}

impl<T: StressLookup + ?Sized> StressLookup for &T {
    fn stress_of(&self, lemma: &Lemma) -> Option<&StressPattern> {
        (**self).stress_of(lemma)
    }
}
