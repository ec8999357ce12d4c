use crate::error::{FretboardError, Result};
use crate::types::pitch::Pitch;
use std::fmt;

/// Frets shown when the caller does not ask for a specific count
pub const DEFAULT_FRET_COUNT: u32 = 12;

/// Open-string spellings, from the reference string (index 0) to the last
///
/// Entries are kept as written; they are normalized when positions are mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<String>", into = "Vec<String>"))]
pub struct Tuning {
    strings: Vec<String>,
}

impl Tuning {
    pub fn new(strings: Vec<String>) -> Result<Self> {
        if strings.is_empty() {
            return Err(FretboardError::EmptyTuning);
        }
        Ok(Tuning { strings })
    }

    /// Six-string guitar, low E first
    pub fn standard() -> Self {
        Tuning {
            strings: ["E", "A", "D", "G", "B", "E"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    /// Number of strings (always at least one)
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<String>> for Tuning {
    type Error = FretboardError;

    fn try_from(strings: Vec<String>) -> Result<Self> {
        Tuning::new(strings)
    }
}

impl TryFrom<&[&str]> for Tuning {
    type Error = FretboardError;

    fn try_from(strings: &[&str]) -> Result<Self> {
        Tuning::new(strings.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Tuning> for Vec<String> {
    fn from(tuning: Tuning) -> Self {
        tuning.strings
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.strings.join(","))
    }
}

/// A sounding pitch at one (string, fret) coordinate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotePosition {
    /// 0 is the open string
    pub fret: u32,
    /// Index into the tuning
    pub string: usize,
    pub pitch: Pitch,
}

impl NotePosition {
    pub fn new(fret: u32, string: usize, pitch: Pitch) -> Self {
        NotePosition { fret, string, pitch }
    }

    pub fn is_open(&self) -> bool {
        self.fret == 0
    }
}

impl fmt::Display for NotePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.fret, self.string, self.pitch)
    }
}
