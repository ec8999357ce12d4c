use std::fmt;

/// Number of pitch classes in the chromatic scale
pub const SEMITONES: usize = 12;

/// A pitch class resolved against the chromatic scale
///
/// `index` is the semitone offset from the first scale entry (0-11) and `name`
/// is the canonical spelling stored at that index. Pitches are only produced by
/// [`ReferenceTables`](crate::types::ReferenceTables), so the two fields always agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pitch {
    index: u8,
    name: String,
}

impl Pitch {
    pub(crate) fn new(index: u8, name: &str) -> Self {
        Pitch {
            index,
            name: name.to_string(),
        }
    }

    /// Chromatic index (0-11)
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Canonical display name (e.g. "C#")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index reached by moving `semitones` up from this pitch, wrapped to 0-11
    pub fn offset_index(&self, semitones: u32) -> usize {
        (self.index as usize + semitones as usize) % SEMITONES
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
