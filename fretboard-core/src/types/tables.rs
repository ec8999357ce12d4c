use crate::error::{FretboardError, Result};
use crate::types::pitch::{Pitch, SEMITONES};
use std::collections::{HashMap, HashSet};

/// The 12 canonical pitch names, index = semitones above the first entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromaticScale {
    names: Vec<String>,
}

impl ChromaticScale {
    /// Build a scale from exactly 12 distinct names
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.len() != SEMITONES {
            return Err(FretboardError::invalid_config(format!(
                "chromatic scale must have {} notes, got {}",
                SEMITONES,
                names.len()
            )));
        }

        let mut seen = HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(FretboardError::invalid_config(format!(
                    "duplicate note '{}' in chromatic scale",
                    name
                )));
            }
        }

        Ok(ChromaticScale { names })
    }

    /// C, C#, D, ... B with sharps as the canonical spelling
    pub fn standard() -> Self {
        let names = [
            "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
        ];
        ChromaticScale {
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    /// Exact-match lookup of a canonical name
    pub fn index_of(&self, name: &str) -> Option<u8> {
        self.names.iter().position(|n| n == name).map(|i| i as u8)
    }

    /// Pitch at `index`, wrapped modulo 12
    pub fn pitch_at(&self, index: usize) -> Pitch {
        let index = index % SEMITONES;
        Pitch::new(index as u8, &self.names[index])
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }
}

/// Alternate spelling → canonical chromatic name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnharmonicMap {
    aliases: HashMap<String, String>,
}

impl EnharmonicMap {
    /// Build an alias table whose every target exists in `scale`
    pub fn new(aliases: HashMap<String, String>, scale: &ChromaticScale) -> Result<Self> {
        let map = EnharmonicMap { aliases };
        map.check_targets(scale)?;
        Ok(map)
    }

    fn check_targets(&self, scale: &ChromaticScale) -> Result<()> {
        for (alias, canonical) in &self.aliases {
            if !scale.contains(canonical) {
                return Err(FretboardError::invalid_config(format!(
                    "enharmonic '{}' maps to '{}', which is not in the chromatic scale",
                    alias, canonical
                )));
            }
        }
        Ok(())
    }

    /// Flats, the four "white key" accidentals, and double accidentals on naturals
    pub fn standard() -> Self {
        let pairs = [
            // Flats
            ("Db", "C#"),
            ("Eb", "D#"),
            ("Gb", "F#"),
            ("Ab", "G#"),
            ("Bb", "A#"),
            // Accidentals that land on naturals
            ("Cb", "B"),
            ("Fb", "E"),
            ("E#", "F"),
            ("B#", "C"),
            // Double sharps
            ("C##", "D"),
            ("D##", "E"),
            ("E##", "F#"),
            ("F##", "G"),
            ("G##", "A"),
            ("A##", "B"),
            ("B##", "C#"),
            // Double flats
            ("Cbb", "A#"),
            ("Dbb", "C"),
            ("Ebb", "D"),
            ("Fbb", "D#"),
            ("Gbb", "F"),
            ("Abb", "G"),
            ("Bbb", "A"),
        ];
        EnharmonicMap {
            aliases: pairs
                .iter()
                .map(|(a, c)| (a.to_string(), c.to_string()))
                .collect(),
        }
    }

    pub fn canonical<'a>(&'a self, spelling: &'a str) -> &'a str {
        self.aliases
            .get(spelling)
            .map(String::as_str)
            .unwrap_or(spelling)
    }

    /// Owned copy of every alias → canonical pair
    pub fn pairs(&self) -> HashMap<String, String> {
        self.aliases.clone()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Chromatic scale plus enharmonic aliases, read-only once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTables {
    scale: ChromaticScale,
    enharmonics: EnharmonicMap,
}

impl ReferenceTables {
    /// Pair a scale with an alias table, rejecting aliases that point outside it
    pub fn new(scale: ChromaticScale, enharmonics: EnharmonicMap) -> Result<Self> {
        enharmonics.check_targets(&scale)?;
        Ok(ReferenceTables { scale, enharmonics })
    }

    pub fn standard() -> Self {
        ReferenceTables {
            scale: ChromaticScale::standard(),
            enharmonics: EnharmonicMap::standard(),
        }
    }

    pub fn scale(&self) -> &ChromaticScale {
        &self.scale
    }

    pub fn enharmonics(&self) -> &EnharmonicMap {
        &self.enharmonics
    }

    /// Resolve any spelling to its canonical pitch
    ///
    /// Aliases are substituted first, then the result must match a scale entry
    /// exactly. Case and whitespace are significant.
    pub fn normalize(&self, spelling: &str) -> Result<Pitch> {
        let canonical = self.enharmonics.canonical(spelling);
        self.scale
            .index_of(canonical)
            .map(|index| self.scale.pitch_at(index as usize))
            .ok_or_else(|| FretboardError::invalid_note(spelling))
    }

    /// Pitch `semitones` above `pitch`
    pub fn transpose(&self, pitch: &Pitch, semitones: u32) -> Pitch {
        self.scale.pitch_at(pitch.offset_index(semitones))
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::standard()
    }
}
