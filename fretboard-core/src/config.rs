//! Deserializable shapes of the reference-table and pattern files
//!
//! Only the data layout lives here; reading files is left to the caller.
//! Conversions validate the same invariants as the programmatic constructors.

use crate::engine::Engine;
use crate::error::{FretboardError, Result};
use crate::types::{ChromaticScale, EnharmonicMap, PatternLibrary, ReferenceTables};
use std::collections::{BTreeMap, HashMap};

/// `chromatic_scale` and `enharmonic_equivalents` as they appear in a notes file
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NotesConfig {
    pub chromatic_scale: Vec<String>,
    #[serde(default)]
    pub enharmonic_equivalents: HashMap<String, String>,
}

/// Category → pattern name → semitone offsets
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PatternsConfig {
    pub categories: BTreeMap<String, BTreeMap<String, Vec<u32>>>,
}

impl TryFrom<NotesConfig> for ReferenceTables {
    type Error = FretboardError;

    fn try_from(config: NotesConfig) -> Result<Self> {
        let scale = ChromaticScale::new(config.chromatic_scale)?;
        let enharmonics = EnharmonicMap::new(config.enharmonic_equivalents, &scale)?;
        ReferenceTables::new(scale, enharmonics)
    }
}

impl TryFrom<PatternsConfig> for PatternLibrary {
    type Error = FretboardError;

    fn try_from(config: PatternsConfig) -> Result<Self> {
        let mut library = PatternLibrary::new();
        for (category, named) in config.categories {
            for (name, intervals) in named {
                library.insert(&category, &name, intervals)?;
            }
        }
        Ok(library)
    }
}

impl From<&ReferenceTables> for NotesConfig {
    fn from(tables: &ReferenceTables) -> Self {
        let scale = tables.scale();
        NotesConfig {
            chromatic_scale: scale.names().to_vec(),
            enharmonic_equivalents: tables.enharmonics().pairs(),
        }
    }
}

impl From<&PatternLibrary> for PatternsConfig {
    fn from(library: &PatternLibrary) -> Self {
        let mut categories: BTreeMap<String, BTreeMap<String, Vec<u32>>> = BTreeMap::new();
        for (category, name, intervals) in library.iter() {
            categories
                .entry(category.to_string())
                .or_default()
                .insert(name.to_string(), intervals.to_vec());
        }
        PatternsConfig { categories }
    }
}

impl Engine {
    /// Validate both configs and build an engine from them
    pub fn from_config(notes: NotesConfig, patterns: PatternsConfig) -> Result<Self> {
        Ok(Engine::new(notes.try_into()?, patterns.try_into()?))
    }
}
