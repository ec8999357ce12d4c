//! Loading reference tables and pattern libraries from YAML files

use anyhow::{Context, Result};
use fretboard_core::config::{NotesConfig, PatternsConfig};
use fretboard_core::{Engine, PatternLibrary, ReferenceTables};
use log::info;
use std::fs;
use std::path::Path;

/// Parse a notes file (`chromatic_scale`, `enharmonic_equivalents`)
pub fn parse_notes(source: &str) -> Result<ReferenceTables> {
    let config: NotesConfig = serde_yaml::from_str(source).context("Invalid notes YAML")?;
    Ok(ReferenceTables::try_from(config)?)
}

/// Parse a patterns file (category -> name -> semitone offsets)
pub fn parse_patterns(source: &str) -> Result<PatternLibrary> {
    let config: PatternsConfig = serde_yaml::from_str(source).context("Invalid patterns YAML")?;
    Ok(PatternLibrary::try_from(config)?)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Build the engine from the given files, using built-in tables for any that are missing
pub fn load_engine(notes: Option<&Path>, patterns: Option<&Path>) -> Result<Engine> {
    let tables = match notes {
        Some(path) => {
            info!("Loading notes from {}", path.display());
            parse_notes(&read(path)?).with_context(|| format!("In {}", path.display()))?
        }
        None => {
            info!("Using built-in chromatic scale and enharmonics");
            ReferenceTables::standard()
        }
    };

    let library = match patterns {
        Some(path) => {
            info!("Loading patterns from {}", path.display());
            parse_patterns(&read(path)?).with_context(|| format!("In {}", path.display()))?
        }
        None => {
            info!("Using built-in pattern library");
            PatternLibrary::standard()
        }
    };

    Ok(Engine::new(tables, library))
}
