//! The fretboard engine: pattern resolution, note generation, and position
//! mapping over one immutable set of tables.

pub mod generator;
pub mod mapper;

pub use generator::{generate, note_names};
pub use mapper::{fretboard_grid, map_positions};

use crate::error::Result;
use crate::types::{
    classify, NotePosition, PatternLibrary, Pitch, ReferenceTables, RoleMap, Tuning,
};
use log::debug;

/// Reference tables and pattern library, built once and only read afterwards
///
/// Holds no interior mutability, so one engine can be shared across threads
/// behind a plain reference or an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    tables: ReferenceTables,
    library: PatternLibrary,
}

impl Engine {
    pub fn new(tables: ReferenceTables, library: PatternLibrary) -> Self {
        Engine { tables, library }
    }

    /// Sharp-spelled chromatic scale with the built-in chords and scales
    pub fn standard() -> Self {
        Self::new(ReferenceTables::standard(), PatternLibrary::standard())
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    pub fn normalize(&self, spelling: &str) -> Result<Pitch> {
        self.tables.normalize(spelling)
    }

    pub fn resolve(&self, category: &str, name: &str) -> Result<&[u32]> {
        self.library.resolve(category, name)
    }

    /// Notes of the pattern `(category, name)` rooted at `root`
    pub fn generate_notes(&self, root: &str, category: &str, name: &str) -> Result<Vec<Pitch>> {
        let root = self.normalize(root)?;
        let intervals = self.resolve(category, name)?;
        Ok(generate(&self.tables, &root, intervals))
    }

    pub fn map_positions(
        &self,
        notes: &[Pitch],
        tuning: &Tuning,
        fret_count: u32,
    ) -> Result<Vec<NotePosition>> {
        map_positions(&self.tables, notes, tuning, fret_count)
    }

    /// Generate, map and classify in one call
    pub fn diagram(
        &self,
        root: &str,
        category: &str,
        name: &str,
        tuning: &Tuning,
        fret_count: u32,
    ) -> Result<Diagram> {
        let notes = self.generate_notes(root, category, name)?;
        let positions = self.map_positions(&notes, tuning, fret_count)?;
        let roles = classify(&notes);

        debug!(
            "{} {} {}: {} notes, {} positions over {} strings x {} frets",
            root,
            name,
            category,
            notes.len(),
            positions.len(),
            tuning.len(),
            fret_count
        );

        Ok(Diagram {
            root: root.to_string(),
            category: category.to_string(),
            name: name.to_string(),
            tuning: tuning.clone(),
            fret_count,
            notes,
            roles,
            positions,
        })
    }
}

/// Everything a renderer needs for one chord or scale on one fretboard
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagram {
    /// Root as the caller spelled it
    pub root: String,
    pub category: String,
    pub name: String,
    pub tuning: Tuning,
    pub fret_count: u32,
    /// Generated pitches, root first, duplicates kept
    pub notes: Vec<Pitch>,
    pub roles: RoleMap,
    pub positions: Vec<NotePosition>,
}

impl Diagram {
    /// e.g. "C Major Chord"
    pub fn title(&self) -> String {
        format!("{} {} {}", self.root, self.name, self.category)
    }

    /// Positions on one string, fret ascending
    pub fn positions_on(&self, string: usize) -> impl Iterator<Item = &NotePosition> {
        self.positions.iter().filter(move |p| p.string == string)
    }

    /// The position at `(string, fret)`, if it sounds a pattern note
    pub fn position_at(&self, string: usize, fret: u32) -> Option<&NotePosition> {
        self.positions
            .iter()
            .find(|p| p.string == string && p.fret == fret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FretboardError;
    use crate::types::{Role, CHORD, SCALE};

    #[test]
    fn test_generate_notes_propagates_errors() {
        let engine = Engine::standard();
        assert_eq!(
            engine.generate_notes("H", CHORD, "Major"),
            Err(FretboardError::invalid_note("H"))
        );
        assert_eq!(
            engine.generate_notes("C", CHORD, "Locrian"),
            Err(FretboardError::unknown_pattern("Chord", "Locrian"))
        );
    }

    #[test]
    fn test_root_is_checked_before_pattern() {
        let engine = Engine::standard();
        let err = engine.generate_notes("H", "Nope", "Nope").unwrap_err();
        assert!(matches!(err, FretboardError::InvalidNote { .. }));
    }

    #[test]
    fn test_diagram_for_a_minor_pentatonic() {
        let engine = Engine::standard();
        let diagram = engine
            .diagram("A", SCALE, "Pentatonic Minor", &Tuning::standard(), 12)
            .unwrap();

        assert_eq!(note_names(&diagram.notes), vec!["A", "C", "D", "E", "G"]);
        assert_eq!(diagram.title(), "A Pentatonic Minor Scale");
        assert_eq!(diagram.roles.role_of("A"), Role::Root);
        assert_eq!(diagram.roles.role_of("G"), Role::Fifth);

        // Box one on the low E string
        let low_e: Vec<u32> = diagram.positions_on(0).map(|p| p.fret).collect();
        assert_eq!(low_e, vec![0, 3, 5, 8, 10, 12]);
        assert!(diagram.position_at(0, 1).is_none());
    }

    #[test]
    fn test_diagram_keeps_caller_root_spelling() {
        let engine = Engine::standard();
        let diagram = engine
            .diagram("Bb", CHORD, "Major", &Tuning::standard(), 12)
            .unwrap();
        assert_eq!(diagram.root, "Bb");
        assert_eq!(diagram.notes[0].name(), "A#");
    }
}
