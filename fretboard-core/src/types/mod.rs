// fretboard-core/src/types/mod.rs

pub mod fretboard;
pub mod library;
pub mod pitch;
pub mod role;
pub mod tables;

pub use fretboard::{NotePosition, Tuning, DEFAULT_FRET_COUNT};
pub use library::{PatternLibrary, CHORD, SCALE};
pub use pitch::{Pitch, SEMITONES};
pub use role::{classify, Role, RoleMap};
pub use tables::{ChromaticScale, EnharmonicMap, ReferenceTables};
