//! # Fretboard Core
//!
//! WASM-compatible engine that resolves chords and scales to pitches and maps
//! them onto a stringed-instrument fretboard of any tuning and fret count.
//! Pure computation only: no rendering, file access, or user input.
//!
//! ## Features
//!
//! - **serde**: Serialization for results and deserializable config shapes
//! - **wasm**: Enable WASM bindings via wasm-bindgen
//! - **colored**: Terminal colours per note role (disabled in WASM)
//!
//! ## Example
//!
//! ```
//! use fretboard_core::{Engine, Tuning};
//!
//! let engine = Engine::standard();
//! let diagram = engine.diagram("C", "Chord", "Major", &Tuning::standard(), 12)?;
//! assert_eq!(diagram.notes.len(), 3);
//! # Ok::<(), fretboard_core::FretboardError>(())
//! ```

#[cfg(feature = "serde")]
pub mod config;
pub mod engine;
pub mod error;
pub mod types;
pub mod wasm;

// Re-export commonly used types
pub use engine::{Diagram, Engine};
pub use error::FretboardError;
pub use types::{
    NotePosition, PatternLibrary, Pitch, ReferenceTables, Role, RoleMap, Tuning,
    DEFAULT_FRET_COUNT,
};
