//! # Fretboard
//!
//! Command-line front end for `fretboard-core`: loads the note and pattern
//! tables, runs one chord or scale query, and prints the positions as a text
//! fretboard or as JSON.
//!
//! ## Modules
//!
//! - `cli`: Argument definitions and tuning parsing.
//! - `config`: YAML loading of reference tables and pattern libraries, with
//!   the built-in tables as fallback.
//! - `render`: Coloured text output of diagrams and the pattern listing.

pub mod cli;
pub mod config;
pub mod render;

// Re-export the engine types the binary works with
pub use fretboard_core::{Diagram, Engine, FretboardError, Tuning};
