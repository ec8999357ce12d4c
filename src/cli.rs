//! Command-line arguments for the `fretboard` binary

use anyhow::{anyhow, Result};
use clap::Parser;
use fretboard_core::{Tuning, DEFAULT_FRET_COUNT};
use std::path::PathBuf;

/// Show where a chord or scale falls on a fretboard
#[derive(Debug, Parser)]
#[command(name = "fretboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root note (e.g. C, F#, Bb)
    #[arg(required_unless_present = "list")]
    pub root: Option<String>,

    /// Pattern category ("Chord" or "Scale")
    #[arg(required_unless_present = "list")]
    pub category: Option<String>,

    /// Pattern name (e.g. "Major", "Minor 7th", "Pentatonic Minor")
    #[arg(required_unless_present = "list")]
    pub name: Option<String>,

    /// Comma-separated open strings, lowest first
    #[arg(default_value = "E,A,D,G,B,E")]
    pub tuning: String,

    /// Number of frets to show
    #[arg(default_value_t = DEFAULT_FRET_COUNT)]
    pub frets: u32,

    /// YAML file with `chromatic_scale` and `enharmonic_equivalents`
    #[arg(long)]
    pub notes: Option<PathBuf>,

    /// YAML file mapping category -> pattern name -> semitone offsets
    #[arg(long)]
    pub patterns: Option<PathBuf>,

    /// Print every available pattern and exit
    #[arg(long)]
    pub list: bool,

    /// Output the diagram as JSON (no colored output)
    #[arg(long)]
    pub json: bool,
}

/// Query fields once `--list` has been ruled out
pub struct Query<'a> {
    pub root: &'a str,
    pub category: &'a str,
    pub name: &'a str,
}

impl Cli {
    pub fn query(&self) -> Result<Query<'_>> {
        match (&self.root, &self.category, &self.name) {
            (Some(root), Some(category), Some(name)) => Ok(Query {
                root,
                category,
                name,
            }),
            _ => Err(anyhow!("Root, category and name are required")),
        }
    }
}

/// Split "E, A, D" into a tuning, trimming entries and dropping empty ones
pub fn parse_tuning(input: &str) -> Result<Tuning> {
    let strings: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    Ok(Tuning::new(strings)?)
}
