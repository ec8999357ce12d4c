//! Fretboard mapping: which (string, fret) coordinates sound a pitch from a
//! generated note set.

use crate::error::Result;
use crate::types::{NotePosition, Pitch, ReferenceTables, Tuning};
use log::trace;
use std::collections::HashSet;

/// Pitch sounded at every fret `0..=fret_count` of every string
///
/// Outer index is the string (tuning order), inner index is the fret. Every
/// open string is normalized before anything is computed, so one bad tuning
/// entry fails the whole call.
pub fn fretboard_grid(
    tables: &ReferenceTables,
    tuning: &Tuning,
    fret_count: u32,
) -> Result<Vec<Vec<Pitch>>> {
    let open_strings = tuning
        .strings()
        .iter()
        .map(|spelling| tables.normalize(spelling))
        .collect::<Result<Vec<_>>>()?;

    Ok(open_strings
        .iter()
        .enumerate()
        .map(|(string, open)| {
            trace!("string {} open at {} (index {})", string, open, open.index());
            (0..=fret_count)
                .map(|fret| tables.transpose(open, fret))
                .collect()
        })
        .collect())
}

/// Every position whose pitch name is a member of `notes`
///
/// Positions come out string-major (tuning order) and fret-minor (ascending
/// from the open string). No match is an empty vector, not an error.
pub fn map_positions(
    tables: &ReferenceTables,
    notes: &[Pitch],
    tuning: &Tuning,
    fret_count: u32,
) -> Result<Vec<NotePosition>> {
    let wanted: HashSet<&str> = notes.iter().map(Pitch::name).collect();
    let grid = fretboard_grid(tables, tuning, fret_count)?;

    let mut positions = Vec::new();
    for (string, frets) in grid.into_iter().enumerate() {
        for (fret, pitch) in frets.into_iter().enumerate() {
            if wanted.contains(pitch.name()) {
                positions.push(NotePosition::new(fret as u32, string, pitch));
            }
        }
    }
    Ok(positions)
}
