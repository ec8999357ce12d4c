//! Note generation: a root pitch plus an interval list becomes an ordered
//! sequence of pitch names.

use crate::types::{Pitch, ReferenceTables};

/// Apply each interval to `root`, wrapping modulo 12
///
/// Order follows `intervals` and nothing is deduplicated: two offsets that
/// reduce to the same pitch class both appear.
pub fn generate(tables: &ReferenceTables, root: &Pitch, intervals: &[u32]) -> Vec<Pitch> {
    intervals
        .iter()
        .map(|&interval| tables.transpose(root, interval))
        .collect()
}

/// Display names of a generated sequence, in order
pub fn note_names(notes: &[Pitch]) -> Vec<&str> {
    notes.iter().map(Pitch::name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_major_triad() {
        let tables = ReferenceTables::standard();
        let c = tables.normalize("C").unwrap();
        let notes = generate(&tables, &c, &[0, 4, 7]);
        assert_eq!(note_names(&notes), vec!["C", "E", "G"]);
    }

    #[test]
    fn test_wraps_past_last_index() {
        let tables = ReferenceTables::standard();
        let b = tables.normalize("B").unwrap();
        let notes = generate(&tables, &b, &[0, 4, 7]);
        assert_eq!(note_names(&notes), vec!["B", "D#", "F#"]);
    }

    #[test]
    fn test_keeps_duplicates_and_order() {
        let tables = ReferenceTables::standard();
        let a = tables.normalize("A").unwrap();
        // Root, octave, fifth, root two octaves up
        let notes = generate(&tables, &a, &[0, 12, 7, 24]);
        assert_eq!(note_names(&notes), vec!["A", "A", "E", "A"]);
    }

    #[test]
    fn test_compound_intervals_reduce() {
        let tables = ReferenceTables::standard();
        let c = tables.normalize("C").unwrap();
        // Add9: 14 semitones is a D
        let notes = generate(&tables, &c, &[0, 4, 7, 14]);
        assert_eq!(notes[3].name(), "D");
    }

    #[test]
    fn test_empty_intervals_give_empty_sequence() {
        let tables = ReferenceTables::standard();
        let c = tables.normalize("C").unwrap();
        assert!(generate(&tables, &c, &[]).is_empty());
    }
}
