use crate::error::{FretboardError, Result};
use std::collections::BTreeMap;

/// Pattern category holding chord definitions
pub const CHORD: &str = "Chord";
/// Pattern category holding scale definitions
pub const SCALE: &str = "Scale";

/// Named chords and scales as semitone offsets from the root
///
/// Keyed by category then name; both keys are exact, case-sensitive strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternLibrary {
    patterns: BTreeMap<String, BTreeMap<String, Vec<u32>>>,
}

impl PatternLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        PatternLibrary {
            patterns: BTreeMap::new(),
        }
    }

    /// Add or replace a pattern. Empty interval lists are rejected.
    pub fn insert(&mut self, category: &str, name: &str, intervals: Vec<u32>) -> Result<()> {
        if intervals.is_empty() {
            return Err(FretboardError::invalid_config(format!(
                "{} '{}' has no intervals",
                category, name
            )));
        }
        self.patterns
            .entry(category.to_string())
            .or_default()
            .insert(name.to_string(), intervals);
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, category: &str, name: &str, intervals: &[u32]) -> Result<Self> {
        self.insert(category, name, intervals.to_vec())?;
        Ok(self)
    }

    /// Common chords and scales under the `Chord` and `Scale` categories
    pub fn standard() -> Self {
        let chords: &[(&str, &[u32])] = &[
            ("Major", &[0, 4, 7]),
            ("Minor", &[0, 3, 7]),
            ("Diminished", &[0, 3, 6]),
            ("Augmented", &[0, 4, 8]),
            ("Sus2", &[0, 2, 7]),
            ("Sus4", &[0, 5, 7]),
            ("Major 7th", &[0, 4, 7, 11]),
            ("Minor 7th", &[0, 3, 7, 10]),
            ("Dominant 7th", &[0, 4, 7, 10]),
            ("Diminished 7th", &[0, 3, 6, 9]),
            ("Half-Diminished 7th", &[0, 3, 6, 10]),
        ];
        let scales: &[(&str, &[u32])] = &[
            ("Major", &[0, 2, 4, 5, 7, 9, 11]),
            ("Natural Minor", &[0, 2, 3, 5, 7, 8, 10]),
            ("Harmonic Minor", &[0, 2, 3, 5, 7, 8, 11]),
            ("Melodic Minor", &[0, 2, 3, 5, 7, 9, 11]),
            ("Pentatonic Major", &[0, 2, 4, 7, 9]),
            ("Pentatonic Minor", &[0, 3, 5, 7, 10]),
            ("Blues", &[0, 3, 5, 6, 7, 10]),
            ("Ionian", &[0, 2, 4, 5, 7, 9, 11]),
            ("Dorian", &[0, 2, 3, 5, 7, 9, 10]),
            ("Phrygian", &[0, 1, 3, 5, 7, 8, 10]),
            ("Lydian", &[0, 2, 4, 6, 7, 9, 11]),
            ("Mixolydian", &[0, 2, 4, 5, 7, 9, 10]),
            ("Aeolian", &[0, 2, 3, 5, 7, 8, 10]),
            ("Locrian", &[0, 1, 3, 5, 6, 8, 10]),
        ];

        let mut patterns = BTreeMap::new();
        for (category, entries) in [(CHORD, chords), (SCALE, scales)] {
            let named: BTreeMap<String, Vec<u32>> = entries
                .iter()
                .map(|(name, intervals)| (name.to_string(), intervals.to_vec()))
                .collect();
            patterns.insert(category.to_string(), named);
        }
        PatternLibrary { patterns }
    }

    /// Look up the ordered interval list for `(category, name)`
    pub fn resolve(&self, category: &str, name: &str) -> Result<&[u32]> {
        self.patterns
            .get(category)
            .and_then(|named| named.get(name))
            .map(Vec::as_slice)
            .ok_or_else(|| FretboardError::unknown_pattern(category, name))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    /// Pattern names within a category, empty if the category is absent
    pub fn names(&self, category: &str) -> Vec<&str> {
        self.patterns
            .get(category)
            .map(|named| named.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Every `(category, name, intervals)` triple in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &[u32])> {
        self.patterns.iter().flat_map(|(category, named)| {
            named
                .iter()
                .map(move |(name, intervals)| (category.as_str(), name.as_str(), intervals.as_slice()))
        })
    }

    /// Total number of patterns across all categories
    pub fn len(&self) -> usize {
        self.patterns.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_standard_patterns() {
        let library = PatternLibrary::standard();
        assert_eq!(library.resolve(CHORD, "Major").unwrap(), &[0, 4, 7]);
        assert_eq!(
            library.resolve(SCALE, "Pentatonic Minor").unwrap(),
            &[0, 3, 5, 7, 10]
        );
    }

    #[test]
    fn test_resolve_is_scoped_by_category() {
        let library = PatternLibrary::standard();
        assert!(library.resolve(SCALE, "Locrian").is_ok());
        assert_eq!(
            library.resolve(CHORD, "Locrian"),
            Err(FretboardError::unknown_pattern("Chord", "Locrian"))
        );
        assert!(library.resolve("Arpeggio", "Major").is_err());
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let library = PatternLibrary::standard();
        assert!(library.resolve("chord", "Major").is_err());
        assert!(library.resolve(CHORD, "major").is_err());
    }

    #[test]
    fn test_empty_intervals_rejected() {
        let mut library = PatternLibrary::new();
        assert!(matches!(
            library.insert(CHORD, "Nothing", vec![]),
            Err(FretboardError::InvalidConfig { .. })
        ));
        assert!(library.is_empty());
    }

    #[test]
    fn test_builder_and_listing() {
        let library = PatternLibrary::new()
            .with(CHORD, "Power", &[0, 7])
            .unwrap()
            .with(SCALE, "Whole Tone", &[0, 2, 4, 6, 8, 10])
            .unwrap();

        assert_eq!(library.len(), 2);
        assert_eq!(library.categories().collect::<Vec<_>>(), vec!["Chord", "Scale"]);
        assert_eq!(library.names(CHORD), vec!["Power"]);
        assert!(library.names("Arpeggio").is_empty());
    }

    #[test]
    fn test_standard_patterns_start_at_root() {
        for (category, name, intervals) in PatternLibrary::standard().iter() {
            assert_eq!(intervals[0], 0, "{} {} should start on the root", category, name);
        }
    }
}
