//! WASM bindings for fretboard-core
//!
//! Exposes the standard engine to JavaScript. Results are plain objects built
//! with serde-wasm-bindgen; failures come back as `{ "error": { ... } }`.

#[cfg(feature = "wasm")]
use crate::engine::{Diagram, Engine};
#[cfg(feature = "wasm")]
use crate::types::{Pitch, DEFAULT_FRET_COUNT};
#[cfg(feature = "wasm")]
use std::sync::OnceLock;
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::error::{FretboardError, Result};
use crate::types::{PatternLibrary, Tuning};
use std::fmt::Debug;

/// One library entry for pattern pickers
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternItem {
    pub category: String,
    pub name: String,
    pub intervals: Vec<u32>,
}

/// Flatten a library into picker entries, category then name order
pub fn pattern_items(library: &PatternLibrary) -> Vec<PatternItem> {
    library
        .iter()
        .map(|(category, name, intervals)| PatternItem {
            category: category.to_string(),
            name: name.to_string(),
            intervals: intervals.to_vec(),
        })
        .collect()
}

/// Build a tuning from loosely typed entries, failing on the first entry
/// that is not a string
pub fn tuning_from_entries<T, F>(
    entries: impl IntoIterator<Item = T>,
    as_string: F,
) -> Result<Tuning>
where
    T: Debug,
    F: Fn(&T) -> Option<String>,
{
    let strings = entries
        .into_iter()
        .map(|entry| {
            as_string(&entry).ok_or_else(|| FretboardError::invalid_note(&format!("{:?}", entry)))
        })
        .collect::<Result<Vec<String>>>()?;
    Tuning::new(strings)
}

// ============================================================================
// WASM Bindings
// ============================================================================

#[cfg(feature = "wasm")]
static ENGINE: OnceLock<Engine> = OnceLock::new();

#[cfg(feature = "wasm")]
fn standard_engine() -> &'static Engine {
    ENGINE.get_or_init(Engine::standard)
}

#[cfg(feature = "wasm")]
fn error_value(error: &FretboardError) -> JsValue {
    serde_wasm_bindgen::to_value(&serde_json::json!({
        "error": error,
        "message": error.to_string(),
    }))
    .unwrap_or(JsValue::NULL)
}

#[cfg(feature = "wasm")]
fn tuning_from_array(strings: &js_sys::Array) -> Result<Tuning> {
    tuning_from_entries(strings.iter(), JsValue::as_string)
}

/// Notes of a chord or scale, e.g. `generate_notes("A", "Scale", "Dorian")`
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn generate_notes(root: &str, category: &str, name: &str) -> JsValue {
    match standard_engine().generate_notes(root, category, name) {
        Ok(notes) => serde_wasm_bindgen::to_value(&notes).unwrap_or(JsValue::NULL),
        Err(e) => error_value(&e),
    }
}

/// Full diagram for a tuning given as an array of strings.
/// A negative `frets` falls back to the default of 12.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn fretboard_diagram(
    root: &str,
    category: &str,
    name: &str,
    tuning: js_sys::Array,
    frets: i32,
) -> JsValue {
    let fret_count = u32::try_from(frets).unwrap_or(DEFAULT_FRET_COUNT);
    let result: Result<Diagram> = tuning_from_array(&tuning).and_then(|tuning| {
        standard_engine().diagram(root, category, name, &tuning, fret_count)
    });

    match result {
        Ok(diagram) => serde_wasm_bindgen::to_value(&diagram).unwrap_or(JsValue::NULL),
        Err(e) => error_value(&e),
    }
}

/// Canonical pitch for a spelling, e.g. "Bb" -> { index: 10, name: "A#" }
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn normalize_note(spelling: &str) -> JsValue {
    let result: Result<Pitch> = standard_engine().normalize(spelling);
    match result {
        Ok(pitch) => serde_wasm_bindgen::to_value(&pitch).unwrap_or(JsValue::NULL),
        Err(e) => error_value(&e),
    }
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn list_patterns() -> JsValue {
    serde_wasm_bindgen::to_value(&pattern_items(standard_engine().library()))
        .unwrap_or(JsValue::NULL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CHORD, SCALE};

    #[test]
    fn test_pattern_items_cover_library() {
        let library = PatternLibrary::standard();
        let items = pattern_items(&library);

        assert_eq!(items.len(), library.len());
        assert!(items
            .iter()
            .any(|i| i.category == CHORD && i.name == "Major" && i.intervals == vec![0, 4, 7]));
        assert!(items.iter().any(|i| i.category == SCALE && i.name == "Locrian"));
    }

    fn json_string(value: &serde_json::Value) -> Option<String> {
        value.as_str().map(String::from)
    }

    #[test]
    fn test_tuning_entries_must_all_be_strings() {
        let entries = vec![
            serde_json::json!("E"),
            serde_json::json!(5),
            serde_json::json!("D"),
        ];
        let err = tuning_from_entries(entries, json_string).unwrap_err();
        assert!(matches!(err, FretboardError::InvalidNote { .. }));
    }

    #[test]
    fn test_tuning_from_string_entries() {
        let entries = vec![serde_json::json!("D"), serde_json::json!("A")];
        let tuning = tuning_from_entries(entries, json_string).unwrap();
        assert_eq!(tuning.strings(), &["D".to_string(), "A".to_string()][..]);

        let empty: Vec<serde_json::Value> = Vec::new();
        assert_eq!(
            tuning_from_entries(empty, json_string),
            Err(FretboardError::EmptyTuning)
        );
    }

    #[test]
    fn test_pattern_items_grouped_by_category() {
        let items = pattern_items(&PatternLibrary::standard());
        let first_scale = items.iter().position(|i| i.category == SCALE).unwrap();
        assert!(items[..first_scale].iter().all(|i| i.category == CHORD));
    }
}
