use fretboard::cli::parse_tuning;
use fretboard::config::load_engine;
use fretboard::Engine;
use std::io::Write;
use std::path::Path;

fn shipped(file: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("config").join(file)
}

#[test]
fn test_shipped_config_matches_built_in_tables() {
    let notes = shipped("notes.yaml");
    let patterns = shipped("patterns.yaml");
    let engine = load_engine(Some(notes.as_path()), Some(patterns.as_path())).unwrap();
    assert_eq!(engine, Engine::standard());
}

#[test]
fn test_custom_files_drive_the_engine() {
    let mut notes = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        notes,
        r#"chromatic_scale: ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"]
enharmonic_equivalents:
  "C#": "Db"
  "A#": "Bb""#
    )
    .unwrap();

    let mut patterns = tempfile::NamedTempFile::new().unwrap();
    writeln!(patterns, "Chord:\n  Power: [0, 7, 12]").unwrap();

    let engine = load_engine(Some(notes.path()), Some(patterns.path())).unwrap();
    let diagram = engine
        .diagram("A#", "Chord", "Power", &parse_tuning("E, A").unwrap(), 5)
        .unwrap();

    let names: Vec<&str> = diagram.notes.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Bb", "F", "Bb"]);
    // E string reaches F at fret 1, A string reaches Bb at fret 1
    let cells: Vec<(usize, u32)> = diagram.positions.iter().map(|p| (p.string, p.fret)).collect();
    assert_eq!(cells, vec![(0, 1), (1, 1)]);
}

#[test]
fn test_missing_file_is_reported() {
    let err = load_engine(Some(Path::new("/nonexistent/notes.yaml")), None).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn test_json_output_shape() {
    let diagram = Engine::standard()
        .diagram("C", "Chord", "Major", &parse_tuning("E,A,D,G,B,E").unwrap(), 3)
        .unwrap();
    let json: serde_json::Value = serde_json::to_value(&diagram).unwrap();

    assert_eq!(json["tuning"], serde_json::json!(["E", "A", "D", "G", "B", "E"]));
    assert_eq!(json["roles"]["C"], "root");
    assert_eq!(json["notes"][1]["name"], "E");
    assert_eq!(json["positions"][0]["fret"], 0);
}
