//! Plain-text fretboard output for the terminal

use colored::*;
use fretboard_core::{Diagram, Role};

const CELL_WIDTH: usize = 4;

/// Title, note list and fretboard grid, ready to print
pub fn render(diagram: &Diagram) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", diagram.title().bold()));
    out.push_str(&render_notes(diagram));
    out.push('\n');
    out.push_str(&render_grid(diagram));
    out
}

/// One line listing each generated note with its positional role
pub fn render_notes(diagram: &Diagram) -> String {
    let labels: Vec<String> = diagram
        .notes
        .iter()
        .enumerate()
        .map(|(i, pitch)| {
            let role = Role::for_position(i);
            format!("{} ({})", role.paint(pitch.name()), role)
        })
        .collect();
    format!("Notes: {}\n", labels.join(", "))
}

/// Fret numbers across the top, then one row per string with the highest
/// string first, the way a fretboard diagram is read
pub fn render_grid(diagram: &Diagram) -> String {
    let strings = diagram.tuning.strings();
    let label_width = strings.iter().map(|s| s.len()).max().unwrap_or(1);

    let mut out = String::new();
    out.push_str(&" ".repeat(label_width + 1));
    for fret in 0..=diagram.fret_count {
        out.push_str(&format!("{:^width$}", fret, width = CELL_WIDTH));
    }
    out.push('\n');

    for (string, open) in strings.iter().enumerate().rev() {
        out.push_str(&format!("{:>width$} ", open, width = label_width));
        for fret in 0..=diagram.fret_count {
            let cell = match diagram.position_at(string, fret) {
                Some(position) => {
                    let name = position.pitch.name();
                    let role = diagram.roles.role_of(name);
                    role.paint(&pad(name)).to_string()
                }
                None => pad("-"),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

fn pad(text: &str) -> String {
    format!("{:^width$}", text, width = CELL_WIDTH)
}

/// `Category: name [offsets]` lines for `--list`
pub fn render_library(engine: &fretboard_core::Engine) -> String {
    let mut out = String::new();
    for category in engine.library().categories() {
        out.push_str(&format!("{}\n", category.green()));
        for name in engine.library().names(category) {
            let intervals = engine
                .library()
                .resolve(category, name)
                .map(|i| format!("{:?}", i))
                .unwrap_or_default();
            out.push_str(&format!("  {:<22} {}\n", name.cyan(), intervals));
        }
    }
    out
}
