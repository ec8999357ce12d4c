use std::fmt;

/// Failures reported by the fretboard engine.
///
/// Validation failures are never transient, so callers get exactly one of
/// these per failed query and no partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FretboardError {
    /// A note spelling that is neither in the chromatic scale nor an enharmonic alias
    InvalidNote { spelling: String },
    /// No pattern with this name under this category
    UnknownPattern { category: String, name: String },
    /// A tuning must have at least one string
    EmptyTuning,
    /// Reference tables or pattern library break an invariant
    InvalidConfig { message: String },
}

impl FretboardError {
    pub fn invalid_note(spelling: &str) -> Self {
        FretboardError::InvalidNote {
            spelling: spelling.to_string(),
        }
    }

    pub fn unknown_pattern(category: &str, name: &str) -> Self {
        FretboardError::UnknownPattern {
            category: category.to_string(),
            name: name.to_string(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        FretboardError::InvalidConfig {
            message: message.into(),
        }
    }
}

impl fmt::Display for FretboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FretboardError::InvalidNote { spelling } => {
                write!(f, "Invalid note: '{}'", spelling)
            }
            FretboardError::UnknownPattern { category, name } => {
                write!(f, "Unknown pattern: {} '{}'", category, name)
            }
            FretboardError::EmptyTuning => write!(f, "Tuning must have at least one string"),
            FretboardError::InvalidConfig { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
        }
    }
}

impl std::error::Error for FretboardError {}

pub type Result<T> = std::result::Result<T, FretboardError>;
