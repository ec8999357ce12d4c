use crate::types::pitch::Pitch;
#[cfg(feature = "colored")]
use colored::*;
use std::collections::BTreeMap;
use std::fmt;

/// Ordinal role of a generated note, used for presentation
///
/// Assigned by list position, not by interval size: the third entry of a
/// pattern is `Third` whether it sits a minor or a major third above the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    Root,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Other,
}

impl Role {
    /// Role for the note at `position` in a generated sequence
    pub fn for_position(position: usize) -> Role {
        match position {
            0 => Role::Root,
            1 => Role::Second,
            2 => Role::Third,
            3 => Role::Fourth,
            4 => Role::Fifth,
            5 => Role::Sixth,
            6 => Role::Seventh,
            _ => Role::Other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Root => "root",
            Role::Second => "second",
            Role::Third => "third",
            Role::Fourth => "fourth",
            Role::Fifth => "fifth",
            Role::Sixth => "sixth",
            Role::Seventh => "seventh",
            Role::Other => "other",
        }
    }

    /// Terminal colouring for a label carrying this role
    #[cfg(feature = "colored")]
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            Role::Root => text.bright_red().bold(),
            Role::Second => text.yellow(),
            Role::Third => text.bright_blue().bold(),
            Role::Fourth => text.magenta(),
            Role::Fifth => text.bright_green().bold(),
            Role::Sixth => text.cyan(),
            Role::Seventh => text.bright_magenta(),
            Role::Other => text.white(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Pitch → role lookup built from a generated note sequence
///
/// Keyed by canonical name, which identifies a pitch class one-to-one within
/// one set of reference tables. When a pitch occurs at several positions the
/// last one wins; callers that need a role per occurrence should use
/// [`Role::for_position`] directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RoleMap {
    roles: BTreeMap<String, Role>,
}

impl RoleMap {
    pub fn get(&self, pitch: &Pitch) -> Option<Role> {
        self.roles.get(pitch.name()).copied()
    }

    /// Role for a display name, `Other` when the name was never classified
    pub fn role_of(&self, name: &str) -> Role {
        self.roles.get(name).copied().unwrap_or(Role::Other)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// `(name, role)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Role)> {
        self.roles.iter().map(|(name, role)| (name.as_str(), *role))
    }
}

/// Assign each note its positional role
pub fn classify(notes: &[Pitch]) -> RoleMap {
    let mut roles = BTreeMap::new();
    for (position, pitch) in notes.iter().enumerate() {
        // Later occurrences overwrite earlier ones
        roles.insert(pitch.name().to_string(), Role::for_position(position));
    }
    RoleMap { roles }
}
