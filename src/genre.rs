use std::fmt;
use std::str::FromStr;

use crate::clients::errors::{Error, Result};

/// A value of the genre picker. `Other` stands for free text typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenreChoice {
    Blues,
    HipHop,
    Jazz,
    Rock,
    Classical,
    Electronic,
    Pop,
    Other,
}

impl GenreChoice {
    /// Picker order.
    pub const ALL: [GenreChoice; 8] = [
        GenreChoice::Blues,
        GenreChoice::HipHop,
        GenreChoice::Jazz,
        GenreChoice::Rock,
        GenreChoice::Classical,
        GenreChoice::Electronic,
        GenreChoice::Pop,
        GenreChoice::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GenreChoice::Blues => "Blues",
            GenreChoice::HipHop => "Hip-Hop",
            GenreChoice::Jazz => "Jazz",
            GenreChoice::Rock => "Rock",
            GenreChoice::Classical => "Classical",
            GenreChoice::Electronic => "Electronic",
            GenreChoice::Pop => "Pop",
            GenreChoice::Other => "Other",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        GenreChoice::ALL.iter().map(|g| g.label()).collect()
    }
}

impl fmt::Display for GenreChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GenreChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        GenreChoice::ALL
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                Error::InvalidGenre(format!(
                    "'{wanted}' is not one of {}",
                    GenreChoice::labels().join(", ")
                ))
            })
    }
}

/// The genre actually sent to the model: never empty, never padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreSelection(String);

impl GenreSelection {
    pub fn new(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidGenre("genre must not be empty".into()));
        }
        Ok(GenreSelection(trimmed.to_string()))
    }

    /// Turn a picker value (plus the free-text box, for `Other`) into the
    /// effective genre.
    pub fn resolve(choice: GenreChoice, custom: Option<&str>) -> Result<Self> {
        match choice {
            GenreChoice::Other => GenreSelection::new(custom.unwrap_or_default()),
            listed => Ok(GenreSelection(listed.label().to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GenreSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
