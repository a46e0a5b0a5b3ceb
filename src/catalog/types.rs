//! Core types for the place catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum number of valid places needed to deal a three-option round.
pub const MIN_PLACES: usize = 3;

/// One geographic entity the player can be quizzed on.
///
/// `coords` is `[lat, lon]`, matching the catalog file format so a
/// serialized record reloads verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: String,
    pub hint: String,
    pub coords: [f64; 2],
}

impl PlaceRecord {
    pub fn lat(&self) -> f64 {
        self.coords[0]
    }

    pub fn lon(&self) -> f64 {
        self.coords[1]
    }
}

/// Catalog loading errors. Per-entry validation problems are NOT errors;
/// they are returned alongside the valid records as warning strings.
#[derive(Debug)]
pub enum CatalogError {
    Io { path: String, message: String },
    Parse { path: String, message: String },
    NotAnArray { path: String },
    TooSmall { found: usize },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "Cannot read catalog '{}': {}", path, message)
            }
            Self::Parse { path, message } => {
                write!(f, "Catalog '{}' is not valid JSON: {}", path, message)
            }
            Self::NotAnArray { path } => {
                write!(f, "Catalog '{}' must be a JSON array of place objects", path)
            }
            Self::TooSmall { found } => write!(
                f,
                "Catalog has {} valid place(s); at least {} are required to deal a round",
                found, MIN_PLACES
            ),
        }
    }
}

impl std::error::Error for CatalogError {}
