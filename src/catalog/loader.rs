//! Catalog loading and validation.
//!
//! Individual bad entries never fail a load: they are dropped and
//! reported as per-entry problem strings, in input order. A catalog
//! with fewer than [`MIN_PLACES`] valid entries is a configuration
//! error, rejected before any round is dealt.

use super::builtin;
use super::types::{CatalogError, PlaceRecord, MIN_PLACES};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Relative default, the documented repo layout.
pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";

/// A validated, ordered set of places, guaranteed playable.
///
/// The constructor is the sole gate on catalog size; downstream code
/// (round selection in particular) relies on `len() >= MIN_PLACES`.
#[derive(Debug, Clone)]
pub struct Catalog {
    places: Vec<PlaceRecord>,
}

impl Catalog {
    /// Build a catalog from already-validated records. Fails fast when
    /// there are too few places to deal a three-option round.
    pub fn from_places(places: Vec<PlaceRecord>) -> Result<Self, CatalogError> {
        if places.len() < MIN_PLACES {
            return Err(CatalogError::TooSmall { found: places.len() });
        }
        Ok(Self { places })
    }

    pub fn places(&self) -> &[PlaceRecord] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

/// Where a catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Builtin,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Builtin => write!(f, "built-in dataset"),
        }
    }
}

/// Pick the catalog source.
///
/// Chain: explicit path → ./data/catalog.json → ~/.geoquiz/catalog.json
/// → built-in dataset. An explicit path is returned even if the file is
/// missing, so the user gets a hard error instead of a silent fallback.
pub fn resolve_source(explicit: Option<&Path>) -> CatalogSource {
    if let Some(path) = explicit {
        return CatalogSource::File(path.to_path_buf());
    }

    let local = PathBuf::from(DEFAULT_CATALOG_PATH);
    if local.exists() {
        return CatalogSource::File(local);
    }

    let user = user_catalog_path();
    if user.exists() {
        return CatalogSource::File(user);
    }

    CatalogSource::Builtin
}

fn user_catalog_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".geoquiz")
        .join("catalog.json")
}

/// Load a source into `(valid records, per-entry problems)`.
pub fn load(source: &CatalogSource) -> Result<(Vec<PlaceRecord>, Vec<String>), CatalogError> {
    match source {
        CatalogSource::File(path) => load_file(path),
        CatalogSource::Builtin => Ok((builtin::builtin_places(), Vec::new())),
    }
}

/// Read one catalog file and validate every entry.
pub fn load_file(path: &Path) -> Result<(Vec<PlaceRecord>, Vec<String>), CatalogError> {
    let shown = path.display().to_string();
    let data = fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: shown.clone(),
        message: e.to_string(),
    })?;
    let raw: Value = serde_json::from_str(&data).map_err(|e| CatalogError::Parse {
        path: shown.clone(),
        message: e.to_string(),
    })?;
    let entries = raw
        .as_array()
        .ok_or(CatalogError::NotAnArray { path: shown })?;
    Ok(validate_entries(entries))
}

/// Validate raw entries in order.
///
/// Checks, per entry: object shape, then `name`, `hint`, `coords`
/// presence. `name` and `hint` must be non-empty strings; `coords` must
/// be an array whose first two elements are numeric (extras ignored).
/// Each failing entry yields exactly one problem message.
pub fn validate_entries(entries: &[Value]) -> (Vec<PlaceRecord>, Vec<String>) {
    let mut valid = Vec::new();
    let mut problems = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        let obj = match entry.as_object() {
            Some(obj) => obj,
            None => {
                problems.push(format!("Entry {} is not an object.", i));
                continue;
            }
        };

        let mut missing: Vec<&str> = Vec::new();

        let name = match obj.get("name").and_then(Value::as_str) {
            Some(s) if !s.is_empty() => Some(s),
            _ => {
                missing.push("name");
                None
            }
        };
        let hint = match obj.get("hint").and_then(Value::as_str) {
            Some(s) if !s.is_empty() => Some(s),
            _ => {
                missing.push("hint");
                None
            }
        };
        let coords = match obj.get("coords") {
            None => {
                missing.push("coords");
                None
            }
            Some(value) => match parse_coords(value) {
                Some(pair) => Some(pair),
                None => {
                    missing.push("coords (invalid format)");
                    None
                }
            },
        };

        if let (Some(name), Some(hint), Some(coords)) = (name, hint, coords) {
            valid.push(PlaceRecord {
                name: name.to_string(),
                hint: hint.to_string(),
                coords,
            });
        } else {
            let label = obj.get("name").and_then(Value::as_str).unwrap_or("<no-name>");
            problems.push(format!(
                "Entry {} ('{}') missing: {}",
                i,
                label,
                missing.join(", ")
            ));
        }
    }

    (valid, problems)
}

fn parse_coords(value: &Value) -> Option<[f64; 2]> {
    let list = value.as_array()?;
    if list.len() < 2 {
        return None;
    }
    let lat = list[0].as_f64()?;
    let lon = list[1].as_f64()?;
    Some([lat, lon])
}
