//! Place catalog subsystem.
//!
//! Loads place records from a JSON catalog file, validates each entry,
//! and falls back to a built-in dataset when no file is available.

pub mod builtin;
pub mod loader;
pub mod types;

pub use builtin::builtin_places;
pub use loader::{load, load_file, resolve_source, validate_entries, Catalog, CatalogSource, DEFAULT_CATALOG_PATH};
pub use types::{CatalogError, PlaceRecord, MIN_PLACES};
