// Left/right name symmetry for paired scene objects.
//
// Recognizes names that carry a side marker (`"Arm.L"`, `"L_Arm"`,
// `"Wing-Right"`) and answers the questions an editor or asset pipeline asks
// when pairing objects: is this name one half of a pair, what is its marker,
// what is the name without it, and what is the other half called.
//
// Architecture:
// - `tables.rs`: Side token pairs, separators, and the two mirror tables
//   (start-anchored and end-anchored), built once on first use
// - `query.rs`: Pure string queries over the tables (`is_symmetrical`,
//   `symmetrical_target`, ...)
// - `types.rs`: `Side`, `AfixPosition`, and the parsed `SymmetricalName`
// - `error.rs`: `SymmetryError` for the checked layer
// - `checked.rs`: JSON-value wrappers that reject non-string input
//   (`validate` feature only)
//
// Matching is case-sensitive and a suffix marker wins over a prefix marker.
// Nothing here allocates except `symmetrical_target` and
// `SymmetricalName::mirrored`.

#[cfg(feature = "validate")]
pub mod checked;
pub mod error;
pub mod query;
pub mod tables;
pub mod types;

// Re-export the query surface at crate root.
pub use error::SymmetryError;
pub use query::{
    is_symmetrical, symmetrical_afix, symmetrical_basename, symmetrical_prefix,
    symmetrical_side, symmetrical_split, symmetrical_suffix, symmetrical_target,
};
pub use types::{AfixPosition, Side, SymmetricalName};

/// Older spelling of [`symmetrical_afix`], kept for existing callers.
pub use query::symmetrical_afix as symmatrical_afix;
