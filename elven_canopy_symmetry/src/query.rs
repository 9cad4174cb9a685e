// Symmetry queries over names: detect a left/right marker, strip it, split
// around it, or produce the mirrored name.
//
// All functions are pure and return `""` when the name carries no marker.
// A suffix marker always takes priority over a prefix marker, so a name like
// `"L_Arm_R"` is treated as the right-side `"L_Arm"`.
//
// Stripping uses slice semantics: `symmetrical_basename("L_Hand")` is
// `"Hand"`. Older tooling returned only the first character after a prefix
// marker (`"H"`); that behavior is not reproduced.
//
// See `tables.rs` for marker lookup order and `types.rs` for the structured
// `SymmetricalName` form.

use crate::tables::{end_anchored, start_anchored};
use crate::types::{Side, SymmetricalName};

/// Whether `name` carries a left/right marker at either end.
pub fn is_symmetrical(name: &str) -> bool {
    end_anchored().iter().any(|(key, _)| name.ends_with(key))
        || start_anchored().iter().any(|(key, _)| name.starts_with(key))
}

/// The prefix marker of `name` (e.g. `"L_"` for `"L_Hand"`), or `""`.
pub fn symmetrical_prefix(name: &str) -> &'static str {
    start_anchored().first_prefix_of(name).unwrap_or("")
}

/// The suffix marker of `name` (e.g. `"_l"` for `"Hand_l"`), or `""`.
pub fn symmetrical_suffix(name: &str) -> &'static str {
    end_anchored().first_suffix_of(name).unwrap_or("")
}

/// The suffix marker if there is one, otherwise the prefix marker, or `""`.
pub fn symmetrical_afix(name: &str) -> &'static str {
    match symmetrical_suffix(name) {
        "" => symmetrical_prefix(name),
        suffix => suffix,
    }
}

/// `name` with its marker removed, or `""` if it has none.
pub fn symmetrical_basename(name: &str) -> &str {
    SymmetricalName::parse(name).map_or("", |parsed| parsed.base)
}

/// Split `name` into `(prefix, base, suffix)`. At most one of prefix and
/// suffix is non-empty. An unmarked name comes back as `("", name, "")`.
pub fn symmetrical_split(name: &str) -> (&'static str, &str, &'static str) {
    let suffix = symmetrical_suffix(name);
    if !suffix.is_empty() {
        return ("", &name[..name.len() - suffix.len()], suffix);
    }
    let prefix = symmetrical_prefix(name);
    if !prefix.is_empty() {
        return (prefix, &name[prefix.len()..], "");
    }
    ("", name, "")
}

/// The name of the opposite-side counterpart (`"Arm.L"` -> `"Arm.R"`), or an
/// empty string if `name` has no marker.
pub fn symmetrical_target(name: &str) -> String {
    SymmetricalName::parse(name)
        .map(|parsed| parsed.mirrored())
        .unwrap_or_default()
}

/// Which side `name` belongs to, if it carries a marker.
pub fn symmetrical_side(name: &str) -> Option<Side> {
    SymmetricalName::parse(name).map(|parsed| parsed.side)
}
