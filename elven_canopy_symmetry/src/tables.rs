// Affix lookup tables: the fixed left/right token pairs, the separators that
// attach them to a name, and the two mirror tables built from them.
//
// Each table maps a marker to its mirrored counterpart:
// - start-anchored: `"{token}{sep}" -> "{counterpart}{sep}"`, matched against
//   the start of a name (`"L_Clavicle"` starts with `"L_"`).
// - end-anchored: `"{sep}{token}" -> "{sep}{counterpart}"`, matched against
//   the end of a name (`"Clavicle.L"` ends with `".L"`).
//
// Iteration order is the insertion order of the pair x separator cross
// product: pairs outer (in `AFIX_PAIRS` order), separators inner (in
// `AFIX_SEPARATORS` order). First-match lookups in `query.rs` depend on it.
//
// Both tables are built once on first use and never mutated afterwards.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Characters that may join a side token to the rest of a name.
pub const AFIX_SEPARATORS: [char; 4] = ['.', ' ', '-', '_'];

/// Ordered (token, counterpart) pairs. Listed in both directions so a lookup
/// from either side finds its mirror.
pub const AFIX_PAIRS: [(&str, &str); 10] = [
    ("l", "r"),
    ("r", "l"),
    ("L", "R"),
    ("R", "L"),
    ("left", "right"),
    ("right", "left"),
    ("Left", "Right"),
    ("Right", "Left"),
    ("LEFT", "RIGHT"),
    ("RIGHT", "LEFT"),
];

/// An insertion-ordered marker -> mirrored-marker table.
#[derive(Debug, Clone)]
pub struct AfixTable {
    entries: IndexMap<String, String>,
}

impl AfixTable {
    /// Build a table by applying `join(token, sep)` to both halves of every
    /// pair, for every separator.
    fn build(join: impl Fn(&str, char) -> String) -> Self {
        let mut entries = IndexMap::with_capacity(AFIX_PAIRS.len() * AFIX_SEPARATORS.len());
        for (token, counterpart) in AFIX_PAIRS {
            for sep in AFIX_SEPARATORS {
                entries.insert(join(token, sep), join(counterpart, sep));
            }
        }
        AfixTable { entries }
    }

    /// Number of markers in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The mirrored counterpart of `marker`, if it is in the table.
    pub fn get(&self, marker: &str) -> Option<&str> {
        self.entries.get(marker).map(String::as_str)
    }

    /// (marker, mirrored marker) pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// The first marker in table order that `name` starts with.
    pub fn first_prefix_of(&self, name: &str) -> Option<&str> {
        self.entries
            .keys()
            .find(|key| name.starts_with(key.as_str()))
            .map(String::as_str)
    }

    /// The first marker in table order that `name` ends with.
    pub fn first_suffix_of(&self, name: &str) -> Option<&str> {
        self.entries
            .keys()
            .find(|key| name.ends_with(key.as_str()))
            .map(String::as_str)
    }
}

static START_ANCHORED: Lazy<AfixTable> = Lazy::new(|| {
    let table = AfixTable::build(|token, sep| format!("{token}{sep}"));
    tracing::trace!(entries = table.len(), "built start-anchored symmetry table");
    table
});

static END_ANCHORED: Lazy<AfixTable> = Lazy::new(|| {
    let table = AfixTable::build(|token, sep| format!("{sep}{token}"));
    tracing::trace!(entries = table.len(), "built end-anchored symmetry table");
    table
});

/// Table of `"{token}{sep}"` markers, matched at the start of a name.
pub fn start_anchored() -> &'static AfixTable {
    &START_ANCHORED
}

/// Table of `"{sep}{token}"` markers, matched at the end of a name.
pub fn end_anchored() -> &'static AfixTable {
    &END_ANCHORED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_cover_cross_product() {
        let expected = AFIX_PAIRS.len() * AFIX_SEPARATORS.len();
        assert_eq!(start_anchored().len(), expected);
        assert_eq!(end_anchored().len(), expected);
        assert_eq!(expected, 40);
    }

    #[test]
    fn test_keys_are_at_least_two_chars() {
        for table in [start_anchored(), end_anchored()] {
            for (key, _) in table.iter() {
                assert!(key.len() >= 2, "Marker '{key}' is shorter than 2");
            }
        }
    }

    #[test]
    fn test_table_order_is_pairs_then_separators() {
        let keys: Vec<&str> = start_anchored().iter().map(|(k, _)| k).take(6).collect();
        assert_eq!(keys, ["l.", "l ", "l-", "l_", "r.", "r "]);

        let keys: Vec<&str> = end_anchored().iter().map(|(k, _)| k).take(5).collect();
        assert_eq!(keys, [".l", " l", "-l", "_l", ".r"]);

        let (last, _) = end_anchored().iter().last().unwrap();
        assert_eq!(last, "_RIGHT");
    }

    #[test]
    fn test_values_mirror_keys() {
        assert_eq!(start_anchored().get("L_"), Some("R_"));
        assert_eq!(start_anchored().get("right "), Some("left "));
        assert_eq!(end_anchored().get(".Left"), Some(".Right"));
        assert_eq!(end_anchored().get("-RIGHT"), Some("-LEFT"));
        assert_eq!(end_anchored().get("L_"), None);
        assert_eq!(start_anchored().get("_L"), None);
    }

    #[test]
    fn test_mirroring_twice_returns_marker() {
        for table in [start_anchored(), end_anchored()] {
            for (key, value) in table.iter() {
                assert_eq!(table.get(value), Some(key), "'{value}' should mirror back to '{key}'");
            }
        }
    }

    #[test]
    fn test_first_match_lookups() {
        assert_eq!(start_anchored().first_prefix_of("Left Arm"), Some("Left "));
        assert_eq!(start_anchored().first_prefix_of("Leg"), None);
        assert_eq!(end_anchored().first_suffix_of("arm-right"), Some("-right"));
        assert_eq!(end_anchored().first_suffix_of("armright"), None);
        assert_eq!(end_anchored().first_suffix_of(""), None);
    }
}
