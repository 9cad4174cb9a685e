// Typed views of a symmetrical name: which side it is on, where its marker
// sits, and the parsed (marker, base) breakdown.
//
// The plain string functions in `query.rs` return `""` for "no match", which
// mirrors how callers store names. `SymmetricalName` is the structured form
// for code that wants to branch on the result instead.

use serde::{Deserialize, Serialize};

use crate::tables::{end_anchored, start_anchored};

/// Which side of a mirrored pair a name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The opposite side.
    pub fn mirrored(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Side denoted by a bare token (`"L"`, `"left"`, `"RIGHT"`, ...).
    /// Returns `None` for anything outside the recognized token set.
    pub fn of_token(token: &str) -> Option<Side> {
        match token {
            "l" | "L" | "left" | "Left" | "LEFT" => Some(Side::Left),
            "r" | "R" | "right" | "Right" | "RIGHT" => Some(Side::Right),
            _ => None,
        }
    }
}

/// Where the side marker is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AfixPosition {
    /// Marker at the start, token then separator: `"L_Hand"`.
    Prefix,
    /// Marker at the end, separator then token: `"Hand.L"`.
    Suffix,
}

/// A name broken into its side marker and base.
///
/// Borrowed from the input name, except `afix` which points into the
/// static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymmetricalName<'a> {
    /// The full marker including its separator (`"L_"`, `".Right"`).
    pub afix: &'static str,
    pub position: AfixPosition,
    /// The name with the marker removed.
    pub base: &'a str,
    pub side: Side,
}

impl<'a> SymmetricalName<'a> {
    /// Parse `name`, preferring a suffix marker over a prefix marker.
    /// Returns `None` when the name carries no marker.
    pub fn parse(name: &'a str) -> Option<Self> {
        if let Some(afix) = end_anchored().first_suffix_of(name) {
            return Some(Self::new(afix, AfixPosition::Suffix, &name[..name.len() - afix.len()]));
        }
        let afix = start_anchored().first_prefix_of(name)?;
        Some(Self::new(afix, AfixPosition::Prefix, &name[afix.len()..]))
    }

    fn new(afix: &'static str, position: AfixPosition, base: &'a str) -> Self {
        // Every table marker is a recognized token plus one separator, so the
        // fallback is unreachable.
        let side = Side::of_token(strip_separator(afix, position)).unwrap_or(Side::Left);
        SymmetricalName {
            afix,
            position,
            base,
            side,
        }
    }

    /// The marker without its separator (`"L"`, `"Right"`).
    pub fn token(&self) -> &'static str {
        strip_separator(self.afix, self.position)
    }

    /// The separator joining the marker to the base.
    pub fn separator(&self) -> char {
        let byte = match self.position {
            AfixPosition::Prefix => self.afix.as_bytes()[self.afix.len() - 1],
            AfixPosition::Suffix => self.afix.as_bytes()[0],
        };
        char::from(byte)
    }

    /// The full name of the opposite-side counterpart.
    pub fn mirrored(&self) -> String {
        match self.position {
            AfixPosition::Suffix => {
                let counterpart = end_anchored().get(self.afix).unwrap_or(self.afix);
                format!("{}{}", self.base, counterpart)
            }
            AfixPosition::Prefix => {
                let counterpart = start_anchored().get(self.afix).unwrap_or(self.afix);
                format!("{}{}", counterpart, self.base)
            }
        }
    }
}

/// Separators are single ASCII bytes, so byte slicing stays on a char boundary.
fn strip_separator(afix: &'static str, position: AfixPosition) -> &'static str {
    match position {
        AfixPosition::Prefix => &afix[..afix.len() - 1],
        AfixPosition::Suffix => &afix[1..],
    }
}
