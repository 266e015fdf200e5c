//! The color catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of colors in the catalog, and so the length of every cycle.
pub const CATALOG_SIZE: usize = 12;

/// One of the twelve catalog colors.
///
/// Serialized as its lowercase label (`"blue"`, `"red"`, ...), which is also
/// the representation used in the persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
    Yellow,
    Brown,
    Green,
    Purple,
    Orange,
    White,
    Black,
    Pink,
    Gray,
    Silver,
}

/// The catalog in canonical order. Every permutation starts from this base.
pub const CATALOG: [Color; CATALOG_SIZE] = [
    Color::Blue,
    Color::Red,
    Color::Yellow,
    Color::Brown,
    Color::Green,
    Color::Purple,
    Color::Orange,
    Color::White,
    Color::Black,
    Color::Pink,
    Color::Gray,
    Color::Silver,
];

impl Color {
    /// The lowercase label for this color.
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Brown => "brown",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::White => "white",
            Color::Black => "black",
            Color::Pink => "pink",
            Color::Gray => "gray",
            Color::Silver => "silver",
        }
    }

    /// Position of this color in [`CATALOG`].
    pub const fn catalog_index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a label that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color: {:?}", self.0)
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_twelve_distinct_colors() {
        let unique: HashSet<_> = CATALOG.iter().collect();
        assert_eq!(unique.len(), CATALOG_SIZE);
    }

    #[test]
    fn test_catalog_canonical_order() {
        let labels: Vec<_> = CATALOG.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "blue", "red", "yellow", "brown", "green", "purple", "orange", "white", "black",
                "pink", "gray", "silver"
            ]
        );
    }

    #[test]
    fn test_catalog_index_matches_position() {
        for (i, color) in CATALOG.iter().enumerate() {
            assert_eq!(color.catalog_index(), i);
        }
    }

    #[test]
    fn test_parse_label() {
        assert_eq!("silver".parse::<Color>(), Ok(Color::Silver));
        assert_eq!(
            "magenta".parse::<Color>(),
            Err(UnknownColor("magenta".to_string()))
        );
        // Labels are case-sensitive, matching the persisted format.
        assert!("Blue".parse::<Color>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_label() {
        assert_eq!(serde_json::to_string(&Color::Purple).unwrap(), "\"purple\"");
        let parsed: Color = serde_json::from_str("\"gray\"").unwrap();
        assert_eq!(parsed, Color::Gray);
        assert!(serde_json::from_str::<Color>("\"grey\"").is_err());
    }
}
