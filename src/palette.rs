//! Shared color palette indices
//!
//! Cards and slot requirements refer to colors by palette index rather than
//! by RGB value.

use serde::{Deserialize, Serialize};

/// A fixed color in the shared palette
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaletteIndex {
    Orange = 0,
    Gold = 1,
    White = 2,
    Black = 3,
}

impl PaletteIndex {
    pub const ALL: [PaletteIndex; 4] = [
        PaletteIndex::Orange,
        PaletteIndex::Gold,
        PaletteIndex::White,
        PaletteIndex::Black,
    ];

    /// Integer palette index
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteIndex::Orange => "ORANGE",
            PaletteIndex::Gold => "GOLD",
            PaletteIndex::White => "WHITE",
            PaletteIndex::Black => "BLACK",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for color in PaletteIndex::ALL {
            assert_eq!(PaletteIndex::from_index(color.index()), Some(color));
        }
        assert_eq!(PaletteIndex::from_index(4), None);
    }

    #[test]
    fn test_serde_uses_palette_names() {
        for color in PaletteIndex::ALL {
            let json = serde_json::to_string(&color).unwrap();
            assert_eq!(json, format!("\"{}\"", color.as_str()));
        }
    }
}
