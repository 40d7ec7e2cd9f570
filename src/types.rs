use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Contents of a cell, or the side a piece belongs to.
///
/// `Empty` is a valid cell state but never a valid color to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
    Empty,
}

impl Color {
    /// The other side. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
            Self::Empty => Self::Empty,
        }
    }

    pub fn is_piece(self) -> bool {
        self != Self::Empty
    }

    /// Suffix used by the short position form ("c4B").
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Black => "B",
            Self::White => "W",
            Self::Empty => "",
        }
    }

    /// 0=empty, 1=black, 2=white.
    pub fn to_u8(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Black => 1,
            Self::White => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_swaps_sides_and_keeps_empty() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Empty.opponent(), Color::Empty);
    }

    #[test]
    fn serializes_as_lowercase_names() {
        assert_eq!(serde_json::to_string(&Color::Black).unwrap(), "\"black\"");
        let parsed: Color = serde_json::from_str("\"empty\"").unwrap();
        assert_eq!(parsed, Color::Empty);
    }
}
