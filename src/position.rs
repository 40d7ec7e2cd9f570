//! Board coordinates and the piece occupying them.

use std::fmt::{self, Display, Formatter, Write};
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;
use crate::types::{BOARD_SIZE, Color};

const FILES: &str = "abcdefgh";
const RANKS: &str = "12345678";

/// Row/column pair returned by [`Position::from_notation`] when parsing fails.
pub const INVALID_COORD: i8 = -1;

/// One cell's coordinates together with the color on it.
///
/// Equality covers the color as well as the coordinates, so a cell and a
/// copy of it recolored afterwards compare unequal. Keep that in mind before
/// putting positions into sets or maps keyed by location.
///
/// Ordering is row-major, then column; color only breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    row: i8,
    col: i8,
    color: Color,
}

impl Position {
    pub fn new(row: i8, col: i8, color: Color) -> Self {
        Self { row, col, color }
    }

    /// Parses algebraic notation ("c4"), case-insensitively.
    pub fn parse(notation: &str, color: Color) -> Result<Self, Error> {
        let (row, col) = parse_coords(notation).ok_or_else(|| Error::InvalidSquare {
            notation: notation.to_string(),
        })?;
        Ok(Self::new(row, col, color))
    }

    /// Like [`Position::parse`], but an unparseable string yields a position at
    /// `(-1, -1)` instead of an error. Such a position is never a legal move.
    pub fn from_notation(notation: &str, color: Color) -> Self {
        let (row, col) = parse_coords(notation).unwrap_or((INVALID_COORD, INVALID_COORD));
        Self::new(row, col, color)
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn column(&self) -> i8 {
        self.col
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn is_on_board(&self) -> bool {
        in_bounds(self.row, self.col)
    }
}

/// An empty position at the given square.
impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Color::Empty)
    }
}

/// Short form: column letter, row digit, then `B`/`W` for a piece ("c4B").
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = FILES.as_bytes()[self.col as usize] as char;
            let rank = RANKS.as_bytes()[self.row as usize] as char;
            f.write_char(file)?;
            f.write_char(rank)?;
        } else {
            f.write_str("??")?;
        }
        f.write_str(self.color.suffix())
    }
}

/// Maps `<a-h><1-8>` to `(row, col)`, where row is the digit minus one.
pub fn parse_coords(notation: &str) -> Option<(i8, i8)> {
    let mut chars = notation.chars();
    let file = chars.next()?.to_ascii_lowercase();
    let rank = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    let col = FILES.find(file)?;
    let row = RANKS.find(rank)?;
    Some((row as i8, col as i8))
}

pub(crate) fn in_bounds(row: i8, col: i8) -> bool {
    (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col)
}
