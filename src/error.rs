use std::fmt;

use thiserror::Error;

/// Why a candidate move was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// The piece is not the color of the player to move.
    WrongColor,
    OffBoard,
    Occupied,
    /// No enabled ray brackets any opponent piece.
    NoCaptures,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::WrongColor => "it is not that color's turn",
            Self::OffBoard => "square is off the board",
            Self::Occupied => "square is already occupied",
            Self::NoCaptures => "move captures nothing",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The string is not `<a-h><1-8>` notation.
    #[error("invalid square notation: {notation:?}")]
    InvalidSquare { notation: String },

    /// The move was rejected and the board left untouched.
    #[error("illegal move {position}: {reason}")]
    IllegalMove {
        position: String,
        reason: IllegalMoveReason,
    },

    #[error("the player to move must be black or white")]
    InvalidPlayer,

    #[error("invalid rule config: {message}")]
    InvalidConfig { message: String },
}
