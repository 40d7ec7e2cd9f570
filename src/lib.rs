//! Rules engine for Reversi (Othello) on the standard 8x8 board.

pub mod board;
pub mod config;
pub mod error;
pub mod position;
pub mod types;
pub mod wasm;

pub use board::{Board, MoveOutcome};
pub use config::{CaptureDirections, Direction, RuleConfig};
pub use error::{Error, IllegalMoveReason};
pub use position::Position;
pub use types::Color;
