use wasm_bindgen::prelude::*;

use crate::board::{Board, MoveOutcome};
use crate::config::RuleConfig;
use crate::error::Error;
use crate::position::Position;
use crate::types::Color;

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GameState {
    /// Row-major, 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub current_player: Color,
    pub black_count: u8,
    pub white_count: u8,
    /// Leader by piece count; `empty` on a tie.
    pub winner: Color,
    /// Captures of the most recent accepted move, empty before the first.
    pub last_captured: Vec<Position>,
}

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// One game driven from JavaScript.
#[wasm_bindgen]
pub struct ReversiGame {
    board: Board,
    last_captured: Vec<Position>,
}

#[wasm_bindgen]
impl ReversiGame {
    /// `config` may be `undefined` or a partial `{ directions: "all" | "legacy" }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ReversiGame, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            RuleConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| {
                to_js_error(Error::InvalidConfig {
                    message: e.to_string(),
                })
            })?
        };
        Ok(Self::with_config(config))
    }

    /// Plays the current player's piece at `notation` ("c4").
    pub fn play(&mut self, notation: &str) -> Result<JsValue, JsValue> {
        let outcome = self.play_notation(notation).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&outcome).map_err(JsValue::from)
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.game_state()).map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.board.current_player().to_u8()
    }

    pub fn winner(&self) -> u8 {
        self.board.determine_winner().to_u8()
    }

    pub fn render(&self) -> String {
        self.board.to_string()
    }
}

impl ReversiGame {
    pub fn with_config(config: RuleConfig) -> Self {
        Self {
            board: Board::with_config(config),
            last_captured: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn play_notation(&mut self, notation: &str) -> Result<MoveOutcome, Error> {
        let candidate = Position::parse(notation, self.board.current_player())?;
        let outcome = self.board.play(&candidate)?;
        self.last_captured = outcome.captured.clone();
        Ok(outcome)
    }

    pub fn game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.board.current_player(),
            black_count: black_count as u8,
            white_count: white_count as u8,
            winner: self.board.determine_winner(),
            last_captured: self.last_captured.clone(),
        }
    }
}

fn to_js_error(err: Error) -> JsValue {
    JsError::new(&err.to_string()).into()
}
