use std::fmt::{self, Display, Formatter};

use log::{debug, trace};
use serde::Serialize;

use crate::config::{Direction, RuleConfig};
use crate::error::{Error, IllegalMoveReason};
use crate::position::{Position, in_bounds};
use crate::types::{BOARD_SIZE, Color, NUM_SQUARES};

const COLUMN_HEADER: &str = "  a b c d e f g h\n";

/// What an accepted move did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    /// The cell the piece went on, holding the mover's color.
    pub placed: Position,
    /// Flipped cells as they were before flipping, sorted row-major.
    pub captured: Vec<Position>,
}

/// Reversi board: 64 cells and the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Position; BOARD_SIZE]; BOARD_SIZE],
    current_player: Color,
    config: RuleConfig,
}

impl Board {
    /// Creates the initial board with every capture direction enabled:
    /// d4=white, e4=black, d5=black, e5=white. Black moves first.
    pub fn new() -> Self {
        Self::with_config(RuleConfig::default())
    }

    pub fn with_config(config: RuleConfig) -> Self {
        let mut board = Self {
            cells: empty_cells(),
            current_player: Color::Black,
            config,
        };
        board.cells[3][3].set_color(Color::White);
        board.cells[4][4].set_color(Color::White);
        board.cells[3][4].set_color(Color::Black);
        board.cells[4][3].set_color(Color::Black);
        board
    }

    /// Sets up an arbitrary position, indexed `[row][col]`.
    pub fn from_grid(
        colors: [[Color; BOARD_SIZE]; BOARD_SIZE],
        current_player: Color,
        config: RuleConfig,
    ) -> Result<Self, Error> {
        if !current_player.is_piece() {
            return Err(Error::InvalidPlayer);
        }

        let mut cells = empty_cells();
        for (cell_row, color_row) in cells.iter_mut().zip(colors.iter()) {
            for (cell, &color) in cell_row.iter_mut().zip(color_row.iter()) {
                cell.set_color(color);
            }
        }

        let board = Self {
            cells,
            current_player,
            config,
        };
        debug!(
            "board set up with {:?} to move, {:?} black/white",
            current_player,
            board.count()
        );
        Ok(board)
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn config(&self) -> RuleConfig {
        self.config
    }

    /// Read-only view of the grid, indexed `[row][col]`.
    /// Cells only change through [`Board::play`] and [`Board::capture_pieces`].
    pub fn cells(&self) -> &[[Position; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Position> {
        self.cells.get(row)?.get(col)
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut out = [0u8; NUM_SQUARES];
        for (slot, cell) in out.iter_mut().zip(self.cells.iter().flatten()) {
            *slot = cell.color().to_u8();
        }
        out
    }

    pub fn count_color_pieces(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.color() == color)
            .count()
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (usize, usize) {
        (
            self.count_color_pieces(Color::Black),
            self.count_color_pieces(Color::White),
        )
    }

    pub fn empty_count(&self) -> usize {
        self.count_color_pieces(Color::Empty)
    }

    /// The side with strictly more pieces, or `Empty` on a tie.
    pub fn determine_winner(&self) -> Color {
        let (black, white) = self.count();
        if black > white {
            Color::Black
        } else if white > black {
            Color::White
        } else {
            Color::Empty
        }
    }

    /// Whether every position shares the first one's color.
    ///
    /// # Panics
    ///
    /// Panics if `pieces` is empty.
    pub fn pieces_have_same_color(pieces: &[Position]) -> bool {
        assert!(
            !pieces.is_empty(),
            "pieces_have_same_color requires at least one position"
        );
        let color = pieces[0].color();
        pieces.iter().all(|p| p.color() == color)
    }

    /// Checks a candidate against this board's own cells.
    pub fn validate_move(&self, candidate: &Position) -> Result<(), IllegalMoveReason> {
        if candidate.color() != self.current_player {
            return Err(IllegalMoveReason::WrongColor);
        }
        if !candidate.is_on_board() {
            return Err(IllegalMoveReason::OffBoard);
        }

        let row = candidate.row() as usize;
        let col = candidate.column() as usize;
        if self.cells[row][col].color() != Color::Empty {
            return Err(IllegalMoveReason::Occupied);
        }

        let captures_any = self
            .config
            .directions
            .directions()
            .iter()
            .any(|&direction| !self.capture_ray(candidate, direction).is_empty());
        if !captures_any {
            return Err(IllegalMoveReason::NoCaptures);
        }

        Ok(())
    }

    pub fn is_valid_move(&self, candidate: &Position) -> bool {
        self.validate_move(candidate).is_ok()
    }

    /// Opponent pieces the player to move would capture along one ray from
    /// `start`, sorted. Empty unless the run of opponent pieces ends on one of
    /// the mover's own pieces before leaving the board.
    pub fn capture_ray(&self, start: &Position, direction: Direction) -> Vec<Position> {
        if !start.is_on_board() {
            return Vec::new();
        }

        let me = self.current_player;
        let opp = me.opponent();
        let (dr, dc) = direction.delta();
        let mut r = start.row() + dr;
        let mut c = start.column() + dc;
        let mut line = Vec::new();

        while in_bounds(r, c) {
            let cell = self.cells[r as usize][c as usize];
            if cell.color() == opp {
                line.push(cell);
            } else if cell.color() == me {
                line.sort();
                return line;
            } else {
                break;
            }

            r += dr;
            c += dc;
        }

        Vec::new()
    }

    pub fn check_horizontal_right(&self, start: &Position) -> Vec<Position> {
        self.capture_ray(start, Direction::Right)
    }

    pub fn check_vertical_down(&self, start: &Position) -> Vec<Position> {
        self.capture_ray(start, Direction::Down)
    }

    pub fn check_diagonal_up_left(&self, start: &Position) -> Vec<Position> {
        self.capture_ray(start, Direction::UpLeft)
    }

    /// Union of every enabled ray from `start`, sorted. Rays never overlap.
    pub fn captures(&self, start: &Position) -> Vec<Position> {
        let mut all: Vec<Position> = self
            .config
            .directions
            .directions()
            .iter()
            .flat_map(|&direction| self.capture_ray(start, direction))
            .collect();
        all.sort();
        all
    }

    /// Places the current player's piece and flips what it captures, then
    /// hands the turn to the other side.
    ///
    /// A rejected move leaves the board and the turn unchanged.
    pub fn play(&mut self, candidate: &Position) -> Result<MoveOutcome, Error> {
        if let Err(reason) = self.validate_move(candidate) {
            debug!("rejected move {candidate}: {reason}");
            return Err(Error::IllegalMove {
                position: candidate.to_string(),
                reason,
            });
        }

        let row = candidate.row() as usize;
        let col = candidate.column() as usize;
        self.cells[row][col].set_color(self.current_player);

        let anchor = self.cells[row][col];
        let captured = self.captures(&anchor);
        self.capture_pieces(&captured);
        self.current_player = self.current_player.opponent();

        trace!("{anchor} captured {} pieces", captured.len());
        Ok(MoveOutcome {
            placed: anchor,
            captured,
        })
    }

    /// Flips the board's cells at the listed coordinates, black to white and
    /// white to black. Empty cells and off-board entries are skipped.
    pub fn capture_pieces(&mut self, pieces: &[Position]) {
        for piece in pieces.iter().filter(|p| p.is_on_board()) {
            let cell = &mut self.cells[piece.row() as usize][piece.column() as usize];
            if cell.color().is_piece() {
                cell.set_color(cell.color().opponent());
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Grid with column letters above and below and row numbers on both sides.
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(COLUMN_HEADER)?;
        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{} ", i + 1)?;
            for cell in row {
                f.write_str(match cell.color() {
                    Color::White => "W ",
                    Color::Black => "B ",
                    Color::Empty => "  ",
                })?;
            }
            writeln!(f, "{}", i + 1)?;
        }
        f.write_str(COLUMN_HEADER)
    }
}

fn empty_cells() -> [[Position; BOARD_SIZE]; BOARD_SIZE] {
    std::array::from_fn(|row| {
        std::array::from_fn(|col| Position::new(row as i8, col as i8, Color::Empty))
    })
}
