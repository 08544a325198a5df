use crate::logic::board::{Board, Cell, Color};
use serde::{Deserialize, Serialize};

/// One immutable snapshot of a game. Transitions produce a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub started: bool,
    pub ended: bool,
    /// Piece that must keep capturing before the turn can pass.
    pub continuation: Option<Cell>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Board::new(), Color::Light)
    }

    #[must_use]
    pub fn from_position(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            started: false,
            ended: false,
            continuation: None,
        }
    }

    pub const fn is_continuation(&self) -> bool {
        self.continuation.is_some()
    }
}
