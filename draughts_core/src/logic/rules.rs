use crate::engine::Move;
use crate::logic::board::{Cell, Piece};
use crate::logic::game::GameState;
use crate::logic::generator::MoveGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no piece at {0}")]
    NoPieceAtSource(Cell),
    #[error("piece at {0} does not belong to the side to move")]
    NotYourPiece(Cell),
    #[error("{0} is not a legal move")]
    IllegalMove(Move),
    #[error("game is not in progress")]
    GameNotInProgress,
}

/// Returns the piece on `cell` if it belongs to the side to move.
pub fn owned_piece(state: &GameState, cell: Cell) -> Result<Piece, MoveError> {
    let piece = state
        .board
        .get_piece(cell)
        .ok_or(MoveError::NoPieceAtSource(cell))?;
    if piece.color != state.turn {
        return Err(MoveError::NotYourPiece(cell));
    }
    Ok(piece)
}

/// Checks that `mv` is one of the moves the generator offers in `state`,
/// including the side-wide capture rule and any pending continuation.
pub fn is_valid_move(state: &GameState, mv: Move) -> Result<(), MoveError> {
    owned_piece(state, mv.from)?;
    if MoveGenerator::new().generate_moves(state).contains(&mv) {
        Ok(())
    } else {
        Err(MoveError::IllegalMove(mv))
    }
}

/// Cheap geometric sanity check used by the unchecked executor: the move
/// must be a non-empty diagonal between playable squares.
pub fn is_diagonal(mv: Move) -> bool {
    let rows = mv.from.row().abs_diff(mv.to.row());
    let cols = mv.from.col().abs_diff(mv.to.col());
    rows == cols && rows > 0 && mv.to.is_playable()
}
