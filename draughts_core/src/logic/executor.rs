use crate::engine::Move;
use crate::logic::board::Cell;
use crate::logic::game::GameState;
use crate::logic::generator::{Candidate, MoveGenerator};
use crate::logic::rules::{is_diagonal, is_valid_move, owned_piece, MoveError};
use crate::logic::status::TurnHistory;

/// The state after one move, and whether the mover must capture again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub continuation: bool,
}

/// Applies `mv` without checking it against the generator. Used by the
/// search, which only feeds it generated moves. The input is never modified.
pub fn execute(state: &GameState, mv: Move) -> Result<Transition, MoveError> {
    let piece = owned_piece(state, mv.from)?;
    if !is_diagonal(mv) {
        return Err(MoveError::IllegalMove(mv));
    }

    let mut next = state.clone();
    next.board.clear_cell(mv.from);

    if mv.is_capture {
        // A man's path holds exactly the jumped piece; a queen's may hold
        // empty squares too.
        for cell in path_between(mv.from, mv.to) {
            next.board.clear_cell(cell);
        }
    }

    let landed = if mv.to.row() == piece.color.promotion_row() {
        piece.promoted()
    } else {
        piece
    };
    next.board.put(mv.to, landed);

    let continuation = mv.is_capture && MoveGenerator::new().has_capture(&next.board, mv.to);
    if continuation {
        next.continuation = Some(mv.to);
    } else {
        next.continuation = None;
        next.turn = state.turn.opposite();
    }

    Ok(Transition {
        state: next,
        continuation,
    })
}

/// Validates and applies a move chosen by a player, keeping `history` in
/// step: a finished move is logged while queens are on the board, and a
/// continuation wipes the mover's log.
pub fn apply_move(
    state: &GameState,
    from: Cell,
    candidate: Candidate,
    history: &mut TurnHistory,
) -> Result<GameState, MoveError> {
    let mv = Move::new(from, candidate);
    is_valid_move(state, mv)?;

    let mover = state.turn;
    let queens_on_board = state.board.has_any_queen();
    let transition = execute(state, mv)?;

    if transition.continuation {
        history.clear(mover);
    } else if queens_on_board {
        history.record(mover, mv.to);
    }

    Ok(transition.state)
}

/// Cells strictly between two cells on a diagonal.
fn path_between(from: Cell, to: Cell) -> impl Iterator<Item = Cell> {
    let dr: i8 = if to.row() > from.row() { 1 } else { -1 };
    let dc: i8 = if to.col() > from.col() { 1 } else { -1 };
    let steps = from.row().abs_diff(to.row());
    std::iter::successors(from.offset(dr, dc), move |cell| cell.offset(dr, dc))
        .take(steps.saturating_sub(1))
}
