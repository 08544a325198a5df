use crate::engine::Move;
use crate::logic::board::{Board, Cell, Piece, PieceKind};
use crate::logic::game::GameState;
use crate::logic::rules::{owned_piece, MoveError};
use serde::{Deserialize, Serialize};

/// Diagonal directions in the order candidates are produced.
pub const DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, 1), (1, -1)];

/// A destination relative to an implicit origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub to: Cell,
    pub is_capture: bool,
}

impl Candidate {
    pub const fn simple(to: Cell) -> Self {
        Self {
            to,
            is_capture: false,
        }
    }

    pub const fn capture(to: Cell) -> Self {
        Self {
            to,
            is_capture: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub const fn new() -> Self {
        Self
    }

    /// Candidates for the piece on `from`, ignoring what the rest of its side
    /// can do. If the piece can capture, only captures are returned.
    #[allow(clippy::unused_self)]
    pub fn piece_candidates(&self, board: &Board, from: Cell) -> Vec<Candidate> {
        let Some(piece) = board.get_piece(from) else {
            return Vec::new();
        };

        let mut candidates = Vec::with_capacity(16);
        match piece.kind {
            PieceKind::Man => Self::man_candidates(board, from, piece, &mut candidates),
            PieceKind::Queen => Self::queen_candidates(board, from, piece, &mut candidates),
        }

        if candidates.iter().any(|c| c.is_capture) {
            candidates.retain(|c| c.is_capture);
        }
        candidates
    }

    pub fn has_capture(&self, board: &Board, from: Cell) -> bool {
        self.piece_candidates(board, from)
            .iter()
            .any(|c| c.is_capture)
    }

    /// Every move the side to move may play, with mandatory capture applied
    /// across all its pieces. Pieces are visited in row-major order.
    pub fn generate_moves(&self, state: &GameState) -> Vec<Move> {
        let board = &state.board;
        let movers: Vec<(Cell, Vec<Candidate>)> = match state.continuation {
            Some(cell) => vec![(cell, self.piece_candidates(board, cell))],
            None => board
                .pieces(state.turn)
                .map(|(cell, _)| (cell, self.piece_candidates(board, cell)))
                .filter(|(_, candidates)| !candidates.is_empty())
                .collect(),
        };

        let must_capture = state.continuation.is_some()
            || movers
                .iter()
                .any(|(_, candidates)| candidates.iter().any(|c| c.is_capture));

        let mut moves = Vec::with_capacity(32);
        for (from, candidates) in movers {
            for candidate in candidates {
                if !must_capture || candidate.is_capture {
                    moves.push(Move::new(from, candidate));
                }
            }
        }
        moves
    }

    /// Checks if the side to move has at least one legal move.
    pub fn has_legal_moves(&self, state: &GameState) -> bool {
        !self.generate_moves(state).is_empty()
    }

    fn man_candidates(board: &Board, from: Cell, piece: Piece, out: &mut Vec<Candidate>) {
        for (dr, dc) in DIRECTIONS {
            let Some(next) = from.offset(dr, dc) else {
                continue;
            };
            match board.get_piece(next) {
                Some(other) if other.color != piece.color => {
                    if let Some(landing) = next.offset(dr, dc) {
                        if board.is_empty(landing) {
                            push_unique(out, Candidate::capture(landing));
                        }
                    }
                }
                Some(_) => {}
                None => {
                    if dr == piece.color.forward() {
                        push_unique(out, Candidate::simple(next));
                    }
                }
            }
        }
    }

    fn queen_candidates(board: &Board, from: Cell, piece: Piece, out: &mut Vec<Candidate>) {
        for (dr, dc) in DIRECTIONS {
            let mut cursor = from.offset(dr, dc);
            while let Some(cell) = cursor {
                let Some(blocker) = board.get_piece(cell) else {
                    push_unique(out, Candidate::simple(cell));
                    cursor = cell.offset(dr, dc);
                    continue;
                };

                // Only the first piece met in a direction can be jumped.
                if blocker.color != piece.color {
                    let mut beyond = cell.offset(dr, dc);
                    while let Some(landing) = beyond {
                        if !board.is_empty(landing) {
                            break;
                        }
                        push_unique(out, Candidate::capture(landing));
                        beyond = landing.offset(dr, dc);
                    }
                }
                break;
            }
        }
    }
}

fn push_unique(out: &mut Vec<Candidate>, candidate: Candidate) {
    if !out.contains(&candidate) {
        out.push(candidate);
    }
}

/// Destinations the piece on `cell` may legally reach this turn, filtered by
/// the side-wide mandatory capture rule.
pub fn legal_moves(cell: Cell, state: &GameState) -> Result<Vec<Candidate>, MoveError> {
    owned_piece(state, cell)?;
    Ok(MoveGenerator::new()
        .generate_moves(state)
        .into_iter()
        .filter(|mv| mv.from == cell)
        .map(Move::candidate)
        .collect())
}
