use crate::logic::board::{Board, Cell, Color};
use crate::logic::game::GameState;
use crate::logic::generator::Candidate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod config;
pub mod eval;
pub mod minimax;
pub mod search;


/// Stands in for an infinite score; negation never overflows.
pub const SCORE_INFINITY: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Cell,
    pub to: Cell,
    pub is_capture: bool,
}

impl Move {
    pub const fn new(from: Cell, candidate: Candidate) -> Self {
        Self {
            from,
            to: candidate.to,
            is_capture: candidate.is_capture,
        }
    }

    pub const fn candidate(self) -> Candidate {
        Candidate {
            to: self.to,
            is_capture: self.is_capture,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u32,
    pub time_ms: u64,
}

/// Result of a search from the root mover's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    pub score: i32,
    pub stats: SearchStats,
}

pub trait Evaluator {
    /// Static score of `board` for `perspective`.
    fn evaluate(&self, board: &Board, perspective: Color) -> i32;
}

pub trait Searcher {
    fn search(&mut self, game_state: &GameState, depth: u8) -> SearchOutcome;
}
