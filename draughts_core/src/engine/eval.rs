use crate::engine::config::EngineConfig;
use crate::engine::{Evaluator, SCORE_INFINITY};
use crate::logic::board::{Board, Color, PieceKind};
use std::sync::Arc;

/// Counts material: a fixed value per man and per queen.
pub struct MaterialEvaluator {
    config: Arc<EngineConfig>,
}

impl MaterialEvaluator {
    pub const fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    fn piece_value(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Man => self.config.man_value,
            PieceKind::Queen => self.config.queen_value,
        }
    }
}

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board, perspective: Color) -> i32 {
        let own: i32 = board
            .pieces(perspective)
            .map(|(_, p)| self.piece_value(p.kind))
            .sum();
        let enemy: i32 = board
            .pieces(perspective.opposite())
            .map(|(_, p)| self.piece_value(p.kind))
            .sum();
        own - enemy
    }
}

/// Score of a node where one side has been wiped out, seen by `root`.
/// `None` while both sides still have pieces.
pub fn decisive_score(board: &Board, mover: Color, root: Color) -> Option<i32> {
    let sign = if mover == root { 1 } else { -1 };
    if board.count(mover) == 0 {
        return Some(-sign * SCORE_INFINITY);
    }
    if board.count(mover.opposite()) == 0 {
        return Some(sign * SCORE_INFINITY);
    }
    None
}
