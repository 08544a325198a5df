use crate::engine::config::EngineConfig;
use crate::engine::eval::{decisive_score, MaterialEvaluator};
use crate::engine::search::{elapsed_ms, now};
use crate::engine::{Evaluator, Move, SearchOutcome, SearchStats, Searcher, SCORE_INFINITY};
use crate::logic::board::Color;
use crate::logic::executor::execute;
use crate::logic::game::GameState;
use crate::logic::generator::MoveGenerator;
use std::sync::Arc;

/// Plain minimax over the full tree. Slow, but with no pruning it serves
/// as the reference the alpha-beta engine is checked against.
pub struct MinimaxEngine {
    evaluator: MaterialEvaluator,
    generator: MoveGenerator,
    nodes_searched: u32,
}

impl MinimaxEngine {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            evaluator: MaterialEvaluator::new(config),
            generator: MoveGenerator::new(),
            nodes_searched: 0,
        }
    }

    fn minimax(&mut self, state: &GameState, remaining: u8, root: Color) -> (i32, Option<Move>) {
        self.nodes_searched += 1;

        if let Some(score) = decisive_score(&state.board, state.turn, root) {
            return (score, None);
        }
        if remaining == 0 {
            return (self.evaluator.evaluate(&state.board, root), None);
        }

        let maximizing = state.turn == root;
        let mut best: Option<(i32, Move)> = None;
        for mv in self.generator.generate_moves(state) {
            let transition = match execute(state, mv) {
                Ok(transition) => transition,
                Err(err) => {
                    log::warn!("generated move {mv} rejected: {err}");
                    continue;
                }
            };
            let (score, _) = self.minimax(&transition.state, remaining - 1, root);
            let improves = best.is_none_or(|(best_score, _)| {
                if maximizing {
                    score > best_score
                } else {
                    score < best_score
                }
            });
            if improves {
                best = Some((score, mv));
            }
        }

        match best {
            Some((score, mv)) => (score, Some(mv)),
            None if maximizing => (-SCORE_INFINITY, None),
            None => (SCORE_INFINITY, None),
        }
    }
}

impl Searcher for MinimaxEngine {
    fn search(&mut self, game_state: &GameState, depth: u8) -> SearchOutcome {
        let depth = depth.max(1);
        self.nodes_searched = 0;
        let start_time = now();
        let (score, best_move) = self.minimax(game_state, depth, game_state.turn);
        SearchOutcome {
            best_move,
            score,
            stats: SearchStats {
                depth,
                nodes: self.nodes_searched,
                time_ms: elapsed_ms(start_time),
            },
        }
    }
}
