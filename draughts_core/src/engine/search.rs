use crate::engine::config::EngineConfig;
use crate::engine::eval::{decisive_score, MaterialEvaluator};
use crate::engine::{Evaluator, Move, SearchOutcome, SearchStats, Searcher, SCORE_INFINITY};
use crate::logic::board::Color;
use crate::logic::executor::execute;
use crate::logic::game::GameState;
use crate::logic::generator::MoveGenerator;
use std::sync::Arc;

pub struct AlphaBetaEngine {
    config: Arc<EngineConfig>,
    evaluator: MaterialEvaluator,
    generator: MoveGenerator,
    nodes_searched: u32,
}

impl AlphaBetaEngine {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            evaluator: MaterialEvaluator::new(config.clone()),
            config,
            generator: MoveGenerator::new(),
            nodes_searched: 0,
        }
    }

    pub fn update_config(&mut self, config: Arc<EngineConfig>) {
        self.evaluator = MaterialEvaluator::new(config.clone());
        self.config = config;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the node value for `root` and the move that achieves it.
    ///
    /// The side to move picks the role: the root mover maximizes, the
    /// opponent minimizes. A forced continuation keeps the same side to
    /// move, so it keeps the same role one ply deeper.
    fn alpha_beta(
        &mut self,
        state: &GameState,
        mut alpha: i32,
        mut beta: i32,
        remaining: u8,
        root: Color,
    ) -> (i32, Option<Move>) {
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
            let (score, _) = self.alpha_beta(&transition.state, alpha, beta, remaining - 1, root);

            // Ties keep the earlier move.
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

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        match best {
            Some((score, mv)) => (score, Some(mv)),
            None if maximizing => (-SCORE_INFINITY, None),
            None => (SCORE_INFINITY, None),
        }
    }
}

impl Searcher for AlphaBetaEngine {
    fn search(&mut self, game_state: &GameState, depth: u8) -> SearchOutcome {
        let depth = depth.max(1);
        self.nodes_searched = 0;
        let start_time = now();

        let (score, best_move) = self.alpha_beta(
            game_state,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            depth,
            game_state.turn,
        );

        let stats = SearchStats {
            depth,
            nodes: self.nodes_searched,
            time_ms: elapsed_ms(start_time),
        };
        match best_move {
            Some(mv) => log::debug!(
                "{} plays {mv} (score {score}, depth {}, nodes {}, {} ms)",
                game_state.turn,
                stats.depth,
                stats.nodes,
                stats.time_ms
            ),
            None => log::debug!("{} has no move after {} nodes", game_state.turn, stats.nodes),
        }

        SearchOutcome {
            best_move,
            score,
            stats,
        }
    }
}

/// Best move for the side to move with the default evaluation, or `None`
/// when that side cannot move.
pub fn choose_move(state: &GameState, depth: u8) -> Option<Move> {
    AlphaBetaEngine::new(Arc::new(EngineConfig::default()))
        .search(state, depth)
        .best_move
}

pub(crate) fn now() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        if let Some(window) = web_sys::window() {
            return window.performance().map(|p| p.now()).unwrap_or(0.0);
        }
        let global = js_sys::global();
        if let Ok(worker) = global.dyn_into::<web_sys::WorkerGlobalScope>() {
            return worker.performance().map(|p| p.now()).unwrap_or(0.0);
        }
        0.0
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        let since_the_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        #[allow(clippy::cast_precision_loss)]
        let time_ms = (since_the_epoch.as_secs() as f64).mul_add(
            1000.0,
            f64::from(since_the_epoch.subsec_nanos()) / 1_000_000.0,
        );
        time_ms
    }
}

pub(crate) fn elapsed_ms(start_time: f64) -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (now() - start_time).max(0.0) as u64
    }
}
