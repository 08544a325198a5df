use crate::engine::config::EngineConfig;
use crate::engine::search::AlphaBetaEngine;
use crate::engine::{Move, SearchStats, Searcher};
use crate::logic::game::GameState;
use gloo_worker::{HandlerId, Worker, WorkerScope};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Input {
    ChooseMove(GameState, u8, EngineConfig),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// `None` when the side to move has no legal move.
    MoveChosen(Option<Move>, SearchStats),
}

/// Runs machine turns off the UI thread. The engine is built on the first
/// request and reconfigured on later ones.
#[derive(Default)]
pub struct GameWorker {
    engine: Option<AlphaBetaEngine>,
}

impl GameWorker {
    pub const fn new() -> Self {
        Self { engine: None }
    }

    pub fn handle(&mut self, msg: Input) -> Output {
        match msg {
            Input::ChooseMove(game_state, depth, config) => {
                let config = Arc::new(config);
                let engine = self
                    .engine
                    .get_or_insert_with(|| AlphaBetaEngine::new(config.clone()));
                engine.update_config(config);

                let outcome = engine.search(&game_state, depth);
                Output::MoveChosen(outcome.best_move, outcome.stats)
            }
        }
    }
}

impl Worker for GameWorker {
    type Input = Input;
    type Message = ();
    type Output = Output;

    fn create(_scope: &WorkerScope<Self>) -> Self {
        Self::new()
    }

    fn update(&mut self, _scope: &WorkerScope<Self>, _msg: Self::Message) {}

    fn received(&mut self, scope: &WorkerScope<Self>, msg: Self::Input, id: HandlerId) {
        scope.respond(id, self.handle(msg));
    }
}
