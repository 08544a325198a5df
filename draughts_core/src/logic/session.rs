use crate::engine::config::EngineConfig;
use crate::engine::search::AlphaBetaEngine;
use crate::engine::{Move, Searcher};
use crate::logic::board::{Board, Cell, Color};
use crate::logic::executor;
use crate::logic::game::GameState;
use crate::logic::generator::{self, Candidate};
use crate::logic::rules::MoveError;
use crate::logic::status::{evaluate_status, GameStatus, TurnHistory};
use std::sync::Arc;

/// One game from start to finish. Hosts drive it with [`Session::apply_move`]
/// for human turns and [`Session::machine_move`] for engine turns.
pub struct Session {
    state: GameState,
    history: TurnHistory,
    config: Arc<EngineConfig>,
    engine: AlphaBetaEngine,
    status: GameStatus,
}

impl Session {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            state: GameState::new(),
            history: TurnHistory::new(),
            engine: AlphaBetaEngine::new(config.clone()),
            config,
            status: GameStatus::Playing,
        }
    }

    /// A session already in progress from an arbitrary position.
    pub fn with_position(config: Arc<EngineConfig>, board: Board, turn: Color) -> Self {
        let mut session = Self::new(config);
        session.state = GameState::from_position(board, turn);
        session.state.started = true;
        session.refresh_status();
        session
    }

    pub fn start(&mut self) {
        self.reset();
        self.state.started = true;
        log::info!("game started, {} to move", self.state.turn);
    }

    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.history.reset();
        self.status = GameStatus::Playing;
        log::info!("board reset");
    }

    pub fn update_config(&mut self, config: Arc<EngineConfig>) {
        self.engine.update_config(config.clone());
        self.config = config;
    }

    pub const fn state(&self) -> &GameState {
        &self.state
    }

    pub const fn history(&self) -> &TurnHistory {
        &self.history
    }

    pub const fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub const fn turn(&self) -> Color {
        self.state.turn
    }

    pub const fn is_terminal(&self) -> bool {
        self.state.ended || self.status.is_over()
    }

    pub const fn winner(&self) -> Option<Color> {
        self.status.winner()
    }

    pub fn legal_moves(&self, cell: Cell) -> Result<Vec<Candidate>, MoveError> {
        generator::legal_moves(cell, &self.state)
    }

    /// Plays a move for the side to move and reports the resulting status.
    pub fn apply_move(&mut self, from: Cell, candidate: Candidate) -> Result<GameStatus, MoveError> {
        self.ensure_in_progress()?;

        let next = executor::apply_move(&self.state, from, candidate, &mut self.history)
            .inspect_err(|err| log::warn!("rejected move from {from}: {err}"))?;
        self.state = next;

        Ok(self.refresh_status())
    }

    /// Lets the engine play one move for the side to move, within that
    /// side's depth budget. `Ok(None)` means the game is over without a
    /// move; [`Session::status`] says how.
    pub fn machine_move(&mut self) -> Result<Option<Move>, MoveError> {
        self.ensure_in_progress()?;
        if self.refresh_status().is_over() {
            return Ok(None);
        }

        let mover = self.state.turn;
        let depth = self.config.depth_for(mover);
        let outcome = self.engine.search(&self.state, depth);

        let Some(mv) = outcome.best_move else {
            // Both sides still have pieces here, so the mover is blocked.
            self.finish(GameStatus::Won(mover.opposite()));
            return Ok(None);
        };
        self.apply_move(mv.from, mv.candidate())?;
        Ok(Some(mv))
    }

    fn refresh_status(&mut self) -> GameStatus {
        let status = evaluate_status(&self.state, &self.history, &self.config);
        if status.is_over() {
            self.finish(status);
        }
        status
    }

    fn finish(&mut self, status: GameStatus) {
        self.state.ended = true;
        self.status = status;
        log::info!("game over: {status}");
    }

    const fn ensure_in_progress(&self) -> Result<(), MoveError> {
        if self.state.started && !self.state.ended {
            Ok(())
        } else {
            Err(MoveError::GameNotInProgress)
        }
    }
}
