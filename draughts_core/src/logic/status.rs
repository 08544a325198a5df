use crate::engine::config::EngineConfig;
use crate::logic::board::{Board, Cell, Color};
use crate::logic::game::GameState;
use crate::logic::generator::MoveGenerator;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won(Color),
    Draw,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            Self::Won(color) => Some(color),
            Self::Playing | Self::Draw => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => f.write_str("in progress"),
            Self::Won(color) => write!(f, "{color} wins"),
            Self::Draw => f.write_str("draw"),
        }
    }
}

/// Destinations of each side's recent completed moves. Only used to spot
/// queens shuffling back and forth forever.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnHistory {
    light: Vec<Cell>,
    dark: Vec<Cell>,
}

impl TurnHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self, color: Color) -> &[Cell] {
        match color {
            Color::Light => &self.light,
            Color::Dark => &self.dark,
        }
    }

    fn log_mut(&mut self, color: Color) -> &mut Vec<Cell> {
        match color {
            Color::Light => &mut self.light,
            Color::Dark => &mut self.dark,
        }
    }

    pub fn record(&mut self, color: Color, destination: Cell) {
        self.log_mut(color).push(destination);
    }

    pub fn clear(&mut self, color: Color) {
        self.log_mut(color).clear();
    }

    pub fn reset(&mut self) {
        self.light.clear();
        self.dark.clear();
    }
}

/// A log loops once it holds at least `min_len` entries and some cell
/// appears in it more than `max_count` times.
pub fn is_looping(log: &[Cell], min_len: usize, max_count: usize) -> bool {
    if log.len() < min_len {
        return false;
    }
    let mut counts: HashMap<Cell, usize> = HashMap::new();
    for cell in log {
        *counts.entry(*cell).or_insert(0) += 1;
    }
    counts.values().any(|&n| n > max_count)
}

pub fn is_repetition_draw(history: &TurnHistory, config: &EngineConfig) -> bool {
    [Color::Light, Color::Dark].iter().all(|&color| {
        is_looping(
            history.log(color),
            config.repetition_min_len,
            config.repetition_max_count,
        )
    })
}

/// The side still holding pieces once the other has none.
pub fn elimination_winner(board: &Board) -> Option<Color> {
    match (board.count(Color::Light), board.count(Color::Dark)) {
        (0, 0) => None,
        (0, _) => Some(Color::Dark),
        (_, 0) => Some(Color::Light),
        _ => None,
    }
}

pub fn evaluate_status(state: &GameState, history: &TurnHistory, config: &EngineConfig) -> GameStatus {
    if let Some(winner) = elimination_winner(&state.board) {
        return GameStatus::Won(winner);
    }
    if is_repetition_draw(history, config) {
        return GameStatus::Draw;
    }
    if !MoveGenerator::new().has_legal_moves(state) {
        return GameStatus::Won(state.turn.opposite());
    }
    GameStatus::Playing
}

/// Whether `state` is finished: already flagged, or over by elimination,
/// by repetition under `config`'s thresholds, or by a blocked side to move.
pub fn is_terminal(state: &GameState, history: &TurnHistory, config: &EngineConfig) -> bool {
    state.ended || evaluate_status(state, history, config).is_over()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::Piece;

    fn cell(row: usize, col: usize) -> Cell {
        Cell::new(row, col).unwrap()
    }

    #[test]
    fn test_looping_needs_length_and_count() {
        let a = cell(0, 1);
        let b = cell(1, 0);

        assert!(!is_looping(&[a; 9], 10, 10));
        assert!(!is_looping(&[a; 10], 10, 10));
        assert!(is_looping(&[a; 11], 10, 10));

        // Two-cell oscillation: 20 entries, each cell exactly 10 times.
        let oscillation: Vec<Cell> = (0..20).map(|i| if i % 2 == 0 { a } else { b }).collect();
        assert!(!is_looping(&oscillation, 10, 10));
    }

    #[test]
    fn test_draw_requires_both_sides_looping() {
        let config = EngineConfig::default();
        let mut history = TurnHistory::new();
        for _ in 0..11 {
            history.record(Color::Light, cell(0, 1));
        }
        assert!(!is_repetition_draw(&history, &config));

        for _ in 0..11 {
            history.record(Color::Dark, cell(7, 6));
        }
        assert!(is_repetition_draw(&history, &config));

        history.clear(Color::Dark);
        assert!(history.log(Color::Dark).is_empty());
        assert!(!is_repetition_draw(&history, &config));
    }

    #[test]
    fn test_elimination_reports_survivor() {
        let mut board = Board::empty();
        board.place(cell(3, 2), Piece::man(Color::Dark)).unwrap();
        assert_eq!(elimination_winner(&board), Some(Color::Dark));

        let state = GameState::from_position(board, Color::Light);
        assert_eq!(
            evaluate_status(&state, &TurnHistory::new(), &EngineConfig::default()),
            GameStatus::Won(Color::Dark)
        );
        assert!(is_terminal(&state, &TurnHistory::new(), &EngineConfig::default()));
    }

    #[test]
    fn test_terminal_follows_configured_thresholds() {
        let mut board = Board::empty();
        board.place(cell(0, 1), Piece::queen(Color::Light)).unwrap();
        board.place(cell(7, 6), Piece::queen(Color::Dark)).unwrap();
        let state = GameState::from_position(board, Color::Light);

        let mut history = TurnHistory::new();
        for _ in 0..3 {
            history.record(Color::Light, cell(1, 0));
            history.record(Color::Dark, cell(6, 7));
        }

        let tight = EngineConfig {
            repetition_min_len: 3,
            repetition_max_count: 2,
            ..EngineConfig::default()
        };
        assert!(is_terminal(&state, &history, &tight));
        assert_eq!(evaluate_status(&state, &history, &tight), GameStatus::Draw);
        assert!(!is_terminal(&state, &history, &EngineConfig::default()));
    }

    #[test]
    fn test_initial_position_is_playing() {
        let state = GameState::new();
        assert!(!is_terminal(&state, &TurnHistory::new(), &EngineConfig::default()));
        assert_eq!(GameStatus::default(), GameStatus::Playing);
    }
}
