#[cfg(test)]
mod tests {
    use draughts_core::engine::config::EngineConfig;
    use draughts_core::{
        apply_move, choose_move, is_terminal, legal_moves, Board, Candidate, Cell, Color,
        GameState, GameStatus, MoveError, Session, TurnHistory,
    };
    use std::sync::Arc;

    fn cell(row: usize, col: usize) -> Cell {
        Cell::new(row, col).unwrap()
    }

    fn position(diagram: &str, turn: Color) -> GameState {
        GameState::from_position(Board::from_diagram(diagram).unwrap(), turn)
    }

    #[test]
    fn opening_choice_is_a_simple_advance() {
        let game = GameState::new();
        let mv = choose_move(&game, 1).unwrap();

        assert!(!mv.is_capture);
        assert_eq!(mv.to.row(), mv.from.row() + 1);
        assert_eq!(mv.to.col().abs_diff(mv.from.col()), 1);
        assert!(legal_moves(mv.from, &game).unwrap().contains(&mv.candidate()));
    }

    #[test]
    fn adjacent_enemy_forces_single_capture() {
        let game = position(
            "
            ........
            ........
            .l......
            ..d.....
            ........
            ........
            .......d
            ........
            ",
            Color::Light,
        );

        let candidates = legal_moves(cell(2, 1), &game).unwrap();
        assert_eq!(candidates, vec![Candidate::capture(cell(4, 3))]);
    }

    #[test]
    fn further_capture_keeps_mover_and_clears_log() {
        let game = position(
            "
            ........
            ........
            .l......
            ..d.....
            ........
            ....d...
            ........
            ......D.
            ",
            Color::Light,
        );
        let mut history = TurnHistory::new();
        for _ in 0..5 {
            history.record(Color::Light, cell(2, 1));
        }

        let next = apply_move(&game, cell(2, 1), Candidate::capture(cell(4, 3)), &mut history)
            .unwrap();

        assert_eq!(next.turn, Color::Light);
        assert!(next.is_continuation());
        assert!(history.log(Color::Light).is_empty());
        assert_eq!(
            legal_moves(cell(4, 3), &next).unwrap(),
            vec![Candidate::capture(cell(6, 5))]
        );
    }

    #[test]
    fn eliminated_side_loses() {
        let game = position(
            "
            ........
            ........
            .l......
            ..d.....
            ........
            ........
            ........
            ........
            ",
            Color::Light,
        );
        let mut history = TurnHistory::new();
        let next = apply_move(&game, cell(2, 1), Candidate::capture(cell(4, 3)), &mut history)
            .unwrap();

        assert!(is_terminal(&next, &history, &EngineConfig::default()));
        assert_eq!(next.board.count(Color::Dark), 0);

        let mut session =
            Session::with_position(Arc::new(EngineConfig::default()), game.board, Color::Light);
        let status = session
            .apply_move(cell(2, 1), Candidate::capture(cell(4, 3)))
            .unwrap();
        assert_eq!(status, GameStatus::Won(Color::Light));
        assert_eq!(session.winner(), Some(Color::Light));
    }

    #[test]
    fn candidate_not_offered_is_rejected() {
        let game = GameState::new();
        let mut history = TurnHistory::new();

        let result = apply_move(&game, cell(1, 0), Candidate::simple(cell(2, 3)), &mut history);
        assert!(matches!(result, Err(MoveError::IllegalMove(_))));

        let result = apply_move(&game, cell(3, 0), Candidate::simple(cell(4, 1)), &mut history);
        assert_eq!(result, Err(MoveError::NoPieceAtSource(cell(3, 0))));
        assert!(Cell::new(8, 1).is_none());
    }

    #[test]
    fn start_and_reset_give_initial_position() {
        let mut session = Session::new(Arc::new(EngineConfig::default()));
        session.start();
        assert_eq!(session.turn(), Color::Light);
        assert_eq!(session.state().board, Board::new());
        assert!(session.state().started);

        session.machine_move().unwrap();
        session.machine_move().unwrap();
        assert_ne!(session.state().board, Board::new());

        session.start();
        assert_eq!(session.state().board, Board::new());
        assert!(session.history().log(Color::Light).is_empty());
        assert!(session.history().log(Color::Dark).is_empty());

        session.reset();
        assert_eq!(session.state(), &GameState::new());
    }

    #[test]
    fn machine_game_runs_to_a_result_or_the_cap() {
        let mut session = Session::new(Arc::new(EngineConfig::default()));
        session.start();

        for _ in 0..300 {
            if session.is_terminal() {
                break;
            }
            session.machine_move().unwrap();
            assert!(session.state().board.count(Color::Light) <= 8);
            assert!(session.state().board.count(Color::Dark) <= 8);
        }

        if session.is_terminal() {
            assert!(session.status().is_over());
        } else {
            assert_eq!(session.status(), GameStatus::Playing);
        }
    }
}
