pub mod engine;
pub mod logic;
pub mod worker;

pub use engine::search::choose_move;
pub use engine::{Move, SearchOutcome};
pub use logic::board::{Board, Cell, Color, Piece, PieceKind};
pub use logic::executor::apply_move;
pub use logic::game::GameState;
pub use logic::generator::{legal_moves, Candidate};
pub use logic::rules::MoveError;
pub use logic::session::Session;
pub use logic::status::{is_terminal, GameStatus, TurnHistory};
