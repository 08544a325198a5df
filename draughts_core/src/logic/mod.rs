pub mod board;
pub mod executor;
pub mod game;
pub mod generator;
pub mod rules;
pub mod session;
pub mod status;
