use draughts_core::engine::config::EngineConfig;
use draughts_core::{GameStatus, Session};
use std::error::Error;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Games that have not finished by then are abandoned.
const MAX_PLIES: usize = 400;

fn load_config() -> Result<EngineConfig, Box<dyn Error>> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(EngineConfig::default());
    };
    let json = std::fs::read_to_string(&path)?;
    let config = EngineConfig::load_from_json(&json)?;
    tracing::info!("loaded engine config from {path}");
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(load_config()?);
    tracing::debug!(?config, "engine config");

    let mut session = Session::new(config);
    session.start();
    println!("{}\n", session.state().board.to_diagram());

    for ply in 1..=MAX_PLIES {
        if session.is_terminal() {
            break;
        }
        let mover = session.turn();
        match session.machine_move()? {
            Some(mv) => {
                println!("{ply}. {mover} {mv}");
                println!("{}\n", session.state().board.to_diagram());
            }
            None => tracing::info!(ply, %mover, "no legal move"),
        }
    }

    match session.status() {
        GameStatus::Playing => tracing::warn!("stopped after {MAX_PLIES} plies without a result"),
        status => tracing::info!(%status, "finished"),
    }
    Ok(())
}
