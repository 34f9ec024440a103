mod food;
mod game;
mod grid;
mod input;
mod render;
mod session;
mod snake;
mod term;

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut game = game::SnakeGame::new()?;
    game.initialize()?;

    loop {
        // The play loop handles CTRL+C itself and exits cleanly
        game.play()?;
    }
}
