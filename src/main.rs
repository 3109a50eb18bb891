mod apple;
mod board;
mod clock;
mod config;
mod error;
mod game;
mod input;
mod render;
mod snake;
mod term;

use std::{fs::File, process::exit};

use log::{error, info};
use simplelog::WriteLogger;

use crate::clock::FixedClock;
use crate::config::Config;
use crate::error::Result;
use crate::game::SnakeGame;
use crate::input::TermInput;
use crate::term::TermRenderer;

/// Pixel coordinates of a grid cell's top-left corner.
pub type Cell = (i32, i32);

fn main() {
    let config = Config::from_env();

    if let Err(e) = run(&config) {
        error!("{}", e);
        eprintln!("snake: {}", e);
        exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    WriteLogger::init(config.log_level, simplelog::Config::default(), File::create(&config.log_file)?)?;
    config.validate()?;

    let board = config.board();
    info!("Starting on a {}x{} board", board.columns(), board.rows());

    let mut renderer = TermRenderer::new(board, config.palette.clone())?;
    if let Err(e) = renderer.setup() {
        let _ = renderer.restore();
        return Err(e);
    }

    let mut rng = rand::thread_rng();
    let clock = FixedClock::new(config.ticks_per_second);
    let mut game = SnakeGame::new(config, renderer, TermInput, clock, &mut rng);

    // The terminal goes back to normal whether or not the game failed
    let res = game.run(&mut rng);
    game.into_renderer().restore()?;
    res
}
