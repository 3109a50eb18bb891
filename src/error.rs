use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not start the logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("terminal is {width}x{height}, the board needs at least {needed_width}x{needed_height}")]
    TerminalTooSmall {
        needed_width: u16,
        needed_height: u16,
        width: u16,
        height: u16,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
