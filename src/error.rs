use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cell (y: {y}, x: {x}) is outside of {rows}x{columns} grid")]
    OutOfBounds {
        y: i64,
        x: i64,
        rows: usize,
        columns: usize,
    },
    #[error("cannot carve a {rows}x{columns} grid, both sides must be odd and at least 3")]
    InvalidSize { rows: usize, columns: usize },
    #[error("maze size {size} must be odd and at least 5")]
    BadSize { size: usize },
    #[error("entrance or exit could not be placed on the grid border")]
    DegenerateMaze,
    #[error("IO error; {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings file {path:?} is malformed; {source}")]
    Settings {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("race worker panicked")]
    WorkerPanicked,
}

pub type Result<T> = std::result::Result<T, Error>;
