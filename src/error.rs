use crate::{
    cell::{CellId, Location},
    game::{GameId, GameStatus},
};
use std::fmt;

/// Which coordinate overflowed the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Columns,
    Rows,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Columns => "columns",
            Self::Rows => "rows",
        })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("cell with id {0} does not exist")]
    UnknownCell(CellId),

    #[error("{value} exceeded available {axis}")]
    OutOfBounds { axis: Axis, value: usize },

    #[error("neighbor({location}) for {id} already exists")]
    DuplicateNeighbor { id: CellId, location: Location },

    #[error("game(id: {id}) is already {status}")]
    GameComplete { id: GameId, status: GameStatus },

    #[error("expected {expected} cells for the grid, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("a grid needs at least one row and one column")]
    EmptyGrid,

    #[error("{rows}x{columns} cells do not fit in memory")]
    GridTooLarge { rows: usize, columns: usize },

    #[error("cell id {0} appears more than once")]
    DuplicateCell(CellId),

    #[error("mine probability must be in (0, 1], got {0}")]
    InvalidMineProbability(f64),

    #[error("game(id: {0}) does not exist")]
    NoRecord(GameId),

    #[error("move log changed underneath the caller: expected {expected} moves, found {actual}")]
    StaleMoveLog { expected: usize, actual: usize },

    #[error("can only replace game {expected} with a new version of the same game, got {actual}")]
    GameIdMismatch { expected: GameId, actual: GameId },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
