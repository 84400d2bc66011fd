//! Persisted form of a game: the immutable mine layout, written once, plus the
//! move log that grows with every accepted move.

use crate::{
    cell::{Cell, CellId},
    game::GameId,
    moves::GameMove,
    view::CellState,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub id: CellId,
    pub is_mine: bool,
}

impl From<&Cell> for CellRecord {
    fn from(cell: &Cell) -> Self {
        Self {
            id: cell.id(),
            is_mine: cell.is_mine(),
        }
    }
}

impl From<CellRecord> for Cell {
    fn from(record: CellRecord) -> Self {
        Cell::with_id(record.id, record.is_mine)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub rows: usize,
    pub columns: usize,
    /// Row-major.
    pub cells: Vec<CellRecord>,
    #[serde(default)]
    pub moves: Vec<GameMove>,
    /// Only present for games rebuilt from a view snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<Vec<CellState>>,
}

impl GameRecord {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
