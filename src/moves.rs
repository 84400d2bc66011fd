use crate::cell::CellId;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Kind of action a player takes on a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MoveKind {
    Open,
    Flag,
    Unflag,
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "OPEN",
            Self::Flag => "FLAG",
            Self::Unflag => "UNFLAG",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown move kind {0:?}, expected one of open, flag, unflag")]
pub struct ParseMoveKindError(String);

impl FromStr for MoveKind {
    type Err = ParseMoveKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open" | "o" => Ok(Self::Open),
            "flag" | "f" => Ok(Self::Flag),
            "unflag" | "u" => Ok(Self::Unflag),
            _ => Err(ParseMoveKindError(s.to_owned())),
        }
    }
}

/// One entry of a game's append-only move log.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameMove {
    #[serde(rename = "type")]
    pub kind: MoveKind,
    pub cell_id: CellId,
}

impl GameMove {
    pub const fn new(kind: MoveKind, cell_id: CellId) -> Self {
        Self { kind, cell_id }
    }
}

/// A move addressed by grid coordinates, as submitted by a caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    #[serde(rename = "type")]
    pub kind: MoveKind,
    pub column: usize,
    pub row: usize,
}

impl MoveRequest {
    pub const fn new(kind: MoveKind, column: usize, row: usize) -> Self {
        Self { kind, column, row }
    }
}
