use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Stable identity of a cell for the lifetime of a game.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(Uuid);

impl CellId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for CellId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CellId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// One of the eight positional neighbor slots of a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl Location {
    /// Clockwise from the top left corner. This is also the order in which
    /// neighbors are reported.
    pub const ALL: [Location; 8] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
    ];

    pub const fn opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::Top => Self::Bottom,
            Self::TopRight => Self::BottomLeft,
            Self::Right => Self::Left,
            Self::BottomRight => Self::TopLeft,
            Self::Bottom => Self::Top,
            Self::BottomLeft => Self::TopRight,
            Self::Left => Self::Right,
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TopLeft => "top_left",
            Self::Top => "top",
            Self::TopRight => "top_right",
            Self::Right => "right",
            Self::BottomRight => "bottom_right",
            Self::Bottom => "bottom",
            Self::BottomLeft => "bottom_left",
            Self::Left => "left",
        })
    }
}

/// Immutable part of a cell: who it is, whether it hides a mine, and where its
/// neighbors live in the owning [`Grid`](crate::Grid).
///
/// Neighbor slots hold arena indices rather than references, so the cyclic
/// adjacency graph never needs shared ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    id: CellId,
    is_mine: bool,
    neighbors: [Option<usize>; 8],
}

impl Cell {
    pub fn new(is_mine: bool) -> Self {
        Self::with_id(CellId::new(), is_mine)
    }

    pub fn with_id(id: CellId, is_mine: bool) -> Self {
        Self {
            id,
            is_mine,
            neighbors: [None; 8],
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub fn neighbor(&self, location: Location) -> Option<usize> {
        self.neighbors[location.slot()]
    }

    /// Filled slots in [`Location::ALL`] order.
    pub fn neighbor_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.neighbors.iter().filter_map(|slot| *slot)
    }

    pub fn is_border(&self) -> bool {
        self.neighbor_indices().count() < 8
    }

    /// Whether `index` may be stored at `location` without clobbering a
    /// different neighbor.
    pub(crate) fn accepts(&self, location: Location, index: usize) -> bool {
        self.neighbor(location).map_or(true, |current| current == index)
    }

    pub(crate) fn set_neighbor(&mut self, location: Location, index: usize) {
        self.neighbors[location.slot()] = Some(index);
    }
}
