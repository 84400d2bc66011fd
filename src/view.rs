use crate::{
    chain::neighbors_chain,
    error::{Error, Result},
    grid::Grid,
    moves::{GameMove, MoveKind},
};
use bit_set::BitSet;
use serde::{Deserialize, Serialize};

/// Observable state of a single cell.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellState {
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub is_flagged: bool,
}

impl CellState {
    pub const fn open() -> Self {
        Self {
            is_open: true,
            is_flagged: false,
        }
    }

    pub const fn flagged() -> Self {
        Self {
            is_open: false,
            is_flagged: true,
        }
    }
}

/// Read-only projection of a cell as the player currently sees it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CellView {
    index: usize,
    is_mine: bool,
    mine_count: u8,
    state: CellState,
}

impl CellView {
    fn new(grid: &Grid, index: usize, state: CellState) -> Self {
        Self {
            index,
            is_mine: grid.cells()[index].is_mine(),
            mine_count: grid.mine_count(index),
            state,
        }
    }

    /// Arena index of the viewed cell.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn is_flagged(&self) -> bool {
        self.state.is_flagged
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    /// `'F'` for a flag, `'M'` for an open mine, the mine count digit for any
    /// other open cell and `' '` for the rest. A flag hides everything else.
    pub fn status(&self) -> char {
        match self.state {
            CellState {
                is_flagged: true, ..
            } => 'F',
            CellState { is_open: true, .. } if self.is_mine => 'M',
            CellState { is_open: true, .. } => char::from(b'0' + self.mine_count),
            CellState { .. } => ' ',
        }
    }
}

/// Folds `moves` over `initial` (or an all-closed grid) into one view per cell.
///
/// A cell is flagged iff the last flag-related move for it is a flag. Opening a
/// cell opens its [chain](neighbors_chain) too. Opened cells never close again.
pub fn derive_views(grid: &Grid, initial: Option<&[CellState]>, moves: &[GameMove]) -> Result<Vec<CellView>> {
    let mut states = match initial {
        Some(initial) if initial.len() != grid.len() => {
            return Err(Error::CellCountMismatch {
                expected: grid.len(),
                actual: initial.len(),
            })
        }
        Some(initial) => initial.to_vec(),
        None => vec![CellState::default(); grid.len()],
    };

    // origins whose chain has already been applied
    let mut expanded = BitSet::with_capacity(grid.len());

    for GameMove { kind, cell_id } in moves {
        let index = grid.index_of(*cell_id).ok_or(Error::UnknownCell(*cell_id))?;

        match kind {
            MoveKind::Flag => states[index].is_flagged = true,
            MoveKind::Unflag => states[index].is_flagged = false,
            MoveKind::Open => {
                if expanded.insert(index) {
                    states[index].is_open = true;
                    for revealed in neighbors_chain(grid, index) {
                        states[revealed].is_open = true;
                    }
                }
            }
        }
    }

    Ok(states
        .into_iter()
        .enumerate()
        .map(|(index, state)| CellView::new(grid, index, state))
        .collect())
}
