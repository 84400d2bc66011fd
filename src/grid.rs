use crate::{
    cell::{Cell, CellId, Location},
    error::{Axis, Error, Result},
};
use rand::Rng;
use std::collections::HashMap;

/// Arena that owns every cell of a game, laid out row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Vec<Cell>,
    // number of rows on the grid
    rows: usize,
    // number of columns on the grid
    columns: usize,
    // cell id to arena index
    lookup: HashMap<CellId, usize>,
}

fn index_from_coord((column, row): (usize, usize), columns: usize) -> usize {
    columns * row + column
}

fn coord_from_index(index: usize, columns: usize) -> (usize, usize) {
    (index % columns, index / columns)
}

/// Produces `count` cells, each a mine with probability `mine_probability`.
///
/// Layouts without a single mine are thrown away and drawn again, since a game
/// without mines is won before it starts.
pub fn generate_cells<R>(count: usize, mine_probability: f64, rng: &mut R) -> Result<Vec<Cell>>
where
    R: Rng + ?Sized,
{
    if count == 0 {
        return Err(Error::EmptyGrid);
    }
    if !(mine_probability > 0.0 && mine_probability <= 1.0) {
        return Err(Error::InvalidMineProbability(mine_probability));
    }

    let mut attempt = 1usize;
    loop {
        let cells = (0..count)
            .map(|_| Cell::new(rng.gen_bool(mine_probability)))
            .collect::<Vec<_>>();

        if cells.iter().any(Cell::is_mine) {
            return Ok(cells);
        }

        log::debug!("generated {count} cells without a mine, retrying (attempt {attempt})");
        attempt += 1;
    }
}

/// Wires the eight-way adjacency of `cells`, which must be in row-major order.
///
/// Only the right, top, top right and top left links are made explicitly, the
/// opposite links follow from [`Grid::add`].
pub fn associate_cells(cells: Vec<Cell>, rows: usize, columns: usize) -> Result<Grid> {
    let mut grid = Grid::unlinked(cells, rows, columns)?;

    for index in 0..grid.len() {
        let (column, row) = coord_from_index(index, columns);
        let has_right = column + 1 < columns;

        if has_right {
            grid.add(index, Location::Right, index + 1)?;
        }
        if row > 0 {
            let above = index - columns;
            grid.add(index, Location::Top, above)?;
            if has_right {
                grid.add(index, Location::TopRight, above + 1)?;
            }
            if column > 0 {
                grid.add(index, Location::TopLeft, above - 1)?;
            }
        }
    }

    Ok(grid)
}

impl Grid {
    fn unlinked(cells: Vec<Cell>, rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(Error::EmptyGrid);
        }

        let expected = rows
            .checked_mul(columns)
            .ok_or(Error::GridTooLarge { rows, columns })?;
        if cells.len() != expected {
            return Err(Error::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }

        let mut lookup = HashMap::with_capacity(cells.len());
        for (index, cell) in cells.iter().enumerate() {
            if lookup.insert(cell.id(), index).is_some() {
                return Err(Error::DuplicateCell(cell.id()));
            }
        }

        Ok(Self {
            cells,
            rows,
            columns,
            lookup,
        })
    }

    /// Links `index` to `other` at `location` and `other` back to `index` at
    /// the opposite location.
    ///
    /// Re-linking the same pair is a no-op. Neither side is touched when one of
    /// the two slots already holds a different cell.
    pub(crate) fn add(&mut self, index: usize, location: Location, other: usize) -> Result<()> {
        let opposite = location.opposite();

        if !self.cells[index].accepts(location, other) {
            return Err(Error::DuplicateNeighbor {
                id: self.cells[index].id(),
                location,
            });
        }
        if !self.cells[other].accepts(opposite, index) {
            return Err(Error::DuplicateNeighbor {
                id: self.cells[other].id(),
                location: opposite,
            });
        }

        self.cells[index].set_neighbor(location, other);
        self.cells[other].set_neighbor(opposite, index);
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn index_of(&self, id: CellId) -> Option<usize> {
        self.lookup.get(&id).copied()
    }

    /// Row-major index of `(column, row)`. Columns are checked before rows.
    pub fn index_from_coord(&self, column: usize, row: usize) -> Result<usize> {
        if column >= self.columns {
            return Err(Error::OutOfBounds {
                axis: Axis::Columns,
                value: column,
            });
        }
        if row >= self.rows {
            return Err(Error::OutOfBounds {
                axis: Axis::Rows,
                value: row,
            });
        }
        Ok(index_from_coord((column, row), self.columns))
    }

    pub fn coord_from_index(&self, index: usize) -> (usize, usize) {
        coord_from_index(index, self.columns)
    }

    /// # Panics
    ///
    /// Panics if `index` is not below [`Grid::len`].
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.cells[index].neighbor_indices()
    }

    /// Number of mines around `index`, at most 8.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Grid::len`].
    pub fn mine_count(&self, index: usize) -> u8 {
        let count = self
            .neighbors(index)
            .fold(0, |total, neighbor| total + u8::from(self.cells[neighbor].is_mine()));
        debug_assert!(count <= 8);
        count
    }

    /// # Panics
    ///
    /// Panics if `index` is not below [`Grid::len`].
    pub fn is_border(&self, index: usize) -> bool {
        self.cells[index].is_border()
    }

    /// Neither a mine nor next to one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Grid::len`].
    pub fn is_blank(&self, index: usize) -> bool {
        !self.cells[index].is_mine() && self.mine_count(index) == 0
    }

    pub fn mine_total(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_mine()).count()
    }
}
