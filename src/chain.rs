use crate::grid::Grid;
use bit_set::BitSet;
use std::collections::VecDeque;

/// Cells revealed as a side effect of opening `origin`.
///
/// Expansion only continues through blank cells (no mine, no mine neighbors).
/// Numbered cells and mines at the edge of the region are included but not
/// expanded. The origin is not part of its own chain, and an origin that is a
/// mine or numbered has an empty chain. Indices come back in discovery order.
///
/// # Panics
///
/// If `origin` is not an index of `grid`.
pub fn neighbors_chain(grid: &Grid, origin: usize) -> Vec<usize> {
    if !grid.is_blank(origin) {
        return Vec::new();
    }

    let mut seen = BitSet::with_capacity(grid.len());
    seen.insert(origin);

    let mut pending = [origin].iter().copied().collect::<VecDeque<_>>();
    let mut chain = Vec::new();

    while let Some(index) = pending.pop_front() {
        for neighbor in grid.neighbors(index) {
            if seen.insert(neighbor) {
                chain.push(neighbor);

                if grid.is_blank(neighbor) {
                    pending.push_back(neighbor);
                }
            }
        }
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cell::Cell, grid::associate_cells};

    fn grid(rows: usize, columns: usize, mines: &[bool]) -> Grid {
        associate_cells(mines.iter().copied().map(Cell::new).collect(), rows, columns).unwrap()
    }

    fn sorted(mut chain: Vec<usize>) -> Vec<usize> {
        chain.sort_unstable();
        chain
    }

    // | 0 | 0 | 1 | M |
    #[test]
    fn row_chain_stops_at_numbered_cell() {
        let grid = grid(1, 4, &[false, false, false, true]);

        assert_eq!(sorted(neighbors_chain(&grid, 0)), vec![1, 2]);
        assert_eq!(sorted(neighbors_chain(&grid, 1)), vec![0, 2]);
        assert!(neighbors_chain(&grid, 2).is_empty());
        assert!(neighbors_chain(&grid, 3).is_empty());
    }

    // | 3 | M | 2 | 0 |
    // | M | M | 2 | 0 |
    // | 2 | 2 | 1 | 0 |
    // | 0 | 0 | 0 | 0 |
    #[test]
    fn chain_covers_the_empty_region_and_its_rim() {
        #[rustfmt::skip]
        let grid = grid(4, 4, &[
            false, true, false, false,
            true, true, false, false,
            false, false, false, false,
            false, false, false, false,
        ]);

        assert_eq!(
            sorted(neighbors_chain(&grid, 15)),
            vec![2, 3, 6, 7, 8, 9, 10, 11, 12, 13, 14]
        );
        assert!(neighbors_chain(&grid, 0).is_empty());
        assert!(neighbors_chain(&grid, 1).is_empty());
    }

    #[test]
    fn chain_never_crosses_mines_or_numbers() {
        // a wall of mines down the middle column splits the board
        #[rustfmt::skip]
        let grid = grid(3, 5, &[
            false, false, true, false, false,
            false, false, true, false, false,
            false, false, true, false, false,
        ]);

        let chain = sorted(neighbors_chain(&grid, 0));
        assert_eq!(chain, vec![1, 5, 6, 10, 11]);
        for index in chain {
            assert!(!grid.cells()[index].is_mine());
            let expands = grid.is_blank(index);
            let (column, _) = grid.coord_from_index(index);
            assert!(expands || column == 1);
        }
    }

    #[test]
    fn large_empty_board_does_not_recurse() {
        let mut mines = vec![false; 300 * 300];
        mines[0] = true;
        let grid = grid(300, 300, &mines);

        // everything except the mine and the origin
        assert_eq!(neighbors_chain(&grid, 300 * 300 - 1).len(), 300 * 300 - 2);
    }
}
