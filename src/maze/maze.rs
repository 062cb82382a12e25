use smallvec::SmallVec;

use crate::{
    cell::{Cell, Direction},
    error::{Error, Result},
    grid::Grid,
};

/// Carved grid together with its entrance and exit, both on the border.
///
/// Read only once built; searchers borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub(crate) grid: Grid,
    pub(crate) entrance: Cell,
    pub(crate) exit: Cell,
}

impl Maze {
    /// Wraps an already carved grid.
    ///
    /// Fails with [`Error::OutOfBounds`] when entrance or exit is not a cell of the grid.
    pub fn from_parts(grid: Grid, entrance: Cell, exit: Cell) -> Result<Self> {
        for cell in [entrance, exit] {
            if !grid.is_in_bounds(cell) {
                return Err(Error::OutOfBounds {
                    y: cell.y() as i64,
                    x: cell.x() as i64,
                    rows: grid.rows(),
                    columns: grid.columns(),
                });
            }
        }

        Ok(Maze {
            grid,
            entrance,
            exit,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn entrance(&self) -> Cell {
        self.entrance
    }

    pub fn exit(&self) -> Cell {
        self.exit
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// Number of room cells, the ones at odd `(y, x)`.
    pub fn room_count(&self) -> usize {
        (self.rows() / 2) * (self.columns() / 2)
    }

    /// Open neighbors of `cell`, in [`Direction::SEARCH_ORDER`].
    pub fn open_neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        Direction::SEARCH_ORDER
            .into_iter()
            .map(|dir| cell.neighbor(dir))
            .filter(|&n| self.grid.is_open(n))
            .collect()
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
