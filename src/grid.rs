use std::{fmt, mem};

use crate::{
    cell::Cell,
    error::{Error, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeatureState {
    Open,
    #[default]
    Wall,
}

impl FeatureState {
    pub fn is_open(self) -> bool {
        self == FeatureState::Open
    }
}

/// Fixed size `rows x columns` matrix of [`FeatureState`]s, stored row by row in one buffer.
///
/// `Clone` duplicates the whole buffer. [`Grid::take`] moves the contents out and leaves an
/// empty `0x0` grid behind.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Grid {
    buf: Vec<FeatureState>,
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Creates a grid with every cell set to [`FeatureState::Wall`].
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            buf: vec![FeatureState::Wall; rows * columns],
            rows,
            columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn idx(&self, y: usize, x: usize) -> Result<usize> {
        if y >= self.rows || x >= self.columns {
            return Err(Error::OutOfBounds {
                y: y as i64,
                x: x as i64,
                rows: self.rows,
                columns: self.columns,
            });
        }

        Ok(y * self.columns + x)
    }

    pub fn cell_to_idx(&self, cell: Cell) -> Option<usize> {
        if !cell.all_non_negative() {
            return None;
        }

        self.idx(cell.y() as usize, cell.x() as usize).ok()
    }

    pub fn idx_to_cell(&self, idx: usize) -> Option<Cell> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Cell::at(idx / self.columns, idx % self.columns))
    }

    pub fn at(&self, y: usize, x: usize) -> Result<FeatureState> {
        self.idx(y, x).map(|i| self.buf[i])
    }

    pub fn set(&mut self, y: usize, x: usize, state: FeatureState) -> Result<()> {
        let i = self.idx(y, x)?;
        self.buf[i] = state;
        Ok(())
    }

    /// Same as [`Grid::at`], but addressed by [`Cell`]; anything outside reads as `None`.
    pub fn get(&self, cell: Cell) -> Option<FeatureState> {
        self.cell_to_idx(cell).map(|i| self.buf[i])
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(FeatureState::is_open)
    }

    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        self.cell_to_idx(cell).is_some()
    }

    pub fn is_on_border(&self, cell: Cell) -> bool {
        self.is_in_bounds(cell)
            && (cell.x() == 0
                || cell.y() == 0
                || cell.x() as usize == self.columns - 1
                || cell.y() as usize == self.rows - 1)
    }

    pub(crate) fn open(&mut self, cell: Cell) -> Result<()> {
        self.set(cell.y() as usize, cell.x() as usize, FeatureState::Open)
    }

    /// Iterates over all cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_cell(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, FeatureState)> + '_ {
        self.cells().zip(self.buf.iter().copied())
    }

    pub fn take(&mut self) -> Grid {
        mem::take(self)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.columns)?;
        for row in self.buf.chunks(self.columns.max(1)) {
            for state in row {
                f.write_str(if state.is_open() { "." } else { "#" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
