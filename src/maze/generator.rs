use log::debug;

use super::Maze;
use crate::{
    cell::{Cell, Direction},
    error::{Error, Result},
    grid::Grid,
    random::RandomSource,
};

/// Randomized backtracking carver.
///
/// Only cells at odd `(y, x)` are rooms; the even cells between two rooms are opened to join
/// them, so a wall always remains between parallel corridors. The result is a spanning tree
/// over all rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeGenerator {
    rows: usize,
    columns: usize,
}

struct Frame {
    cell: Cell,
    dirs: [Direction; 4],
    next: usize,
}

impl Frame {
    fn new<R: RandomSource + ?Sized>(cell: Cell, rng: &mut R) -> Self {
        let mut dirs = Direction::SEARCH_ORDER;
        rng.shuffle_directions(&mut dirs);
        Frame { cell, dirs, next: 0 }
    }
}

impl MazeGenerator {
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        let valid = |n: usize| n >= 3 && n % 2 == 1;
        if !valid(rows) || !valid(columns) {
            return Err(Error::InvalidSize { rows, columns });
        }

        Ok(Self { rows, columns })
    }

    pub fn square(size: usize) -> Result<Self> {
        Self::new(size, size)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Maze> {
        let mut grid = Grid::new(self.rows, self.columns);

        let start = self.random_room(rng);
        let carved = self.carve(&mut grid, start, rng)?;
        debug!(
            "carved {} rooms into {}x{} grid starting at {:?}",
            carved, self.rows, self.columns, start
        );

        let entrance = add_entrance(&mut grid)?.ok_or(Error::DegenerateMaze)?;
        let exit = add_exit(&mut grid)?.ok_or(Error::DegenerateMaze)?;

        Ok(Maze {
            grid,
            entrance,
            exit,
        })
    }

    fn random_room<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Cell {
        let x = rng.below(self.columns / 2) * 2 + 1;
        let y = rng.below(self.rows / 2) * 2 + 1;
        Cell::at(y, x)
    }

    fn is_room(&self, cell: Cell) -> bool {
        let (x, y): (i32, i32) = cell.into();
        x >= 1 && y >= 1 && (x as usize) < self.columns - 1 && (y as usize) < self.rows - 1
    }

    /// Carves from `start` until every room is reached, returns the number of rooms opened.
    ///
    /// Each frame keeps its own direction order, so popping a frame resumes its parent exactly
    /// where a recursive carve would.
    fn carve<R: RandomSource + ?Sized>(
        &self,
        grid: &mut Grid,
        start: Cell,
        rng: &mut R,
    ) -> Result<usize> {
        let mut stack = Vec::with_capacity((self.rows / 2) * (self.columns / 2));
        grid.open(start)?;
        stack.push(Frame::new(start, rng));
        let mut carved = 1;

        while let Some(frame) = stack.last_mut() {
            let Some(&dir) = frame.dirs.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            let cell = frame.cell;
            let target = cell + dir.to_coord() * 2;
            if !self.is_room(target) || grid.is_open(target) {
                continue;
            }

            grid.open(cell.neighbor(dir))?;
            grid.open(target)?;
            carved += 1;
            stack.push(Frame::new(target, rng));
        }

        Ok(carved)
    }
}

/// Opens the top border above the first open cell of the second row.
fn add_entrance(grid: &mut Grid) -> Result<Option<Cell>> {
    for x in 0..grid.columns() - 1 {
        if grid.at(1, x)?.is_open() {
            let entrance = Cell::at(0, x);
            grid.open(entrance)?;
            return Ok(Some(entrance));
        }
    }

    Ok(None)
}

/// Opens the bottom border below the last open cell of the second to last row.
fn add_exit(grid: &mut Grid) -> Result<Option<Cell>> {
    let (last, inner) = (grid.rows() - 1, grid.rows() - 2);
    for x in (1..grid.columns()).rev() {
        if grid.at(inner, x)?.is_open() {
            let exit = Cell::at(last, x);
            grid.open(exit)?;
            return Ok(Some(exit));
        }
    }

    Ok(None)
}
