use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Grid coordinate, stored as `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell(pub i32, pub i32);

impl Cell {
    /// Placeholder for an entrance or exit that could not be placed.
    pub const INVALID: Cell = Cell(-1, -1);
    pub const ZERO: Cell = Cell(0, 0);

    pub fn x(self) -> i32 {
        self.0
    }

    pub fn y(self) -> i32 {
        self.1
    }

    /// Builds a cell from `(y, x)` indices, the order grids are addressed in.
    pub fn at(y: usize, x: usize) -> Self {
        Cell(x as i32, y as i32)
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    pub fn neighbor(self, dir: Direction) -> Cell {
        self + dir.to_coord()
    }

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    /// Manhattan distance between two cells.
    pub fn distance(self, other: Cell) -> i32 {
        (self - other).abs_sum()
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, other: Cell) -> Cell {
        Cell(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Cell {
    type Output = Cell;

    fn sub(self, other: Cell) -> Cell {
        Cell(self.0 - other.0, self.1 - other.1)
    }
}

impl AddAssign for Cell {
    fn add_assign(&mut self, other: Cell) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl Mul<i32> for Cell {
    type Output = Cell;

    fn mul(self, other: i32) -> Cell {
        Cell(self.0 * other, self.1 * other)
    }
}

impl From<(i32, i32)> for Cell {
    fn from(tuple: (i32, i32)) -> Self {
        Cell(tuple.0, tuple.1)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(val: Cell) -> Self {
        (val.0, val.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Right,
    Up,
    Left,
}

impl Direction {
    /// Neighbor order both searchers use, so ties break the same way.
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
    ];

    pub fn to_coord(self) -> Cell {
        match self {
            Direction::Down => Cell(0, 1),
            Direction::Right => Cell(1, 0),
            Direction::Up => Cell(0, -1),
            Direction::Left => Cell(-1, 0),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
        }
    }
}
