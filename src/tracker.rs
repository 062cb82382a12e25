use std::{
    fmt,
    ops::{BitOr, BitOrAssign},
    sync::atomic::{AtomicU8, Ordering},
};

use crate::{
    cell::Cell,
    error::{Error, Result},
    solver::SearcherKind,
};

/// Set of searchers that visited a cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Visits(u8);

impl Visits {
    pub const NONE: Visits = Visits(0);
    pub const DEPTH_FIRST: Visits = Visits(1);
    pub const BREADTH_FIRST: Visits = Visits(2);
    pub const BOTH: Visits = Visits(3);

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, kind: SearcherKind) -> bool {
        self.0 & Visits::from(kind).0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<SearcherKind> for Visits {
    fn from(kind: SearcherKind) -> Self {
        match kind {
            SearcherKind::DepthFirst => Visits::DEPTH_FIRST,
            SearcherKind::BreadthFirst => Visits::BREADTH_FIRST,
        }
    }
}

impl BitOr for Visits {
    type Output = Visits;

    fn bitor(self, other: Visits) -> Visits {
        Visits(self.0 | other.0)
    }
}

impl BitOrAssign for Visits {
    fn bitor_assign(&mut self, other: Visits) {
        self.0 |= other.0;
    }
}

impl fmt::Debug for Visits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Visits::NONE => "None",
            Visits::DEPTH_FIRST => "DepthFirst",
            Visits::BREADTH_FIRST => "BreadthFirst",
            _ => "Both",
        };
        write!(f, "Visits({name})")
    }
}

/// Per cell record of which searchers got there, shared by the race workers.
///
/// Marks are atomic read-modify-write operations, so reads never block and never observe a
/// half applied mark.
pub struct VisitTracker {
    flags: Vec<AtomicU8>,
    rows: usize,
    columns: usize,
}

impl VisitTracker {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            flags: (0..rows * columns).map(|_| AtomicU8::new(0)).collect(),
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

    fn idx(&self, cell: Cell) -> Result<usize> {
        let Cell(x, y) = cell;
        if x < 0 || y < 0 || x as usize >= self.columns || y as usize >= self.rows {
            return Err(Error::OutOfBounds {
                y: y as i64,
                x: x as i64,
                rows: self.rows,
                columns: self.columns,
            });
        }

        Ok(y as usize * self.columns + x as usize)
    }

    /// Adds `kind` to the cell's visits and returns the combined set.
    pub fn mark(&self, cell: Cell, kind: SearcherKind) -> Result<Visits> {
        let bit = Visits::from(kind).bits();
        let prev = self.flags[self.idx(cell)?].fetch_or(bit, Ordering::AcqRel);
        Ok(Visits(prev | bit))
    }

    pub fn read(&self, cell: Cell) -> Result<Visits> {
        Ok(Visits(self.flags[self.idx(cell)?].load(Ordering::Acquire)))
    }

    /// Number of cells visited by `kind`.
    pub fn count(&self, kind: SearcherKind) -> usize {
        let bit = Visits::from(kind).bits();
        self.flags
            .iter()
            .filter(|f| f.load(Ordering::Acquire) & bit != 0)
            .count()
    }
}

impl fmt::Debug for VisitTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisitTracker")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("depth_first", &self.count(SearcherKind::DepthFirst))
            .field("breadth_first", &self.count(SearcherKind::BreadthFirst))
            .finish()
    }
}
