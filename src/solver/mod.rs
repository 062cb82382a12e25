mod breadth_first;
mod depth_first;

use std::fmt;

pub use breadth_first::BreadthFirst;
pub use depth_first::DepthFirst;

use crate::{cell::Cell, grid::Grid, maze::Maze};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearcherKind {
    DepthFirst,
    BreadthFirst,
}

impl SearcherKind {
    pub const ALL: [SearcherKind; 2] = [SearcherKind::DepthFirst, SearcherKind::BreadthFirst];

    pub fn searcher(self) -> &'static dyn PathSearcher {
        match self {
            SearcherKind::DepthFirst => &DepthFirst,
            SearcherKind::BreadthFirst => &BreadthFirst,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SearcherKind::DepthFirst => "depth-first",
            SearcherKind::BreadthFirst => "breadth-first",
        }
    }
}

impl fmt::Display for SearcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a searcher did during one run.
///
/// `visited` lists every cell in the order the searcher touched it, dead ends included.
/// `path` is the entrance to exit route, empty unless the exit was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    kind: SearcherKind,
    visited: Vec<Cell>,
    path: Vec<Cell>,
    found: bool,
}

impl Trace {
    pub(crate) fn found(kind: SearcherKind, visited: Vec<Cell>, path: Vec<Cell>) -> Self {
        Trace {
            kind,
            visited,
            path,
            found: true,
        }
    }

    pub(crate) fn not_found(kind: SearcherKind, visited: Vec<Cell>) -> Self {
        Trace {
            kind,
            visited,
            path: Vec::new(),
            found: false,
        }
    }

    pub fn kind(&self) -> SearcherKind {
        self.kind
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    pub fn visited(&self) -> &[Cell] {
        &self.visited
    }

    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    pub fn last(&self) -> Option<Cell> {
        self.visited.last().copied()
    }
}

/// Finds a way from entrance to exit over the open cells of a grid.
///
/// Implementations never mutate the grid and keep their visited set private, so two of them
/// can search the same maze at once.
pub trait PathSearcher: fmt::Debug + Sync + Send {
    fn kind(&self) -> SearcherKind;

    /// Runs the search. An entrance that is not an open cell of `grid` (including
    /// [`Cell::INVALID`]) yields an empty, not found trace.
    fn search(&self, grid: &Grid, entrance: Cell, exit: Cell) -> Trace;

    fn solve(&self, maze: &Maze) -> Trace {
        self.search(maze.grid(), maze.entrance(), maze.exit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::FeatureState;

    fn corridor() -> Maze {
        let mut grid = Grid::new(3, 3);
        for y in 0..3 {
            grid.set(y, 1, FeatureState::Open).unwrap();
        }
        Maze::from_parts(grid, Cell(1, 0), Cell(1, 2)).unwrap()
    }

    #[test]
    fn both_searchers_walk_the_corridor() {
        let maze = corridor();
        for kind in SearcherKind::ALL {
            let trace = kind.searcher().solve(&maze);
            assert_eq!(trace.kind(), kind);
            assert!(trace.is_found());
            assert_eq!(trace.visited(), &[Cell(1, 0), Cell(1, 1), Cell(1, 2)]);
            assert_eq!(trace.path(), &[Cell(1, 0), Cell(1, 1), Cell(1, 2)]);
        }
    }

    #[test]
    fn invalid_entrance_is_not_found() {
        let maze = corridor();
        for kind in SearcherKind::ALL {
            let trace = kind.searcher().search(maze.grid(), Cell::INVALID, Cell::INVALID);
            assert!(!trace.is_found());
            assert!(trace.is_empty());
            assert!(trace.path().is_empty());
        }
    }

    #[test]
    fn entrance_equal_to_exit() {
        let maze = corridor();
        for kind in SearcherKind::ALL {
            let trace = kind.searcher().search(maze.grid(), Cell(1, 1), Cell(1, 1));
            assert!(trace.is_found());
            assert_eq!(trace.visited(), &[Cell(1, 1)]);
            assert_eq!(trace.path(), &[Cell(1, 1)]);
        }
    }

    #[test]
    fn names() {
        assert_eq!(SearcherKind::DepthFirst.to_string(), "depth-first");
        assert_eq!(SearcherKind::BreadthFirst.name(), "breadth-first");
    }
}
