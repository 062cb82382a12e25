use std::collections::VecDeque;

use super::{PathSearcher, SearcherKind, Trace};
use crate::{
    cell::{Cell, Direction},
    grid::Grid,
};

/// Level order search, neighbors discovered down, right, up, left.
///
/// Cells are recorded when discovered, not when dequeued, and the search stops the moment the
/// exit is discovered, so the exit is always the last visited cell of a found trace.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl PathSearcher for BreadthFirst {
    fn kind(&self) -> SearcherKind {
        SearcherKind::BreadthFirst
    }

    fn search(&self, grid: &Grid, entrance: Cell, exit: Cell) -> Trace {
        let Some(start) = grid.cell_to_idx(entrance).filter(|_| grid.is_open(entrance)) else {
            return Trace::not_found(self.kind(), Vec::new());
        };

        let mut visited = vec![false; grid.len()];
        let mut parents: Vec<Option<Cell>> = vec![None; grid.len()];
        let mut trace = vec![entrance];
        visited[start] = true;

        if entrance == exit {
            return Trace::found(self.kind(), trace, vec![entrance]);
        }

        let mut queue = VecDeque::from([entrance]);
        while let Some(cell) = queue.pop_front() {
            for dir in Direction::SEARCH_ORDER {
                let neighbor = cell.neighbor(dir);
                let Some(i) = grid.cell_to_idx(neighbor) else {
                    continue;
                };
                if visited[i] || !grid.is_open(neighbor) {
                    continue;
                }

                visited[i] = true;
                parents[i] = Some(cell);
                trace.push(neighbor);

                if neighbor == exit {
                    let path = walk_back(grid, &parents, exit);
                    return Trace::found(self.kind(), trace, path);
                }

                queue.push_back(neighbor);
            }
        }

        Trace::not_found(self.kind(), trace)
    }
}

fn walk_back(grid: &Grid, parents: &[Option<Cell>], exit: Cell) -> Vec<Cell> {
    let mut path = vec![exit];
    let mut current = exit;
    while let Some(parent) = grid.cell_to_idx(current).and_then(|i| parents[i]) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::FeatureState;

    fn open_room(rows: usize, columns: usize) -> Grid {
        let mut grid = Grid::new(rows, columns);
        for y in 1..rows - 1 {
            for x in 1..columns - 1 {
                grid.set(y, x, FeatureState::Open).unwrap();
            }
        }
        grid
    }

    #[test]
    fn expands_in_levels() {
        let grid = open_room(5, 5);
        let trace = BreadthFirst.search(&grid, Cell(1, 1), Cell(3, 3));

        assert!(trace.is_found());
        assert_eq!(
            trace.visited(),
            &[
                Cell(1, 1),
                Cell(1, 2),
                Cell(2, 1),
                Cell(1, 3),
                Cell(2, 2),
                Cell(3, 1),
                Cell(2, 3),
                Cell(3, 2),
                Cell(3, 3),
            ]
        );
        assert_eq!(trace.last(), Some(Cell(3, 3)));
    }

    #[test]
    fn path_is_shortest() {
        let grid = open_room(7, 9);
        let trace = BreadthFirst.search(&grid, Cell(1, 1), Cell(7, 5));
        let path = trace.path();

        assert_eq!(path.first(), Some(&Cell(1, 1)));
        assert_eq!(path.last(), Some(&Cell(7, 5)));
        assert_eq!(path.len() as i32 - 1, Cell(1, 1).distance(Cell(7, 5)));
        for pair in path.windows(2) {
            assert_eq!(pair[0].distance(pair[1]), 1);
        }
    }

    #[test]
    fn exhausts_when_exit_unreachable() {
        let grid = open_room(4, 4);
        let trace = BreadthFirst.search(&grid, Cell(1, 1), Cell(0, 0));
        assert!(!trace.is_found());
        assert_eq!(trace.len(), 4);
    }
}
