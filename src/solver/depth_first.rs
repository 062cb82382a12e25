use super::{PathSearcher, SearcherKind, Trace};
use crate::{
    cell::{Cell, Direction},
    grid::Grid,
};

/// Depth-first search trying neighbors down, right, up, left.
///
/// Uses an explicit stack of `(cell, next direction)` frames, which visits cells in the same
/// order as the recursive formulation without being bounded by the call stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl PathSearcher for DepthFirst {
    fn kind(&self) -> SearcherKind {
        SearcherKind::DepthFirst
    }

    fn search(&self, grid: &Grid, entrance: Cell, exit: Cell) -> Trace {
        let Some(start) = grid.cell_to_idx(entrance).filter(|_| grid.is_open(entrance)) else {
            return Trace::not_found(self.kind(), Vec::new());
        };

        let mut visited = vec![false; grid.len()];
        let mut trace = vec![entrance];
        visited[start] = true;

        if entrance == exit {
            return Trace::found(self.kind(), trace, vec![entrance]);
        }

        let mut stack: Vec<(Cell, usize)> = vec![(entrance, 0)];
        while let Some((cell, next)) = stack.last_mut() {
            let Some(&dir) = Direction::SEARCH_ORDER.get(*next) else {
                stack.pop();
                continue;
            };
            *next += 1;

            let neighbor = cell.neighbor(dir);
            let Some(i) = grid.cell_to_idx(neighbor) else {
                continue;
            };
            if visited[i] || !grid.is_open(neighbor) {
                continue;
            }

            visited[i] = true;
            trace.push(neighbor);
            stack.push((neighbor, 0));

            if neighbor == exit {
                let path = stack.iter().map(|&(cell, _)| cell).collect();
                return Trace::found(self.kind(), trace, path);
            }
        }

        Trace::not_found(self.kind(), trace)
    }
}
