use std::{
    sync::{Mutex, PoisonError},
    thread,
    time::Duration,
};

use log::{debug, info};

use crate::{
    error::{Error, Result},
    maze::Maze,
    render::{draw_maze, Renderer, VisualState},
    solver::{SearcherKind, Trace},
    tracker::VisitTracker,
};

/// Runs both searchers over one maze and replays their visits side by side.
#[derive(Debug, Clone, Copy)]
pub struct Race<'a> {
    maze: &'a Maze,
    delay: Duration,
}

#[derive(Debug)]
pub struct RaceReport {
    pub depth_first: Trace,
    pub breadth_first: Trace,
    pub tracker: VisitTracker,
}

impl RaceReport {
    pub fn trace(&self, kind: SearcherKind) -> &Trace {
        match kind {
            SearcherKind::DepthFirst => &self.depth_first,
            SearcherKind::BreadthFirst => &self.breadth_first,
        }
    }

    /// One human readable line per searcher.
    pub fn summary(&self) -> Vec<String> {
        SearcherKind::ALL
            .into_iter()
            .map(|kind| {
                let trace = self.trace(kind);
                if trace.is_found() {
                    format!(
                        "{:<13} found the exit after {} visits, path of {} cells",
                        kind.name(),
                        trace.len(),
                        trace.path().len()
                    )
                } else {
                    format!("{:<13} gave up after {} visits", kind.name(), trace.len())
                }
            })
            .collect()
    }
}

impl<'a> Race<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        Race {
            maze,
            delay: Duration::ZERO,
        }
    }

    /// Pause before each replayed visit. Zero replays as fast as the renderer allows.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Draws the maze, searches it with both searchers in parallel and replays both traces
    /// concurrently into `renderer`.
    ///
    /// Every replayed visit locks the renderer, marks the tracker and draws exactly one cell,
    /// so the two replays interleave per cell.
    pub fn run<R: Renderer>(&self, mut renderer: R) -> Result<RaceReport> {
        draw_maze(&mut renderer, self.maze.grid())?;

        let (depth_first, breadth_first) = rayon::join(
            || SearcherKind::DepthFirst.searcher().solve(self.maze),
            || SearcherKind::BreadthFirst.searcher().solve(self.maze),
        );
        for trace in [&depth_first, &breadth_first] {
            info!(
                "{} visited {} cells, exit {}",
                trace.kind(),
                trace.len(),
                if trace.is_found() { "found" } else { "not found" }
            );
        }

        let tracker = VisitTracker::new(self.maze.rows(), self.maze.columns());
        let renderer = Mutex::new(renderer);
        let delay = self.delay;

        crossbeam::scope(|s| {
            let handles: Vec<_> = [&depth_first, &breadth_first]
                .into_iter()
                .map(|trace| {
                    let (tracker, renderer) = (&tracker, &renderer);
                    s.spawn(move |_| replay(trace, tracker, renderer, delay))
                })
                .collect();

            for handle in handles {
                handle.join().map_err(|_| Error::WorkerPanicked)??;
            }
            Ok::<_, Error>(())
        })
        .map_err(|_| Error::WorkerPanicked)??;

        renderer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .present()?;

        Ok(RaceReport {
            depth_first,
            breadth_first,
            tracker,
        })
    }
}

fn replay<R: Renderer>(
    trace: &Trace,
    tracker: &VisitTracker,
    renderer: &Mutex<R>,
    delay: Duration,
) -> Result<()> {
    let kind = trace.kind();
    for &cell in trace.visited() {
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        let mut renderer = renderer.lock().unwrap_or_else(PoisonError::into_inner);
        let visits = tracker.mark(cell, kind)?;
        if let Some(state) = VisualState::visited(visits) {
            renderer.draw_cell(cell.y() as usize, cell.x() as usize, state)?;
        }
    }

    debug!("{} replay finished", kind);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cell::Cell,
        grid::{FeatureState, Grid},
        render::Canvas,
        tracker::Visits,
    };

    fn corridor() -> Maze {
        let mut grid = Grid::new(3, 3);
        for y in 0..3 {
            grid.set(y, 1, FeatureState::Open).unwrap();
        }
        Maze::from_parts(grid, Cell(1, 0), Cell(1, 2)).unwrap()
    }

    #[test]
    fn corridor_is_visited_by_both() {
        let maze = corridor();
        let mut canvas = Canvas::new(3, 3);
        let report = Race::new(&maze).run(&mut canvas).unwrap();

        assert!(report.depth_first.is_found());
        assert!(report.breadth_first.is_found());
        for y in 0..3 {
            assert_eq!(report.tracker.read(Cell(1, y)).unwrap(), Visits::BOTH);
            assert_eq!(canvas.get(y as usize, 1), Some(VisualState::VisitedByBoth));
        }
        // nine cells for the maze, three visits per searcher
        assert_eq!(canvas.draws(), 9 + 6);
        assert_eq!(canvas.count(VisualState::Wall), 6);
    }

    #[test]
    fn summary_mentions_both() {
        let maze = corridor();
        let report = Race::new(&maze).run(Canvas::new(3, 3)).unwrap();
        let summary = report.summary();
        assert_eq!(summary.len(), 2);
        assert!(summary[0].starts_with("depth-first"));
        assert!(summary[1].contains("found the exit after 3 visits"));
    }

    #[test]
    fn delay_is_applied() {
        let maze = corridor();
        let started = std::time::Instant::now();
        Race::new(&maze)
            .delay(Duration::from_millis(5))
            .run(Canvas::new(3, 3))
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn render_errors_propagate() {
        let maze = corridor();
        let err = Race::new(&maze).run(Canvas::new(2, 2)).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
