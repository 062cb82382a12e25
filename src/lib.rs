pub mod cell;
pub mod error;
pub mod grid;
pub mod logging;
pub mod maze;
pub mod race;
pub mod random;
pub mod render;
pub mod settings;
pub mod solver;
pub mod tracker;

pub use cell::{Cell, Direction};
pub use error::{Error, Result};
pub use grid::{FeatureState, Grid};
pub use maze::{Maze, MazeGenerator};
pub use race::{Race, RaceReport};
pub use random::{Random, RandomSource};
pub use render::{Renderer, VisualState};
pub use solver::{BreadthFirst, DepthFirst, PathSearcher, SearcherKind, Trace};
pub use tracker::{VisitTracker, Visits};
