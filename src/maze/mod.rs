pub mod generator;
pub mod maze;

pub use generator::MazeGenerator;
pub use maze::Maze;
