use grid_util::point::Point;
use thiserror::Error;

/// Everything that can go wrong when building, editing or querying a [MazeGrid](crate::MazeGrid).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("point ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i32, y: i32 },
    #[error("endpoint ({x}, {y}) is an obstacle")]
    BlockedEndpoint { x: i32, y: i32 },
    #[error("no path from {from} to {to}")]
    Unreachable { from: Point, to: Point },
}
