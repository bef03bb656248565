//! # maze_pathfinding
//!
//! Shortest paths on a grid maze. Every cell is either road (walkable) or an obstacle and
//! movement is restricted to the four cardinal directions. Paths are found with
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search), which guarantees
//! the fewest possible steps, and are returned as a sequence of [Cardinal] moves. Note that this
//! gets costly in large open mazes with long distances between points.
//!
//! Connected components of the road cells are maintained alongside the grid so that a query
//! between disconnected cells can fail without flood-filling the maze.
//!
//! ```
//! use maze_pathfinding::{Cardinal, MazeGrid};
//!
//! let mut maze = MazeGrid::new(10, 3).unwrap();
//! maze.set_obstacle_area(1, 1, 8, 1).unwrap();
//! let directions = maze.find_path(3, 0, 3, 2).unwrap();
//! assert_eq!(maze_pathfinding::directions_to_string(&directions), "WWWNNEEE");
//! assert_eq!(directions[0], Cardinal::West);
//! ```
pub mod error;
pub mod maze_grid;
pub mod solver;

pub use error::MazeError;
pub use grid_util::point::Point;
pub use maze_grid::MazeGrid;
pub use solver::bfs::{BfsSolver, VisitPolicy};
pub use solver::GridSolver;

use core::fmt;
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use itertools::Itertools;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// One unit move on the maze. North is towards increasing `y`, east towards increasing `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cardinal {
    North,
    South,
    East,
    West,
}

/// The order in which the neighbours of a cell are explored. When several shortest paths exist
/// this order decides which one is returned.
pub const EXPLORATION_ORDER: [Cardinal; 4] = [
    Cardinal::East,
    Cardinal::North,
    Cardinal::West,
    Cardinal::South,
];

impl Cardinal {
    /// The single letter symbol of the direction: `N`, `S`, `E` or `W`.
    pub fn symbol(self) -> char {
        match self {
            Cardinal::North => 'N',
            Cardinal::South => 'S',
            Cardinal::East => 'E',
            Cardinal::West => 'W',
        }
    }
    pub fn delta(self) -> (i32, i32) {
        match self {
            Cardinal::North => (0, 1),
            Cardinal::South => (0, -1),
            Cardinal::East => (1, 0),
            Cardinal::West => (-1, 0),
        }
    }
    /// The point reached by moving one step from `point` in this direction.
    pub fn step(self, point: Point) -> Point {
        let (dx, dy) = self.delta();
        Point::new(point.x + dx, point.y + dy)
    }
    /// Encodes the move from `from` to `to`. Only meaningful for orthogonally adjacent points:
    /// a vertical move that is not exactly one step north is read as south, and a horizontal
    /// move that is not exactly one step east is read as west.
    pub fn between(from: &Point, to: &Point) -> Cardinal {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if dx == 0 {
            if dy == 1 {
                Cardinal::North
            } else {
                Cardinal::South
            }
        } else if dx == 1 {
            Cardinal::East
        } else {
            Cardinal::West
        }
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Turns a path of adjacent points (start and end inclusive) into the moves that follow it.
/// The result has one element less than the path; a path of a single point needs no moves.
pub fn directions_from_path(path: &[Point]) -> Vec<Cardinal> {
    path.iter()
        .tuple_windows()
        .map(|(p2, p1)| Cardinal::between(p2, p1))
        .collect()
}

/// Replays moves from `start`, returning every visited point including `start`.
pub fn directions_to_path(start: Point, directions: &[Cardinal]) -> Vec<Point> {
    let mut current = start;
    let mut path = Vec::with_capacity(directions.len() + 1);
    path.push(current);
    for dir in directions {
        current = dir.step(current);
        path.push(current);
    }
    path
}

/// Concatenates the direction symbols, e.g. `"WWNE"`.
pub fn directions_to_string(directions: &[Cardinal]) -> String {
    directions.iter().map(|d| d.symbol()).join("")
}
