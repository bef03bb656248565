use crate::{directions_from_path, error::MazeError, maze_grid::MazeGrid, Cardinal};
use grid_util::point::Point;

pub mod bfs;

/// A shortest path search over a [MazeGrid]. Implementors only provide [search](Self::search);
/// endpoint validation and the conversion to directions are shared.
pub trait GridSolver {
    /// Computes the path from start to goal, both inclusive. Called only with endpoints that are
    /// in bounds and not obstacles.
    fn search(&self, grid: &MazeGrid, start: Point, goal: Point) -> Result<Vec<Point>, MazeError>;

    /// Checks that both endpoints are on the maze, then that neither is an obstacle.
    fn validate_endpoints(
        &self,
        grid: &MazeGrid,
        start: &Point,
        goal: &Point,
    ) -> Result<(), MazeError> {
        for p in [start, goal] {
            grid.check_bounds(p.x, p.y)?;
        }
        for p in [start, goal] {
            if !grid.can_move_to(*p) {
                return Err(MazeError::BlockedEndpoint { x: p.x, y: p.y });
            }
        }
        Ok(())
    }

    /// Computes the sequence of cells from start to goal. If start equals goal the path consists
    /// of that single cell.
    fn get_path(&self, grid: &MazeGrid, start: Point, goal: Point) -> Result<Vec<Point>, MazeError> {
        self.validate_endpoints(grid, &start, &goal)?;
        self.search(grid, start, goal)
    }

    /// The moves leading from start to goal. Empty if start equals goal, which is distinct from
    /// [MazeError::Unreachable].
    fn get_directions(
        &self,
        grid: &MazeGrid,
        start: Point,
        goal: Point,
    ) -> Result<Vec<Cardinal>, MazeError> {
        self.get_path(grid, start, goal)
            .map(|path| directions_from_path(&path))
    }

    /// The number of moves on the shortest path.
    fn get_path_cost(&self, grid: &MazeGrid, start: Point, goal: Point) -> Result<usize, MazeError> {
        self.get_path(grid, start, goal).map(|path| path.len().saturating_sub(1))
    }
}
