use crate::error::MazeError;
use crate::solver::{bfs::BfsSolver, GridSolver};
use crate::{Cardinal, EXPLORATION_ORDER};
use core::fmt;
use fxhash::FxHashSet;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [MazeGrid] stores which cells are obstacles ([true]) or road ([false]) in a [BoolGrid] and
/// keeps track of the connected road components using a [UnionFind] structure.
///
/// Coordinates are `(x, y)` with `0 <= x < width` and `0 <= y < height`. Every mutation and query
/// is bounds-checked and reports [MazeError::OutOfBounds] without touching the maze.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    pub(crate) grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl MazeGrid {
    /// Creates a maze of road cells. Both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> Result<MazeGrid, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        let mut maze = MazeGrid {
            grid: BoolGrid::new(width, height, false),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        maze.generate_components();
        Ok(maze)
    }
    pub fn width(&self) -> usize {
        self.grid.width
    }
    pub fn height(&self) -> usize {
        self.grid.height
    }
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }
    pub fn contains_point(&self, point: &Point) -> bool {
        self.contains(point.x, point.y)
    }
    pub(crate) fn check_bounds(&self, x: i32, y: i32) -> Result<(), MazeError> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds { x, y })
        }
    }
    pub fn is_obstacle(&self, x: i32, y: i32) -> Result<bool, MazeError> {
        self.check_bounds(x, y)?;
        Ok(self.grid.get(x, y))
    }
    /// True if `pos` lies on the maze and is road.
    pub fn can_move_to(&self, pos: Point) -> bool {
        self.contains_point(&pos) && !self.grid.get_point(pos)
    }
    /// Row-major index of an in-bounds point, used for scratch buffers and components.
    pub(crate) fn cell_index(&self, point: &Point) -> usize {
        self.grid.get_ix_point(point)
    }
    /// The road neighbours of `point`, in [EXPLORATION_ORDER].
    pub fn neighborhood_points(&self, point: &Point) -> SmallVec<[Point; 4]> {
        EXPLORATION_ORDER
            .iter()
            .map(|dir| dir.step(*point))
            .filter(|p| self.can_move_to(*p))
            .collect()
    }

    pub fn set_obstacle(&mut self, x: i32, y: i32) -> Result<(), MazeError> {
        self.check_bounds(x, y)?;
        self.set_cell(x, y, true);
        Ok(())
    }
    pub fn set_road(&mut self, x: i32, y: i32) -> Result<(), MazeError> {
        self.check_bounds(x, y)?;
        self.set_cell(x, y, false);
        Ok(())
    }
    /// Marks every cell of the rectangle spanned by the two corners (inclusive) as obstacle.
    /// The corners may be given in any order.
    pub fn set_obstacle_area(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), MazeError> {
        self.set_area(x1, y1, x2, y2, true)
    }
    /// Marks every cell of the rectangle spanned by the two corners (inclusive) as road.
    /// The corners may be given in any order.
    pub fn set_road_area(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), MazeError> {
        self.set_area(x1, y1, x2, y2, false)
    }
    fn set_area(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        blocked: bool,
    ) -> Result<(), MazeError> {
        // Both corners are checked before anything is written
        self.check_bounds(x1, y1)?;
        self.check_bounds(x2, y2)?;
        let (min_x, max_x) = (x1.min(x2), x1.max(x2));
        let (min_y, max_y) = (y1.min(y2), y1.max(y2));
        for x in min_x..=max_x {
            for y in min_y..=max_y {
                self.set_cell(x, y, blocked);
            }
        }
        Ok(())
    }
    /// Updates an in-bounds cell. Opening a cell joins it with the components of its road
    /// neighbours, blocking a road cell flags the components as dirty since it may split one.
    fn set_cell(&mut self, x: i32, y: i32, blocked: bool) {
        let p = Point::new(x, y);
        if blocked {
            if !self.grid.get(x, y) {
                self.components_dirty = true;
            }
        } else {
            let p_ix = self.cell_index(&p);
            for n in self.neighborhood_points(&p) {
                let n_ix = self.cell_index(&n);
                self.components.union(p_ix, n_ix);
            }
        }
        self.grid.set(x, y, blocked);
    }

    /// Retrieves the component id a given in-bounds [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.cell_index(point))
    }
    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.contains_point(start) && self.contains_point(goal) {
            !self
                .components
                .equiv(self.cell_index(start), self.cell_index(goal))
        } else {
            true
        }
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up road neighbours to the same components.
    pub fn generate_components(&mut self) {
        debug!(
            "Generating components for {}x{} maze",
            self.width(),
            self.height()
        );
        self.components = UnionFind::new(self.width() * self.height());
        self.components_dirty = false;
        for x in 0..self.width() as i32 {
            for y in 0..self.height() as i32 {
                let point = Point::new(x, y);
                if !self.can_move_to(point) {
                    continue;
                }
                let parent_ix = self.cell_index(&point);
                // Unions are symmetric, so looking north and east covers every edge
                for dir in [Cardinal::North, Cardinal::East] {
                    let n = dir.step(point);
                    if self.can_move_to(n) {
                        let ix = self.cell_index(&n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }

    /// Finds the shortest route between two road cells with a default [BfsSolver].
    pub fn find_path(
        &self,
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
    ) -> Result<Vec<Cardinal>, MazeError> {
        BfsSolver::new().get_directions(self, Point::new(from_x, from_y), Point::new(to_x, to_y))
    }

    /// Draws the maze like its [Display](fmt::Display) implementation, with the cells of `path`
    /// marked by `.`.
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_map(&mut out, path);
        out
    }
    fn write_map<W: fmt::Write>(&self, out: &mut W, path: &[Point]) -> fmt::Result {
        let on_path: FxHashSet<Point> = path.iter().copied().collect();
        let border = "-".repeat(self.width());
        writeln!(out, "+{}+", border)?;
        for y in (0..self.height() as i32).rev() {
            write!(out, "|")?;
            for x in 0..self.width() as i32 {
                let c = if on_path.contains(&Point::new(x, y)) {
                    '.'
                } else if self.grid.get(x, y) {
                    '#'
                } else {
                    ' '
                };
                write!(out, "{}", c)?;
            }
            writeln!(out, "|")?;
        }
        writeln!(out, "+{}+", border)
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_map(f, &[])
    }
}
