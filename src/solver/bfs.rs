use std::collections::VecDeque;

use grid_util::point::Point;
use log::{info, warn};

use crate::{error::MazeError, maze_grid::MazeGrid, solver::GridSolver, FxIndexMap};

/// When a cell counts as visited during the search. Both give shortest paths but may pick
/// different ones when several exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisitPolicy {
    /// Cells are marked when taken from the queue, so a cell can be queued several times before
    /// it is processed; its predecessor is the last cell that queued it. Stale queue entries are
    /// skipped, every cell is processed at most once.
    #[default]
    OnDequeue,
    /// Cells are marked as soon as they are queued and keep the first predecessor found.
    OnEnqueue,
}

/// Breadth-first search exploring neighbours in [EXPLORATION_ORDER](crate::EXPLORATION_ORDER).
#[derive(Clone, Debug)]
pub struct BfsSolver {
    pub visit_policy: VisitPolicy,
    /// Consult the connected components of the maze (when they are up to date) to fail fast on
    /// unreachable goals.
    pub use_components: bool,
}

impl BfsSolver {
    pub fn new() -> BfsSolver {
        BfsSolver {
            visit_policy: VisitPolicy::default(),
            use_components: true,
        }
    }
    pub fn with_policy(visit_policy: VisitPolicy) -> BfsSolver {
        BfsSolver {
            visit_policy,
            ..BfsSolver::new()
        }
    }
    fn components_usable(&self, grid: &MazeGrid) -> bool {
        self.use_components && !grid.components_dirty
    }
}

impl Default for BfsSolver {
    fn default() -> BfsSolver {
        BfsSolver::new()
    }
}

/// Follows parent indices from `start` until the root, whose parent index is out of range.
fn reverse_path(parents: &FxIndexMap<Point, usize>, start: usize) -> Vec<Point> {
    let mut i = start;
    let mut path: Vec<Point> = std::iter::from_fn(|| {
        parents.get_index(i).map(|(node, &parent)| {
            i = parent;
            *node
        })
    })
    .collect();
    path.reverse();
    path
}

impl GridSolver for BfsSolver {
    fn search(&self, grid: &MazeGrid, start: Point, goal: Point) -> Result<Vec<Point>, MazeError> {
        let unreachable = MazeError::Unreachable {
            from: start,
            to: goal,
        };
        if self.components_usable(grid) && grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Err(unreachable);
        }
        info!("Searching path from {} to {}", start, goal);
        let mark_on_enqueue = self.visit_policy == VisitPolicy::OnEnqueue;
        let mut visited = vec![false; grid.width() * grid.height()];
        // Parents are stored as indices into the map itself, the start being its own root
        let mut parents: FxIndexMap<Point, usize> = FxIndexMap::default();
        parents.insert(start, usize::MAX);
        let mut to_see: VecDeque<usize> = VecDeque::new();
        to_see.push_back(0);
        if mark_on_enqueue {
            visited[grid.cell_index(&start)] = true;
        }
        while let Some(index) = to_see.pop_front() {
            let Some((&node, _)) = parents.get_index(index) else {
                continue;
            };
            if !mark_on_enqueue {
                let node_ix = grid.cell_index(&node);
                if visited[node_ix] {
                    continue;
                }
                visited[node_ix] = true;
            }
            if node == goal {
                let path = reverse_path(&parents, index);
                info!("Found path of {} moves", path.len() - 1);
                return Ok(path);
            }
            for successor in grid.neighborhood_points(&node) {
                let successor_ix = grid.cell_index(&successor);
                if visited[successor_ix] {
                    continue;
                }
                if mark_on_enqueue {
                    visited[successor_ix] = true;
                }
                let (n, _) = parents.insert_full(successor, index);
                to_see.push_back(n);
            }
        }
        if self.components_usable(grid) {
            warn!("Reachable goal could not be pathed to, are the components correct?");
        }
        Err(unreachable)
    }
}
