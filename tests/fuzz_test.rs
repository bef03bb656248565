/// Fuzzes the solver by checking on many random mazes that a path is found exactly when the goal
/// is on the same connected component as the start, that it has the length of an independently
/// computed breadth-first distance and that replaying the moves walks over road to the goal.
use maze_pathfinding::*;
use rand::prelude::*;
use std::collections::VecDeque;

fn random_maze(w: usize, h: usize, rng: &mut StdRng) -> MazeGrid {
    let mut maze = MazeGrid::new(w, h).unwrap();
    for x in 0..w as i32 {
        for y in 0..h as i32 {
            if rng.gen_bool(0.35) {
                maze.set_obstacle(x, y).unwrap();
            }
        }
    }
    maze.update();
    maze
}

fn random_point(maze: &MazeGrid, rng: &mut StdRng) -> Point {
    Point::new(
        rng.gen_range(0..maze.width()) as i32,
        rng.gen_range(0..maze.height()) as i32,
    )
}

/// Plain distance flood fill, independent of the solver.
fn distance(maze: &MazeGrid, start: Point, goal: Point) -> Option<usize> {
    let w = maze.width();
    let ix = |p: &Point| p.y as usize * w + p.x as usize;
    let mut dist = vec![usize::MAX; w * maze.height()];
    let mut queue = VecDeque::from([start]);
    dist[ix(&start)] = 0;
    while let Some(p) = queue.pop_front() {
        if p == goal {
            return Some(dist[ix(&p)]);
        }
        for n in [(1, 0), (-1, 0), (0, 1), (0, -1)].map(|(dx, dy)| Point::new(p.x + dx, p.y + dy)) {
            if maze.can_move_to(n) && dist[ix(&n)] == usize::MAX {
                dist[ix(&n)] = dist[ix(&p)] + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

fn visualize_maze(maze: &MazeGrid, start: &Point, end: &Point) {
    for y in (0..maze.height() as i32).rev() {
        for x in 0..maze.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if !maze.can_move_to(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N_MAZES: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let solvers = [
        BfsSolver::with_policy(VisitPolicy::OnDequeue),
        BfsSolver::with_policy(VisitPolicy::OnEnqueue),
        BfsSolver {
            use_components: false,
            ..BfsSolver::new()
        },
    ];
    for _ in 0..N_MAZES {
        let w = rng.gen_range(1..=12);
        let h = rng.gen_range(1..=12);
        let mut maze = random_maze(w, h, &mut rng);
        let start = random_point(&maze, &mut rng);
        let goal = random_point(&maze, &mut rng);
        maze.set_road(start.x, start.y).unwrap();
        maze.set_road(goal.x, goal.y).unwrap();

        let reachable = maze.reachable(&start, &goal);
        let expected = distance(&maze, start, goal);
        if reachable != expected.is_some() {
            visualize_maze(&maze, &start, &goal);
        }
        assert_eq!(reachable, expected.is_some());

        for solver in &solvers {
            match solver.get_directions(&maze, start, goal) {
                Ok(dirs) => {
                    assert_eq!(Some(dirs.len()), expected);
                    let path = directions_to_path(start, &dirs);
                    assert_eq!(*path.last().unwrap(), goal);
                    assert!(path.iter().all(|p| maze.can_move_to(*p)));
                }
                Err(err) => {
                    if expected.is_some() {
                        visualize_maze(&maze, &start, &goal);
                    }
                    assert_eq!(expected, None);
                    assert_eq!(err, MazeError::Unreachable { from: start, to: goal });
                }
            }
        }
    }
}

/// Blocking cells leaves the components dirty; the search must still give correct answers.
#[test]
fn fuzz_dirty_components() {
    const N_MAZES: usize = 500;
    let mut rng = StdRng::seed_from_u64(7);
    let solver = BfsSolver::new();
    for _ in 0..N_MAZES {
        let mut maze = random_maze(8, 8, &mut rng);
        let x = rng.gen_range(0..8);
        let y = rng.gen_range(0..8);
        maze.set_obstacle_area(x, 0, x, y).unwrap();
        let start = Point::new(0, 7);
        let goal = Point::new(7, 0);
        maze.set_road(start.x, start.y).unwrap();
        maze.set_road(goal.x, goal.y).unwrap();
        let expected = distance(&maze, start, goal);
        let found = solver.get_path_cost(&maze, start, goal).ok();
        assert_eq!(found, expected);
    }
}
