use maze_pathfinding::{directions_to_string, BfsSolver, GridSolver, MazeError, MazeGrid, Point};

// Builds an 11x9 maze and prints the shortest routes between two pairs of points, first as
// cardinal moves and then drawn on the map where
// - # marks an obstacle
// - . marks the path
fn main() -> Result<(), MazeError> {
    let mut maze = MazeGrid::new(11, 9)?;
    maze.set_obstacle_area(2, 1, 7, 1)?;
    maze.set_obstacle_area(7, 2, 8, 2)?;
    maze.set_obstacle_area(1, 3, 1, 4)?;
    maze.set_obstacle_area(3, 3, 5, 3)?;
    maze.set_obstacle_area(7, 4, 10, 4)?;
    for (x, y) in [(4, 4), (2, 5), (6, 5), (0, 6), (4, 6), (7, 8), (9, 7)] {
        maze.set_obstacle(x, y)?;
    }
    maze.set_obstacle_area(2, 7, 4, 7)?;
    maze.set_obstacle_area(8, 6, 9, 6)?;
    maze.update();

    println!("Maze:");
    print!("{}", maze);

    let solver = BfsSolver::new();
    for (start, end) in [
        (Point::new(5, 0), Point::new(5, 8)),
        (Point::new(0, 3), Point::new(10, 5)),
    ] {
        let path = solver.get_path(&maze, start, end)?;
        let directions = maze_pathfinding::directions_from_path(&path);
        println!("Path from {} to {}:", start, end);
        println!("{}", directions_to_string(&directions));
        print!("{}", maze.render_path(&path));
    }
    Ok(())
}
