use maze_search::{Maze, MazeSolver, Strategy};

// In this example a path is found on a board with shape
// S . # . .
// . . # . .
// # . # . .
// . . . . #
// . # . . G
// S marks the start
// G marks the goal
fn main() {
    let board = vec![
        vec![false, false, true, false, false],
        vec![false, false, true, false, false],
        vec![true, false, true, false, false],
        vec![false, false, false, false, true],
        vec![false, true, false, false, false],
    ];
    let maze = Maze::from_board(&board);
    print!("{}", maze);
    let mut solver = MazeSolver::new(maze, Strategy::BreadthFirst);
    match solver.solve(false) {
        Some(solution) => {
            println!("A path has been found:");
            for p in solution.path {
                println!("{:?}", p);
            }
        }
        None => println!("Unsolvable!"),
    }
}
