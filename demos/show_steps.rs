use maze_search::{Maze, MazeSolver, Strategy};

// Solves a board with the best-cost strategy and prints the cells the search
// examined before the solution, in the order a presentation layer would
// animate them.
fn main() {
    let mut board = vec![vec![false; 10]; 10];
    for col in 0..9 {
        board[5][col] = true;
    }
    let maze = Maze::from_board(&board);
    print!("{}", maze);
    let mut solver = MazeSolver::new(maze, Strategy::BestCost);
    match solver.solve(true) {
        Some(solution) => {
            let trace = solution.trace.unwrap_or_default();
            println!("Cells examined ({}):", trace.len());
            for p in trace {
                print!("{} ", p);
            }
            println!("\nSolution ({} moves):", solution.path.len());
            for p in solution.path {
                print!("{} ", p);
            }
            println!();
        }
        None => println!("Unsolvable!"),
    }
}
