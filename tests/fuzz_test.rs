//! Fuzzes the solver by checking for many random boards that every strategy
//! finds a path exactly when the start and goal share a connected component.
use maze_search::{Maze, MazeSolver, Strategy};
use rand::prelude::*;

fn random_board(n: usize, rng: &mut StdRng) -> Vec<Vec<bool>> {
    (0..n)
        .map(|_| (0..n).map(|_| rng.gen_bool(0.4)).collect())
        .collect()
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_BOARDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(0);
    for strategy in [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::BestCost,
    ] {
        for seed in 0..N_BOARDS as u64 {
            let maze = Maze::from_board(&random_board(N, &mut rng));
            let solvable = maze.is_solvable();
            let mut solver = MazeSolver::with_seed(maze, strategy, seed);
            let solution = solver.solve(false);
            // Show the board if the search disagrees with the components.
            if solution.is_some() != solvable {
                print!("{}", solver.maze());
            }
            assert!(solution.is_some() == solvable);
        }
    }
}

#[test]
fn fuzz_bfs_is_never_longer() {
    const N: usize = 10;
    const N_BOARDS: usize = 200;
    let mut rng = StdRng::seed_from_u64(1);
    for seed in 0..N_BOARDS as u64 {
        let board = random_board(N, &mut rng);
        let maze = Maze::from_board(&board);
        if !maze.is_solvable() {
            continue;
        }
        let bfs_len = MazeSolver::with_seed(maze, Strategy::BreadthFirst, seed)
            .solve(false)
            .unwrap()
            .path
            .len();
        for strategy in [Strategy::DepthFirst, Strategy::BestCost] {
            let other_len = MazeSolver::with_seed(Maze::from_board(&board), strategy, seed)
                .solve(false)
                .unwrap()
                .path
                .len();
            assert!(bfs_len <= other_len);
        }
    }
}
