use fxhash::{FxBuildHasher, FxHashSet};
use grid_util::point::Point;
use indexmap::IndexSet;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::frontier::Frontier;
use crate::maze::Maze;
use crate::node::{NodeArena, SearchNode};

type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Frontier policy used for a solve, fixed at solver construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Stack frontier (DFS). Finds some valid path, not necessarily shortest.
    DepthFirst,
    /// Queue frontier (BFS). The returned path is shortest in move count.
    BreadthFirst,
    /// Frontier guided by a shared round counter plus the Manhattan distance
    /// to the goal, expanding every node tied for the best score per round.
    /// The counter is not a per-node path length, so this approximates A*
    /// rather than implementing it exactly.
    BestCost,
}

/// A successful solve. `path` runs from the first cell after the start up to
/// and including the goal. `trace` is present iff steps were recorded and
/// lists every expanded cell in first-visit order, for animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub path: Vec<Point>,
    pub trace: Option<Vec<Point>>,
}

/// Cells that have already been expanded. Plain membership is all the solve
/// loop needs; trace mode additionally keeps first-visit order.
enum Visited {
    Unordered(FxHashSet<Point>),
    Ordered(FxIndexSet<Point>),
}

impl Visited {
    fn new(record_steps: bool) -> Visited {
        if record_steps {
            Visited::Ordered(FxIndexSet::default())
        } else {
            Visited::Unordered(FxHashSet::default())
        }
    }

    fn insert(&mut self, state: Point) {
        match self {
            Visited::Unordered(cells) => {
                cells.insert(state);
            }
            Visited::Ordered(cells) => {
                cells.insert(state);
            }
        }
    }

    fn contains(&self, state: &Point) -> bool {
        match self {
            Visited::Unordered(cells) => cells.contains(state),
            Visited::Ordered(cells) => cells.contains(state),
        }
    }

    fn into_trace(self) -> Option<Vec<Point>> {
        match self {
            Visited::Unordered(_) => None,
            Visited::Ordered(cells) => Some(cells.into_iter().collect()),
        }
    }
}

/// Runs one of the three search strategies over an immutable [Maze] snapshot.
/// The solver owns the RNG behind the neighbor shuffle, so constructing it
/// through [with_seed](Self::with_seed) makes the exploration order (and with
/// it the exact path found) reproducible.
pub struct MazeSolver {
    maze: Maze,
    strategy: Strategy,
    rng: StdRng,
}

impl MazeSolver {
    pub fn new(maze: Maze, strategy: Strategy) -> MazeSolver {
        MazeSolver {
            maze,
            strategy,
            rng: StdRng::from_entropy(),
        }
    }

    /// Like [new](Self::new) but with a fixed seed for the neighbor shuffle.
    pub fn with_seed(maze: Maze, strategy: Strategy, seed: u64) -> MazeSolver {
        MazeSolver {
            maze,
            strategy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Searches for a path from start to goal, returning [None] when the
    /// frontier is exhausted first. An unsolvable maze is a normal outcome,
    /// not a fault. With `record_steps` the solution also carries the ordered
    /// trace of expanded cells.
    ///
    /// Each round removes one or more nodes per the frontier policy, checks
    /// them against the goal and expands the rest through the maze's shuffled
    /// neighbor order. Frontier growth stops while the goal is already queued:
    /// the queued goal node surfaces on a later round anyway. A state can be
    /// queued twice under different parents before it is first expanded; the
    /// visited check only stops re-expansion, and the redundancy is harmless.
    pub fn solve(&mut self, record_steps: bool) -> Option<Solution> {
        let start = self.maze.start();
        let goal = self.maze.goal();
        info!(
            "solving {}x{} maze from {} to {} with {:?}",
            self.maze.width(),
            self.maze.height(),
            start,
            goal,
            self.strategy
        );

        let mut cost = 0;
        let mut arena = NodeArena::new();
        let mut visited = Visited::new(record_steps);
        let mut frontier = match self.strategy {
            Strategy::DepthFirst => Frontier::stack(),
            Strategy::BreadthFirst => Frontier::queue(),
            Strategy::BestCost => Frontier::best_cost(goal),
        };
        let root = arena.insert(SearchNode {
            state: start,
            parent: None,
            action: None,
        });
        frontier.add(root);

        loop {
            if frontier.is_empty() {
                info!("frontier exhausted after {} rounds: maze is unsolvable", cost);
                return None;
            }
            cost += 1;
            let removed = frontier
                .remove(&arena, cost)
                .expect("emptiness is checked at the top of the loop");
            for id in removed {
                let state = arena.get(id).state;
                if state == goal {
                    let path = arena.backtrack(id);
                    debug!(
                        "reached {} after {} rounds with a path of {} moves",
                        goal,
                        cost,
                        path.len()
                    );
                    return Some(Solution {
                        path,
                        trace: visited.into_trace(),
                    });
                }
                visited.insert(state);
                for (action, neighbor) in self.maze.neighbors(state, &mut self.rng) {
                    if !frontier.contains_state(&arena, goal) && !visited.contains(&neighbor) {
                        let child = arena.insert(SearchNode {
                            state: neighbor,
                            parent: Some(id),
                            action: Some(action),
                        });
                        frontier.add(child);
                    }
                }
            }
        }
    }
}
