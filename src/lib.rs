//! # maze_search
//!
//! Maze solving on a square grid with interchangeable frontier strategies.
//! A [Maze] snapshots an N×N wall layout with fixed corner start and goal
//! cells, and a [MazeSolver] searches it with depth-first, breadth-first or
//! heuristic-guided best-cost frontier expansion, optionally recording every
//! cell it examines so a caller can animate the search afterwards. Note that
//! this assumes an unweighted grid where every valid move costs 1.
//! Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! so solvability can be checked without running a full search.

pub mod frontier;
pub mod maze;
pub mod node;
pub mod solver;

pub use frontier::{EmptyFrontierError, Frontier};
pub use maze::{manhattan_distance, Maze, Move};
pub use node::{NodeArena, NodeId, SearchNode};
pub use solver::{MazeSolver, Solution, Strategy};
