use std::collections::VecDeque;

use grid_util::point::Point;
use thiserror::Error;

use crate::maze::manhattan_distance;
use crate::node::{NodeArena, NodeId};

/// Contract breach: [remove](Frontier::remove) was called on an exhausted
/// frontier. Callers must check [is_empty](Frontier::is_empty) first;
/// [solve](crate::solver::MazeSolver::solve) always does, so this error never
/// escapes the public entry point.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("frontier already empty")]
pub struct EmptyFrontierError;

/// The open set of not-yet-expanded nodes. The variants share insertion and
/// lookup behavior and differ only in which node(s) [remove](Self::remove)
/// picks. The set of policies is closed: new ones are variants, not trait
/// implementations.
#[derive(Clone, Debug)]
pub enum Frontier {
    /// Last-in-first-out removal, giving depth-first exploration. Paths found
    /// this way are valid but not necessarily shortest.
    Stack(Vec<NodeId>),
    /// First-in-first-out removal, giving breadth-first exploration. Exhausts
    /// depth `d` before touching depth `d + 1`, so the first path found is
    /// shortest in move count.
    Queue(VecDeque<NodeId>),
    /// Heuristic-guided removal: scores every open node and removes the whole
    /// set tied for the best score. `goal` is the heuristic target, captured
    /// at construction from the maze being solved.
    BestCost { open: Vec<NodeId>, goal: Point },
}

impl Frontier {
    pub fn stack() -> Frontier {
        Frontier::Stack(Vec::new())
    }

    pub fn queue() -> Frontier {
        Frontier::Queue(VecDeque::new())
    }

    pub fn best_cost(goal: Point) -> Frontier {
        Frontier::BestCost {
            open: Vec::new(),
            goal,
        }
    }

    pub fn add(&mut self, id: NodeId) {
        match self {
            Frontier::Stack(open) => open.push(id),
            Frontier::Queue(open) => open.push_back(id),
            Frontier::BestCost { open, .. } => open.push(id),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Stack(open) => open.len(),
            Frontier::Queue(open) => open.len(),
            Frontier::BestCost { open, .. } => open.len(),
        }
    }

    /// [true] iff some node currently in the frontier has the given state.
    pub fn contains_state(&self, arena: &NodeArena, state: Point) -> bool {
        match self {
            Frontier::Stack(open) => open.iter().any(|&id| arena.get(id).state == state),
            Frontier::Queue(open) => open.iter().any(|&id| arena.get(id).state == state),
            Frontier::BestCost { open, .. } => {
                open.iter().any(|&id| arena.get(id).state == state)
            }
        }
    }

    /// Removes the next node(s) per this variant's policy. The stack and queue
    /// variants return exactly one node and ignore `cost`; the best-cost
    /// variant scores every open node as `cost + manhattan_distance(state,
    /// goal)` and returns all nodes tied for the minimum, in insertion order.
    ///
    /// `cost` is the solver's round counter, shared by every open node within
    /// one call. It is a coarse "rounds elapsed" proxy for path cost, not a
    /// per-node depth, which makes the best-cost policy an approximation of
    /// A* rather than the real thing.
    pub fn remove(
        &mut self,
        arena: &NodeArena,
        cost: i32,
    ) -> Result<Vec<NodeId>, EmptyFrontierError> {
        match self {
            Frontier::Stack(open) => open.pop().map(|id| vec![id]).ok_or(EmptyFrontierError),
            Frontier::Queue(open) => {
                open.pop_front().map(|id| vec![id]).ok_or(EmptyFrontierError)
            }
            Frontier::BestCost { open, goal } => {
                let score = |id: NodeId| cost + manhattan_distance(&arena.get(id).state, goal);
                let best = open
                    .iter()
                    .map(|&id| score(id))
                    .min()
                    .ok_or(EmptyFrontierError)?;
                let mut removed = Vec::new();
                open.retain(|&id| {
                    if score(id) == best {
                        removed.push(id);
                        false
                    } else {
                        true
                    }
                });
                Ok(removed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SearchNode;

    fn arena_with(states: &[Point]) -> (NodeArena, Vec<NodeId>) {
        let mut arena = NodeArena::new();
        let ids = states
            .iter()
            .map(|&state| {
                arena.insert(SearchNode {
                    state,
                    parent: None,
                    action: None,
                })
            })
            .collect();
        (arena, ids)
    }

    #[test]
    fn stack_removes_last_in_first() {
        let (arena, ids) = arena_with(&[Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);
        let mut frontier = Frontier::stack();
        for &id in &ids {
            frontier.add(id);
        }
        assert_eq!(frontier.remove(&arena, 1), Ok(vec![ids[2]]));
        assert_eq!(frontier.remove(&arena, 2), Ok(vec![ids[1]]));
        assert_eq!(frontier.remove(&arena, 3), Ok(vec![ids[0]]));
        assert!(frontier.is_empty());
    }

    #[test]
    fn queue_removes_first_in_first() {
        let (arena, ids) = arena_with(&[Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);
        let mut frontier = Frontier::queue();
        for &id in &ids {
            frontier.add(id);
        }
        assert_eq!(frontier.remove(&arena, 1), Ok(vec![ids[0]]));
        assert_eq!(frontier.remove(&arena, 2), Ok(vec![ids[1]]));
    }

    #[test]
    fn best_cost_removes_the_whole_tie_set() {
        let goal = Point::new(3, 3);
        // Distances to the goal: 6, 2, 2, 4.
        let (arena, ids) = arena_with(&[
            Point::new(0, 0),
            Point::new(2, 3),
            Point::new(3, 2),
            Point::new(1, 2),
        ]);
        let mut frontier = Frontier::best_cost(goal);
        for &id in &ids {
            frontier.add(id);
        }
        assert_eq!(frontier.remove(&arena, 1), Ok(vec![ids[1], ids[2]]));
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.remove(&arena, 2), Ok(vec![ids[3]]));
        assert_eq!(frontier.remove(&arena, 3), Ok(vec![ids[0]]));
    }

    #[test]
    fn removing_from_an_empty_frontier_is_an_error() {
        let (arena, _) = arena_with(&[]);
        for mut frontier in [
            Frontier::stack(),
            Frontier::queue(),
            Frontier::best_cost(Point::new(9, 9)),
        ] {
            assert_eq!(frontier.remove(&arena, 1), Err(EmptyFrontierError));
        }
    }

    #[test]
    fn contains_state_tracks_membership() {
        let (arena, ids) = arena_with(&[Point::new(0, 0), Point::new(1, 0)]);
        let mut frontier = Frontier::queue();
        frontier.add(ids[0]);
        frontier.add(ids[1]);
        assert!(frontier.contains_state(&arena, Point::new(1, 0)));
        frontier.remove(&arena, 1).unwrap();
        frontier.remove(&arena, 2).unwrap();
        assert!(!frontier.contains_state(&arena, Point::new(1, 0)));
    }
}
