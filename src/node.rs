use grid_util::point::Point;

use crate::maze::Move;

/// Handle to a [SearchNode] inside a [NodeArena].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One link in the backtracking chain: a cell, the move that produced it and a
/// handle to the node it was expanded from. The root node has neither.
/// Nodes are created by the solver and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub state: Point,
    pub parent: Option<NodeId>,
    pub action: Option<Move>,
}

/// Owns every node created during one solve call. Parent links are arena
/// handles rather than references, so the chain stays alive after nodes leave
/// the frontier and reconstruction is a plain handle walk.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena { nodes: Vec::new() }
    }

    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// Walks parent handles from `last` back to the root and returns the
    /// states in start-to-goal order. The root state itself is left out, so
    /// the result begins one move after the start cell.
    pub fn backtrack(&self, last: NodeId) -> Vec<Point> {
        let mut path: Vec<Point> = itertools::unfold(Some(last), |id| {
            id.take().map(|cur| {
                let node = &self.nodes[cur.0];
                *id = node.parent;
                node.state
            })
        })
        .collect();
        path.pop();
        path.reverse();
        path
    }
}
