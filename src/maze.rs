use core::fmt;

use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use rand::seq::SliceRandom;
use rand::Rng;

/// The four axis-aligned moves between grid cells. `x` is the column and `y`
/// the row, so [Move::Down] increases the row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Down,
    Right,
    Up,
    Left,
}

impl Move {
    /// The cell reached by taking this move from `state`.
    pub fn apply(&self, state: Point) -> Point {
        match self {
            Move::Down => Point::new(state.x, state.y + 1),
            Move::Right => Point::new(state.x + 1, state.y),
            Move::Up => Point::new(state.x, state.y - 1),
            Move::Left => Point::new(state.x - 1, state.y),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::Down => write!(f, "down"),
            Move::Right => write!(f, "right"),
            Move::Up => write!(f, "up"),
            Move::Left => write!(f, "left"),
        }
    }
}

/// Grid distance without diagonals. Used by the best-cost frontier as the
/// heuristic towards the configured goal cell.
pub fn manhattan_distance(a: &Point, b: &Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// An immutable snapshot of a square maze: a wall mask in a [BoolGrid], the
/// fixed corner start and goal cells, and pre-computed
/// [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
/// in a [UnionFind] so solvability can be checked without a full search.
///
/// The snapshot is taken from the caller's board at construction; later edits
/// to that board cannot affect a running solve.
#[derive(Clone, Debug)]
pub struct Maze {
    walls: BoolGrid,
    start: Point,
    goal: Point,
    components: UnionFind<usize>,
}

impl Maze {
    /// Builds a maze from a square row-major board of wall flags, with the
    /// start at the top-left corner and the goal at the bottom-right corner.
    /// Flags on the start and goal cells are ignored: those two cells are
    /// always traversable.
    pub fn from_board(board: &[Vec<bool>]) -> Maze {
        let n = board.len();
        let start = Point::new(0, 0);
        let goal = Point::new(n as i32 - 1, n as i32 - 1);
        let mut walls = BoolGrid::new(n, n, false);
        for (row, flags) in board.iter().enumerate() {
            debug_assert_eq!(flags.len(), n, "board must be square");
            for (col, &flag) in flags.iter().enumerate() {
                let p = Point::new(col as i32, row as i32);
                walls.set(col, row, flag && p != start && p != goal);
            }
        }
        let mut maze = Maze {
            walls,
            start,
            goal,
            components: UnionFind::new(n * n),
        };
        maze.generate_components();
        maze
    }

    pub fn width(&self) -> usize {
        self.walls.width
    }

    pub fn height(&self) -> usize {
        self.walls.height
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// [true] iff `pos` is inside the grid and blocked.
    pub fn is_wall(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && self.walls.get(pos.x as usize, pos.y as usize)
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.walls.index_in_bounds(x as usize, y as usize)
    }

    fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.walls.get(pos.x as usize, pos.y as usize)
    }

    /// The traversable neighbors of `state` with the move that reaches each,
    /// in an order shuffled per call. The shuffle intentionally varies which
    /// of several equally valid paths a search discovers from run to run;
    /// walls and bounds are still respected exactly, and out-of-range
    /// candidates are dropped silently.
    pub fn neighbors(&self, state: Point, rng: &mut impl Rng) -> Vec<(Move, Point)> {
        let mut moves = [Move::Down, Move::Right, Move::Up, Move::Left];
        moves.shuffle(rng);
        moves
            .iter()
            .map(|&m| (m, m.apply(state)))
            .filter(|(_, p)| self.can_move_to(*p))
            .collect()
    }

    /// Checks if start and goal are on different components.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            let start_ix = self.walls.get_ix(start.x as usize, start.y as usize);
            let goal_ix = self.walls.get_ix(goal.x as usize, goal.y as usize);
            if self.components.equiv(start_ix, goal_ix) {
                false
            } else {
                info!("{} and {} are on different components", start, goal);
                true
            }
        } else {
            true
        }
    }

    /// Whether some sequence of moves connects the start to the goal. This is
    /// a constant-time component lookup, not a search; the solver reports the
    /// same outcome by exhausting its frontier.
    pub fn is_solvable(&self) -> bool {
        !self.unreachable(&self.start, &self.goal)
    }

    /// Links up open grid neighbours into the same components.
    fn generate_components(&mut self) {
        let w = self.walls.width;
        let h = self.walls.height;
        self.components = UnionFind::new(w * h);
        for x in 0..w {
            for y in 0..h {
                if !self.walls.get(x, y) {
                    let ix = self.walls.get_ix(x, y);
                    let point = Point::new(x as i32, y as i32);
                    for n in [
                        Point::new(point.x + 1, point.y),
                        Point::new(point.x, point.y + 1),
                    ] {
                        if self.can_move_to(n) {
                            self.components
                                .union(ix, self.walls.get_ix(n.x as usize, n.y as usize));
                        }
                    }
                }
            }
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.walls.height as i32 {
            for x in 0..self.walls.width as i32 {
                let p = Point::new(x, y);
                if p == self.start {
                    write!(f, "S")?;
                } else if p == self.goal {
                    write!(f, "G")?;
                } else if self.walls.get(x as usize, y as usize) {
                    write!(f, "#")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
