//! Grids and assertions shared by the strategy tests.

use std::collections::{HashSet, VecDeque};

use blindpath_core::{Grid, GridConfig, Position};
use rand::{Rng, RngExt};

use crate::neighbors::neighbors;

pub(crate) fn reference_grid() -> Grid {
    GridConfig::reference().build().unwrap()
}

pub(crate) fn open_grid(rows: i32, cols: i32, start: Position, goal: Position) -> Grid {
    GridConfig::open(rows, cols, start, goal).build().unwrap()
}

/// The reference grid with every neighbor of the goal walled off.
pub(crate) fn isolated_goal() -> Grid {
    let mut cfg = GridConfig::reference();
    for p in [(7, 8), (8, 9), (9, 8), (9, 9), (8, 7), (7, 7)] {
        cfg.walls.push(Position::from(p));
    }
    cfg.build().unwrap()
}

/// A grid split by a full wall column, start on the left, goal on the right.
pub(crate) fn split_grid() -> Grid {
    let mut cfg = GridConfig::open(5, 5, Position::new(2, 0), Position::new(2, 4));
    cfg.walls = (0..5).map(|row| Position::new(row, 2)).collect();
    cfg.build().unwrap()
}

pub(crate) fn random_grid<R: Rng>(rng: &mut R) -> Grid {
    let rows = rng.random_range(2..9);
    let cols = rng.random_range(2..9);
    let start = Position::new(rng.random_range(0..rows), rng.random_range(0..cols));
    let goal = Position::new(rng.random_range(0..rows), rng.random_range(0..cols));
    let mut cfg = GridConfig::open(rows, cols, start, goal);
    cfg.scatter_walls(0.25, rng).unwrap();
    cfg.build().unwrap()
}

/// Start at the grid's start, end at its goal, and only take legal moves.
pub(crate) fn assert_valid_path(grid: &Grid, path: &[Position]) {
    assert!(!path.is_empty(), "expected a path");
    assert_eq!(path.first(), Some(&grid.start()));
    assert_eq!(path.last(), Some(&grid.goal()));
    for pair in path.windows(2) {
        let next: Vec<Position> = neighbors(grid, pair[0]).iter().map(|n| n.pos).collect();
        assert!(
            next.contains(&pair[1]),
            "{} -> {} is not a legal move",
            pair[0],
            pair[1]
        );
    }
}

/// Total move cost along `path`.
pub(crate) fn path_cost(grid: &Grid, path: &[Position]) -> f64 {
    path.windows(2)
        .map(|pair| {
            neighbors(grid, pair[0])
                .into_iter()
                .find(|n| n.pos == pair[1])
                .map_or(f64::INFINITY, |n| n.cost)
        })
        .sum()
}

/// Fewest moves from start to goal, by an independent flood fill.
pub(crate) fn shortest_edges(grid: &Grid) -> Option<usize> {
    let mut dist = std::collections::HashMap::from([(grid.start(), 0usize)]);
    let mut queue = VecDeque::from([grid.start()]);
    while let Some(p) = queue.pop_front() {
        if p == grid.goal() {
            return dist.get(&p).copied();
        }
        let d = dist[&p];
        for n in neighbors(grid, p) {
            if !dist.contains_key(&n.pos) {
                dist.insert(n.pos, d + 1);
                queue.push_back(n.pos);
            }
        }
    }
    None
}

/// Cheapest move cost from start to goal, by exhaustive relaxation.
pub(crate) fn cheapest_cost(grid: &Grid) -> Option<f64> {
    let mut best = std::collections::HashMap::from([(grid.start(), 0.0f64)]);
    let mut changed = true;
    while changed {
        changed = false;
        let snapshot: Vec<(Position, f64)> = best.iter().map(|(&p, &c)| (p, c)).collect();
        for (p, c) in snapshot {
            for n in neighbors(grid, p) {
                let nc = c + n.cost;
                if best.get(&n.pos).is_none_or(|&old| nc < old - 1e-9) {
                    best.insert(n.pos, nc);
                    changed = true;
                }
            }
        }
    }
    best.get(&grid.goal()).copied()
}

/// Whether visited sizes never shrink from one step to the next.
pub(crate) fn visited_monotone(steps: &[crate::Step]) -> bool {
    steps
        .windows(2)
        .all(|w| w[0].visited.len() <= w[1].visited.len())
}

pub(crate) fn reachable(grid: &Grid) -> HashSet<Position> {
    let mut seen = HashSet::from([grid.start()]);
    let mut stack = vec![grid.start()];
    while let Some(p) = stack.pop() {
        for n in neighbors(grid, p) {
            if seen.insert(n.pos) {
                stack.push(n.pos);
            }
        }
    }
    seen
}
