use blindpath_core::{Grid, Position};

/// Cost of an orthogonal move.
pub const ORTHOGONAL_COST: f64 = 1.0;

/// Cost of a diagonal move. Not `SQRT_2`: UCS tie-breaks depend on this
/// exact value.
pub const DIAGONAL_COST: f64 = 1.414;

/// Move offsets in clockwise priority: up, right, down, down-right, left,
/// up-left.
///
/// Stack-based strategies (DFS, DLS, IDDFS) push neighbors in the reverse of
/// this order so that popping yields them in forward order. Changing either
/// the order or the reversal changes which path those strategies find.
pub const DIRECTIONS: [Position; 6] = [
    Position::new(-1, 0),
    Position::new(0, 1),
    Position::new(1, 0),
    Position::new(1, 1),
    Position::new(0, -1),
    Position::new(-1, -1),
];

/// A reachable neighbor and the cost of the edge leading to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub pos: Position,
    pub cost: f64,
}

/// Cached neighbor computation helper.
///
/// Reuses one buffer across calls so that a search loop does not allocate
/// per expansion.
pub struct Neighbors {
    buf: Vec<Neighbor>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DIRECTIONS.len()),
        }
    }

    /// Return the valid neighbors of `p` in [`DIRECTIONS`] order.
    pub fn clockwise(&mut self, grid: &Grid, p: Position) -> &[Neighbor] {
        self.buf.clear();
        for d in DIRECTIONS {
            let n = p + d;
            if grid.is_valid(n) {
                let cost = if d.is_diagonal() {
                    DIAGONAL_COST
                } else {
                    ORTHOGONAL_COST
                };
                self.buf.push(Neighbor { pos: n, cost });
            }
        }
        &self.buf
    }
}

/// Valid neighbors of `p` in clockwise priority, with their edge costs.
pub fn neighbors(grid: &Grid, p: Position) -> Vec<Neighbor> {
    Neighbors::new().clockwise(grid, p).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(ns: &[Neighbor]) -> Vec<Position> {
        ns.iter().map(|n| n.pos).collect()
    }

    #[test]
    fn interior_cell_yields_clockwise_order() {
        let grid = Grid::new(5, 5, Position::ZERO, Position::new(4, 4), []);
        let ns = neighbors(&grid, Position::new(2, 2));
        assert_eq!(
            positions(&ns),
            vec![
                Position::new(1, 2),
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(3, 3),
                Position::new(2, 1),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn diagonal_moves_cost_more() {
        let grid = Grid::new(5, 5, Position::ZERO, Position::new(4, 4), []);
        let ns = neighbors(&grid, Position::new(2, 2));
        let costs: Vec<f64> = ns.iter().map(|n| n.cost).collect();
        assert_eq!(costs, vec![1.0, 1.0, 1.0, 1.414, 1.0, 1.414]);
    }

    #[test]
    fn corner_and_walls_are_filtered() {
        let grid = Grid::new(
            3,
            3,
            Position::ZERO,
            Position::new(2, 2),
            [Position::new(0, 1)],
        );
        let ns = neighbors(&grid, Position::ZERO);
        assert_eq!(
            positions(&ns),
            vec![Position::new(1, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn neighbor_relation_is_symmetric() {
        let grid = Grid::new(4, 4, Position::ZERO, Position::new(3, 3), []);
        for p in grid.positions() {
            for n in neighbors(&grid, p) {
                assert!(positions(&neighbors(&grid, n.pos)).contains(&p));
            }
        }
    }

    #[test]
    fn helper_reuses_buffer() {
        let grid = Grid::new(3, 3, Position::ZERO, Position::new(2, 2), []);
        let mut nb = Neighbors::new();
        assert_eq!(nb.clockwise(&grid, Position::new(1, 1)).len(), 6);
        assert_eq!(nb.clockwise(&grid, Position::ZERO).len(), 3);
    }
}
