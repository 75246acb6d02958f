//! Grid configuration: the constants a caller supplies to build a [`Grid`].
//!
//! [`GridConfig`] is a plain value, constructed once and turned into an
//! immutable [`Grid`] through [`GridConfig::build`], which is where start,
//! goal and wall positions are checked. The search engine itself never
//! validates its input.

use std::fmt;

use rand::{Rng, RngExt};

use crate::geom::Position;
use crate::grid::Grid;

/// Height of the reference grid.
pub const REFERENCE_ROWS: i32 = 10;
/// Width of the reference grid.
pub const REFERENCE_COLS: i32 = 10;

const REFERENCE_WALLS: [(i32, i32); 10] = [
    (2, 3),
    (3, 3),
    (4, 3),
    (4, 4),
    (4, 5),
    (6, 5),
    (6, 6),
    (6, 7),
    (5, 7),
    (3, 7),
];

/// Caller-supplied grid parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Position,
    pub goal: Position,
    #[cfg_attr(feature = "serde", serde(default))]
    pub walls: Vec<Position>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl GridConfig {
    /// The fixed 10x10 grid with start (1, 1), goal (8, 8) and ten walls.
    pub fn reference() -> Self {
        Self {
            rows: REFERENCE_ROWS,
            cols: REFERENCE_COLS,
            start: Position::new(1, 1),
            goal: Position::new(8, 8),
            walls: REFERENCE_WALLS
                .iter()
                .map(|&rc| Position::from(rc))
                .collect(),
        }
    }

    /// An open grid with no walls.
    pub fn open(rows: i32, cols: i32, start: Position, goal: Position) -> Self {
        Self {
            rows,
            cols,
            start,
            goal,
            walls: Vec::new(),
        }
    }

    /// Replace the walls with random ones: every cell other than start and
    /// goal becomes a wall with probability `density`.
    pub fn scatter_walls<R: Rng>(&mut self, density: f64, rng: &mut R) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }
        self.walls.clear();
        for row in 0..self.rows.max(0) {
            for col in 0..self.cols.max(0) {
                let p = Position::new(row, col);
                if p == self.start || p == self.goal {
                    continue;
                }
                let r: f64 = rng.random();
                if r < density {
                    self.walls.push(p);
                }
            }
        }
        Ok(())
    }

    /// Validate the parameters and build the immutable [`Grid`].
    pub fn build(&self) -> Result<Grid, GridError> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(GridError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let grid = Grid::new(
            self.rows,
            self.cols,
            self.start,
            self.goal,
            self.walls.iter().copied(),
        );
        if let Some(&w) = self.walls.iter().find(|&&w| !grid.contains(w)) {
            return Err(GridError::OutOfBounds {
                what: "wall",
                pos: w,
            });
        }
        for (what, pos) in [("start", self.start), ("goal", self.goal)] {
            if !grid.contains(pos) {
                return Err(GridError::OutOfBounds { what, pos });
            }
            if grid.is_wall(pos) {
                return Err(GridError::Walled { what, pos });
            }
        }
        Ok(grid)
    }
}

impl From<&Grid> for GridConfig {
    fn from(grid: &Grid) -> Self {
        let mut walls: Vec<Position> = grid.walls().iter().copied().collect();
        walls.sort();
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            start: grid.start(),
            goal: grid.goal(),
            walls,
        }
    }
}

/// Errors that can occur when building a grid from a [`GridConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Rows or columns are zero or negative.
    EmptyGrid { rows: i32, cols: i32 },
    /// The start, goal or a wall lies outside the grid.
    OutOfBounds { what: &'static str, pos: Position },
    /// The start or goal sits on a wall.
    Walled { what: &'static str, pos: Position },
    /// A random wall density outside `[0, 1]`.
    InvalidDensity(f64),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => {
                write!(f, "grid must have positive size, got {rows}x{cols}")
            }
            Self::OutOfBounds { what, pos } => write!(f, "{what} {pos} is outside the grid"),
            Self::Walled { what, pos } => write!(f, "{what} {pos} is on a wall"),
            Self::InvalidDensity(d) => write!(f, "wall density {d} is not within [0, 1]"),
        }
    }
}

impl std::error::Error for GridError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_from_json() {
        let json = r#"{
            "rows": 4,
            "cols": 5,
            "start": {"row": 0, "col": 0},
            "goal": {"row": 3, "col": 4},
            "walls": [{"row": 1, "col": 1}]
        }"#;
        let cfg: GridConfig = serde_json::from_str(json).unwrap();
        let grid = cfg.build().unwrap();
        assert_eq!(grid.cols(), 5);
        assert!(grid.is_wall(Position::new(1, 1)));
    }

    #[test]
    fn walls_default_to_empty() {
        let json = r#"{"rows":2,"cols":2,"start":{"row":0,"col":0},"goal":{"row":1,"col":1}}"#;
        let cfg: GridConfig = serde_json::from_str(json).unwrap();
        assert!(cfg.walls.is_empty());
    }
}
