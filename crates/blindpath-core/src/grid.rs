//! The [`Grid`] type: an immutable rectangle of open cells and walls.
//!
//! A `Grid` is fixed for the lifetime of a search run: dimensions, start,
//! goal and walls are set once at construction and only read afterwards.
//! Building through [`GridConfig`](crate::GridConfig) validates the
//! endpoints; [`Grid::new`] trusts the caller.

use std::collections::HashSet;

use crate::geom::{Position, PositionIter};

/// A bounded search grid with a start cell, a goal cell and static walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    start: Position,
    goal: Position,
    walls: HashSet<Position>,
}

impl Grid {
    /// Create a grid without checking that `start` and `goal` are open,
    /// in-bounds cells.
    pub fn new(
        rows: i32,
        cols: i32,
        start: Position,
        goal: Position,
        walls: impl IntoIterator<Item = Position>,
    ) -> Self {
        Self {
            rows,
            cols,
            start,
            goal,
            walls: walls.into_iter().collect(),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// The static wall set.
    #[inline]
    pub fn walls(&self) -> &HashSet<Position> {
        &self.walls
    }

    /// Total number of cells, walls included.
    #[inline]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the grid has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `p` lies inside `[0, rows) x [0, cols)`.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    #[inline]
    pub fn is_wall(&self, p: Position) -> bool {
        self.walls.contains(&p)
    }

    /// Whether `p` is an in-bounds, non-wall cell.
    #[inline]
    pub fn is_valid(&self, p: Position) -> bool {
        self.contains(p) && !self.is_wall(p)
    }

    /// Row-major iterator over every cell of the grid.
    #[inline]
    pub fn positions(&self) -> PositionIter {
        PositionIter::new(self.rows, self.cols)
    }
}
