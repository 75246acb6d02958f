//! Geometry primitives: [`Position`] and the row-major [`PositionIter`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell on the grid. Rows grow downward, columns grow right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Whether this offset moves along both axes at once.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.row != 0 && self.col != 0
    }
}

// --- trait impls for Position ---

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// PositionIter
// ---------------------------------------------------------------------------

/// Row-major iterator over every position of a `rows x cols` rectangle.
#[derive(Clone, Debug)]
pub struct PositionIter {
    rows: i32,
    cols: i32,
    cur: Position,
}

impl PositionIter {
    pub(crate) fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            cur: Position::ZERO,
        }
    }

    /// A grid with no rows or no columns has no positions.
    fn is_degenerate(&self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }
}

impl Iterator for PositionIter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        if self.is_degenerate() || self.cur.row >= self.rows {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_degenerate() || self.cur.row >= self.rows {
            return (0, Some(0));
        }
        let remaining_in_row = (self.cols - self.cur.col) as usize;
        let remaining_rows = (self.rows - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * self.cols as usize;
        (total, Some(total))
    }
}

impl ExactSizeIterator for PositionIter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn position_round_trip() {
        let p = Position::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"row":3,"col":7}"#);
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
