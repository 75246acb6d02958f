//! An off-screen [`Canvas`] of styled [`Cell`]s and the [`FrameCell`] diffs
//! flushed to the terminal.

use crate::style::Style;

/// A styled character cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    /// Set the character (builder).
    #[inline]
    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = ch;
        self
    }

    /// Set the style (builder).
    #[inline]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// A single cell that changed between frames, at screen column `x`, row `y`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub cell: Cell,
    pub x: u16,
    pub y: u16,
}

/// A fixed-size screen buffer. Writes outside the buffer are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Canvas {
    /// Create a canvas filled with blank cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![Cell::default(); width as usize * height as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Read the cell at (`x`, `y`). Returns `Cell::default()` outside the
    /// canvas.
    pub fn at(&self, x: u16, y: u16) -> Cell {
        self.index(x, y).map_or_else(Cell::default, |i| self.cells[i])
    }

    /// Write a cell.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Write `text` left to right from (`x`, `y`), one cell per char.
    /// Returns the column after the last char written.
    pub fn text(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        let mut cx = x;
        for ch in text.chars() {
            self.set(cx, y, Cell { ch, style });
            cx = cx.saturating_add(1);
        }
        cx
    }

    /// Fill a rectangle with `cell`.
    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, cell: Cell) {
        for cy in y..y.saturating_add(h) {
            for cx in x..x.saturating_add(w) {
                self.set(cx, cy, cell);
            }
        }
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Cells that differ from `prev`. A `prev` of another size yields every
    /// cell.
    pub fn diff(&self, prev: &Canvas) -> Vec<FrameCell> {
        let same_size = prev.width == self.width && prev.height == self.height;
        let mut out = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.at(x, y);
                if !same_size || prev.at(x, y) != cell {
                    out.push(FrameCell { cell, x, y });
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn set_and_read_back() {
        let mut c = Canvas::new(4, 3);
        c.set(2, 1, Cell::default().with_char('X'));
        assert_eq!(c.at(2, 1).ch, 'X');
        // Out of bounds writes are ignored and reads return default.
        c.set(10, 10, Cell::default().with_char('Y'));
        assert_eq!(c.at(10, 10), Cell::default());
    }

    #[test]
    fn text_clips_at_edge() {
        let mut c = Canvas::new(5, 1);
        let end = c.text(2, 0, "abcdef", Style::default());
        assert_eq!(end, 8);
        assert_eq!(c.at(4, 0).ch, 'c');
    }

    #[test]
    fn fill_rectangle() {
        let mut c = Canvas::new(4, 4);
        c.fill(1, 1, 2, 2, Cell::default().with_char('#'));
        assert_eq!(c.at(1, 1).ch, '#');
        assert_eq!(c.at(2, 2).ch, '#');
        assert_eq!(c.at(3, 3).ch, ' ');
    }

    #[test]
    fn diff_reports_changes_only() {
        let a = Canvas::new(3, 2);
        let mut b = Canvas::new(3, 2);
        let red = Style::default().with_fg(Color::from_rgb(255, 0, 0));
        b.set(1, 0, Cell { ch: 'A', style: red });
        let frame = b.diff(&a);
        assert_eq!(frame.len(), 1);
        assert_eq!((frame[0].x, frame[0].y), (1, 0));
        assert_eq!(frame[0].cell.ch, 'A');
    }

    #[test]
    fn diff_against_other_size_is_full() {
        let a = Canvas::new(1, 1);
        let b = Canvas::new(2, 2);
        assert_eq!(b.diff(&a).len(), 4);
    }
}
