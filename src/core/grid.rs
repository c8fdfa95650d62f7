//! Letter grid
//!
//! `rows * cols` cells stored row-major. Row `r` occupies indices
//! `[r * cols, (r + 1) * cols)`.

use super::LetterState;

/// One tile of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// Uppercase ASCII letter, or `None` when blank
    pub value: Option<char>,
    pub state: LetterState,
}

impl Cell {
    /// Character to draw for this cell (space when blank)
    #[must_use]
    pub fn display_value(&self) -> char {
        self.value.unwrap_or(' ')
    }
}

/// Fixed-size grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// All cells in row-major order
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of row `row`
    ///
    /// # Panics
    /// Panics if `row >= rows`
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn set_value(&mut self, index: usize, value: Option<char>) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.value = value;
        }
    }

    /// Assign feedback states to every cell in `row`
    pub(crate) fn set_row_states(&mut self, row: usize, states: &[LetterState]) {
        let start = row * self.cols;
        for (cell, &state) in self.cells[start..start + self.cols].iter_mut().zip(states) {
            cell.state = state;
        }
    }

    /// Letters of `row` joined and lowercased; blanks are skipped
    #[must_use]
    pub fn row_word(&self, row: usize) -> String {
        self.row(row)
            .iter()
            .filter_map(|cell| cell.value)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }

    /// Reset every cell to blank and unset
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}
