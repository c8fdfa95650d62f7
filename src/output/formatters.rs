//! Formatting utilities for terminal output

use crate::core::{Cell, LetterState};
use colored::{ColoredString, Colorize};

/// Plain text of a tile: the letter padded to three columns
#[must_use]
pub fn tile_text(cell: &Cell) -> String {
    format!(" {} ", cell.display_value())
}

/// A tile colored by its feedback state
#[must_use]
pub fn colored_tile(cell: &Cell) -> ColoredString {
    let text = tile_text(cell);
    match cell.state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Wrong => text.white().on_bright_black(),
        LetterState::Unset => text.bright_white().on_black(),
    }
}

/// One grid row as adjacent colored tiles
#[must_use]
pub fn row_to_string(cells: &[Cell]) -> String {
    cells.iter().map(|c| colored_tile(c).to_string()).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
