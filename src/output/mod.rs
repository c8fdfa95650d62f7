//! Terminal output formatting
//!
//! Display utilities for line-mode play and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    LOSE_TEXT, REVEAL_TEXT, WIN_TEXT, print_board, print_check_result, print_game_over,
    print_statistics,
};
