//! Core domain types for the game
//!
//! Pure types with no I/O: words, feedback evaluation, the grid, the game
//! state machine and the key mapping that drives it.

mod feedback;
mod grid;
mod input;
mod state;
mod word;

pub use feedback::{Feedback, LetterState};
pub use grid::{Cell, Grid};
pub use input::{Key, event_for_key};
pub use state::{Effect, GameEvent, GameState, reduce};
pub use word::{Word, WordError};
