//! Wordle Game
//!
//! A Wordle-style guessing game: a pure game-state machine, guess feedback
//! with exact duplicate-letter handling, and pluggable target word providers.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{GameEvent, GameState, LetterState, Word, reduce};
//!
//! let mut state = GameState::new(6, 5, Word::new("react").unwrap()).unwrap();
//! for ch in "tacer".chars() {
//!     state = reduce(state, GameEvent::Letter(ch));
//! }
//! state = reduce(state, GameEvent::Submit);
//!
//! assert!(state.grid().row(0).iter().all(|c| c.state == LetterState::Present));
//! assert!(!state.is_over());
//! ```

// Core domain types
pub mod core;

// Engine binding state to word providers
pub mod game;

// Target word sources
pub mod provider;

// Word lists
pub mod wordlists;

// Settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
