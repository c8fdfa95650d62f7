//! Game state machine
//!
//! A [`GameState`] is a plain value. Every change goes through [`GameEvent`]:
//!
//! ```text
//! GameState + GameEvent  →  apply()  →  GameState' + Effect
//! ```
//!
//! `apply` never performs I/O. When a new target word is needed it returns
//! [`Effect::FetchWord`] and whoever drives the state (see `game::GameEngine`)
//! runs the fetch and feeds the result back as [`GameEvent::WordResolved`].
//!
//! Two lifecycle phases exist: Active (accepting input) and Over (all rows
//! used, or solved). Over only reacts to `Reset`.

use super::{Cell, Feedback, Grid, Word, WordError};

/// Everything that can happen to a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Type one letter into the current row
    Letter(char),
    /// Remove the last letter of the current row
    Backspace,
    /// Submit the current row as a guess
    Submit,
    /// Clear the board and request a new target word
    Reset,
    /// A requested target word is available for game `generation`
    WordResolved { generation: u64, word: Word },
}

/// Side effect requested by a transition, for the driver to carry out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fetch a target word for game `generation`
    FetchWord { generation: u64 },
    /// The submitted row ended the game
    GameOver { solved: bool, guesses: usize },
    /// The resolved word became the target
    TargetReplaced,
    /// The resolved word was ignored (superseded game, guessing already started,
    /// or wrong length)
    WordDiscarded,
}

/// Complete state of one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    letter_count: usize,
    word_count: usize,
    solved: bool,
    target: Word,
    fallback: Word,
    generation: u64,
}

impl GameState {
    /// Create a fresh game on a `rows` x `cols` grid with `fallback` as the
    /// initial target
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if `fallback` does not have `cols`
    /// letters.
    pub fn new(rows: usize, cols: usize, fallback: Word) -> Result<Self, WordError> {
        if fallback.len() != cols {
            return Err(WordError::InvalidLength {
                expected: cols,
                actual: fallback.len(),
            });
        }

        Ok(Self {
            grid: Grid::new(rows, cols),
            letter_count: 0,
            word_count: 0,
            solved: false,
            target: fallback.clone(),
            fallback,
            generation: 0,
        })
    }

    /// Apply one event in place
    pub fn apply(&mut self, event: GameEvent) -> Effect {
        match event {
            GameEvent::Letter(ch) => {
                self.type_letter(ch);
                Effect::None
            }
            GameEvent::Backspace => {
                self.backspace();
                Effect::None
            }
            GameEvent::Submit => self.submit_guess(),
            GameEvent::Reset => self.reset(),
            GameEvent::WordResolved { generation, word } => self.resolve_word(generation, word),
        }
    }

    fn type_letter(&mut self, ch: char) {
        if self.is_over() || !ch.is_ascii_alphabetic() || self.letter_count >= self.row_end() {
            return;
        }
        self.grid
            .set_value(self.letter_count, Some(ch.to_ascii_uppercase()));
        self.letter_count += 1;
    }

    fn backspace(&mut self) {
        if self.is_over() || self.letter_count <= self.row_start() {
            return;
        }
        self.letter_count -= 1;
        self.grid.set_value(self.letter_count, None);
    }

    fn submit_guess(&mut self) -> Effect {
        if self.is_over() || self.letter_count != self.row_end() {
            return Effect::None;
        }

        let row = self.word_count;
        // Cells only ever hold ASCII letters, so the row always forms a Word
        let Ok(guess) = Word::new(self.grid.row_word(row)) else {
            return Effect::None;
        };

        let feedback = Feedback::evaluate(&guess, &self.target);
        self.solved = feedback.is_perfect();
        self.grid.set_row_states(row, feedback.states());
        self.word_count += 1;

        if self.is_over() {
            Effect::GameOver {
                solved: self.solved,
                guesses: self.word_count,
            }
        } else {
            Effect::None
        }
    }

    fn reset(&mut self) -> Effect {
        self.grid.clear();
        self.letter_count = 0;
        self.word_count = 0;
        self.solved = false;
        self.target = self.fallback.clone();
        self.generation += 1;
        Effect::FetchWord {
            generation: self.generation,
        }
    }

    fn resolve_word(&mut self, generation: u64, word: Word) -> Effect {
        if generation != self.generation
            || self.word_count > 0
            || word.len() != self.grid.cols()
        {
            return Effect::WordDiscarded;
        }
        self.target = word;
        Effect::TargetReplaced
    }

    #[inline]
    fn row_start(&self) -> usize {
        self.word_count * self.grid.cols()
    }

    #[inline]
    fn row_end(&self) -> usize {
        self.row_start() + self.grid.cols()
    }

    /// True once every row is used or the word was found
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.solved || self.word_count >= self.grid.rows()
    }

    #[must_use]
    pub const fn solved(&self) -> bool {
        self.solved
    }

    /// Total letters entered across all rows
    #[must_use]
    pub const fn letter_count(&self) -> usize {
        self.letter_count
    }

    /// Number of submitted rows
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Token identifying this game; bumped by every reset
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn fallback(&self) -> &Word {
        &self.fallback
    }

    /// Target word uppercased, for the end-of-game reveal
    #[must_use]
    pub fn target_display(&self) -> String {
        self.target.to_display()
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Emoji lines for every submitted row
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        (0..self.word_count)
            .map(|row| self.grid.row(row).iter().map(|c| c.state.emoji()).collect())
            .collect()
    }
}

/// Pure transition: consume a state and an event, return the next state
#[must_use]
pub fn reduce(mut state: GameState, event: GameEvent) -> GameState {
    state.apply(event);
    state
}
