//! Per-letter feedback for a submitted guess
//!
//! Each position of a guess gets one [`LetterState`]:
//! - `Correct` = right letter, right position
//! - `Present` = letter occurs elsewhere in the target
//! - `Wrong` = letter absent, or all of its occurrences already accounted for
//!
//! `Unset` is only ever seen on cells that have not been submitted yet.

use super::Word;

/// Visual state of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterState {
    #[default]
    Unset,
    Wrong,
    Present,
    Correct,
}

impl LetterState {
    /// Emoji tile used in shareable summaries
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Wrong => '⬛',
            Self::Unset => '⬜',
        }
    }
}

/// Feedback for one full row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback(Vec<LetterState>);

impl Feedback {
    /// Evaluate `guess` against `target`
    ///
    /// Duplicate letters are handled with a consumable letter pool, so a letter
    /// guessed more often than it occurs in the target is only credited as many
    /// times as it occurs.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the pool
    /// 2. Second pass: mark remaining letters present while the pool has them
    ///
    /// Both words must have the same length; extra letters on either side are
    /// ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterState, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let target = Word::new("allow").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.states(), &[
    ///     LetterState::Present,
    ///     LetterState::Correct,
    ///     LetterState::Present,
    ///     LetterState::Wrong,
    ///     LetterState::Wrong,
    /// ]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let len = guess.len().min(target.len());
        let guess = &guess.chars()[..len];
        let answer = &target.chars()[..len];

        let mut result = vec![LetterState::Wrong; len];
        let mut available = target.char_counts();

        // First pass: exact position matches
        for (i, (&g, &a)) in guess.iter().zip(answer).enumerate() {
            if g == a {
                result[i] = LetterState::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        for (i, &g) in guess.iter().enumerate() {
            if result[i] == LetterState::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                result[i] = LetterState::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.0
    }

    /// True when every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterState::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterState::Correct)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterState::Present)
    }

    fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Convert to an emoji string like "🟨🟩🟨⬛⬛"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}
