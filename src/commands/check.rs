//! Feedback check command
//!
//! Scores one guess against one target without playing a game.

use crate::core::{Feedback, Word};

/// Result of checking a guess
#[derive(Debug)]
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess =
        Word::with_len(guess, target.len()).map_err(|e| format!("Invalid guess word: {e}"))?;
    let feedback = Feedback::evaluate(&guess, &target);

    Ok(CheckResult {
        guess,
        target,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_valid_pair() {
        let result = check_guess("llama", "ALLOW").unwrap();
        assert_eq!(result.target.text(), "allow");
        assert_eq!(result.feedback.count_correct(), 1);
        assert_eq!(result.feedback.count_present(), 2);
    }

    #[test]
    fn check_rejects_length_mismatch() {
        let err = check_guess("kite", "react").unwrap_err();
        assert!(err.starts_with("Invalid guess word"));
    }

    #[test]
    fn check_rejects_bad_target() {
        assert!(check_guess("react", "re@ct").is_err());
    }
}
