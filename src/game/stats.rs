//! In-memory session statistics

/// Results of the games finished in this session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` = games won using exactly `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; rows + 1],
        }
    }

    pub fn record(&mut self, solved: bool, guesses: usize) {
        self.total_games += 1;
        if solved {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(guesses) {
                *slot += 1;
            }
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats() {
        let stats = Statistics::new(6);
        assert_eq!(stats.guess_distribution.len(), 7);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Statistics::new(6);
        stats.record(true, 3);
        stats.record(false, 6);
        stats.record(true, 3);
        stats.record(true, 1);

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.guess_distribution[3], 2);
        assert_eq!(stats.guess_distribution[1], 1);
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
    }
}
