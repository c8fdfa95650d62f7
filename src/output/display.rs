//! Display functions for line-mode play and command results

use super::formatters::{create_progress_bar, row_to_string};
use crate::commands::CheckResult;
use crate::core::GameState;
use crate::game::Statistics;
use colored::Colorize;

pub const WIN_TEXT: &str = "You've guessed it!";
pub const LOSE_TEXT: &str = "You've lost...";
pub const REVEAL_TEXT: &str = "The word is";

/// Print every row of the board, submitted or not
pub fn print_board(state: &GameState) {
    println!();
    for row in 0..state.rows() {
        println!("   {}", row_to_string(state.grid().row(row)));
    }
    println!();
}

/// Print the end-of-game banner with the revealed word
pub fn print_game_over(state: &GameState) {
    println!("{}", "═".repeat(40).cyan());
    if state.solved() {
        println!(" {}", WIN_TEXT.bright_green().bold());
    } else {
        println!(" {}", LOSE_TEXT.red().bold());
    }
    println!(
        " {REVEAL_TEXT} {}",
        state.target_display().bright_yellow().bold()
    );
    println!();
    for line in state.summary() {
        println!("   {line}");
    }
    println!("{}", "═".repeat(40).cyan());
}

/// Print session statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Session:".bright_cyan().bold());
    println!("   Games played: {}", stats.total_games);
    println!("   Win rate:     {:.0}%", stats.win_rate());

    if stats.games_won == 0 {
        return;
    }

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count, most, 20);
        println!("   {guesses}: {} {count}", bar.green());
    }
}

/// Print the feedback for a single guess/target pair
pub fn print_check_result(result: &CheckResult) {
    println!(
        "{} vs {}: {}",
        result.guess.to_display().bright_white().bold(),
        result.target.to_display().bright_yellow().bold(),
        result.feedback.to_emoji()
    );
    println!(
        "  correct: {}  present: {}",
        result.feedback.count_correct(),
        result.feedback.count_present()
    );
}
