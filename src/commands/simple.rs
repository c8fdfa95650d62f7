//! Simple line mode
//!
//! Text-based play without the TUI: one guess per line.

use crate::core::Word;
use crate::game::GameEngine;
use crate::output::{print_board, print_game_over, print_statistics};
use log::debug;
use std::io::{self, Write};

/// Run the line-mode game loop until the player quits
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(engine: &mut GameEngine) -> Result<(), String> {
    let cols = engine.state().cols();
    let rows = engine.state().rows();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                        Wordle - Line Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the {cols}-letter word in {rows} tries. Type 'quit' to exit.");

    loop {
        engine.poll_words();
        print_board(engine.state());

        if engine.state().is_over() {
            print_game_over(engine.state());
            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    engine.reset();
                    println!("\n🔄 New game started!");
                    continue;
                }
                _ => break,
            }
        }

        let prompt = format!("Guess {}/{rows}", engine.state().word_count() + 1);
        let input = get_user_input(&prompt)?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "" => {}
            _ => {
                if let Err(e) = Word::with_len(input.as_str(), cols) {
                    println!("❌ {e}");
                    continue;
                }
                // Pick up a word that arrived while the player was typing
                engine.poll_words();
                for ch in input.chars() {
                    engine.type_letter(ch);
                }
                let effect = engine.submit_guess();
                debug!("Submitted {input}: {effect:?}");
            }
        }
    }

    print_statistics(engine.stats());
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // EOF behaves like quitting
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
