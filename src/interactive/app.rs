//! TUI application state and event loop

use crate::core::Key;
use crate::game::GameEngine;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How long to wait for a key before checking for fetched words
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub engine: GameEngine,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            should_quit: false,
        }
    }

    /// React to one key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c' | 'q'))
        {
            self.should_quit = true;
            return;
        }

        let effect = self.engine.handle_key(map_key(key.code, key.modifiers));
        if let Some(effect) = effect {
            debug!("Key {:?} -> {effect:?}", key.code);
        }
    }
}

/// Translate a crossterm key code into a game key
///
/// Letters held with Ctrl or Alt are shortcuts, not typing.
#[must_use]
pub fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Key {
    match code {
        KeyCode::Char(_) if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Key::Other
        }
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    info!("TUI started");
    let mut needs_redraw = true;

    loop {
        if app.engine.poll_words() {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| super::rendering::ui(f, &app))?;
            needs_redraw = false;
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    app.handle_key_event(key);
                    needs_redraw = true;
                }
                Event::Resize(..) => needs_redraw = true,
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    let stats = app.engine.stats();
    info!(
        "TUI closed after {} games ({} won)",
        stats.total_games, stats.games_won
    );
    Ok(())
}
