//! TUI rendering with ratatui
//!
//! The board is drawn as numbered tiles; a popup announces the result once
//! the game is over.

use super::app::App;
use crate::core::{Cell, GameState, LetterState};
use crate::output::{LOSE_TEXT, REVEAL_TEXT, WIN_TEXT};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Board
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app.engine.state(), chunks[1]);
    render_status(f, app, chunks[2]);

    if app.engine.state().is_over() {
        render_game_over(f, app.engine.state(), chunks[1]);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, state: &GameState, area: Rect) {
    let cols = u16::try_from(state.cols()).unwrap_or(u16::MAX);
    let rows = u16::try_from(state.rows()).unwrap_or(u16::MAX);
    let board = centered(
        area,
        cols.saturating_mul(TILE_WIDTH),
        rows.saturating_mul(TILE_HEIGHT),
    );

    for (index, cell) in state.cells().iter().enumerate() {
        let row = u16::try_from(index / state.cols()).unwrap_or(u16::MAX);
        let col = u16::try_from(index % state.cols()).unwrap_or(u16::MAX);
        let tile = Rect::new(
            board.x.saturating_add(col.saturating_mul(TILE_WIDTH)),
            board.y.saturating_add(row.saturating_mul(TILE_HEIGHT)),
            TILE_WIDTH - 1,
            TILE_HEIGHT,
        )
        .intersection(area);

        if !tile.is_empty() {
            render_tile(f, cell, index + 1, tile);
        }
    }
}

fn render_tile(f: &mut Frame, cell: &Cell, number: usize, area: Rect) {
    let style = tile_style(cell.state);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            number.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
        .border_style(style);

    let letter = Paragraph::new(cell.display_value().to_string())
        .alignment(Alignment::Center)
        .style(style.add_modifier(Modifier::BOLD))
        .block(block);
    f.render_widget(letter, area);
}

/// Tile colors by feedback state
#[must_use]
pub fn tile_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterState::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterState::Wrong => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterState::Unset => Style::default().fg(Color::White),
    }
}

fn render_game_over(f: &mut Frame, state: &GameState, area: Rect) {
    let popup = centered(area, 36, 7);

    let (headline, color) = if state.solved() {
        (WIN_TEXT, Color::Green)
    } else {
        (LOSE_TEXT, Color::Red)
    };

    let content = vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(format!("{REVEAL_TEXT} ")),
            Span::styled(
                state.target_display(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("(Press "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" to start again)"),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let state = app.engine.state();
    let guess_text = if state.is_over() {
        format!("Guesses {}/{}", state.word_count(), state.rows())
    } else {
        format!("Guess {}/{}", state.word_count() + 1, state.rows())
    };
    f.render_widget(
        Paragraph::new(guess_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats = app.engine.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Enter: Submit | Ctrl+C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

/// A `width` x `height` rect centered in `area` (clamped to fit)
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameEngine;
    use crate::provider::FixedWord;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App {
        let fallback = Word::new("react").unwrap();
        let state = GameState::new(6, 5, fallback.clone()).unwrap();
        App::new(GameEngine::new(state, Arc::new(FixedWord::new(fallback))))
    }

    #[test]
    fn board_shows_typed_letters() {
        let mut app = app();
        for c in "crane".chars() {
            app.engine.type_letter(c);
        }
        let screen = render(&app);
        assert!(screen.contains("WORDLE"));
        // Nothing else on screen uses a capital N
        assert!(screen.contains('N'));
        assert!(screen.contains("Guess 1/6"));
        assert!(!screen.contains(WIN_TEXT));
    }

    #[test]
    fn win_popup_reveals_word() {
        let mut app = app();
        for c in "react".chars() {
            app.engine.type_letter(c);
        }
        app.engine.submit_guess();

        let screen = render(&app);
        assert!(screen.contains(WIN_TEXT));
        assert!(screen.contains("REACT"));
        assert!(screen.contains("to start again"));
        assert!(screen.contains("Guesses 1/6"));
    }

    #[test]
    fn status_counts_the_row_being_typed() {
        let mut app = app();
        for c in "crane".chars() {
            app.engine.type_letter(c);
        }
        app.engine.submit_guess();
        assert!(render(&app).contains("Guess 2/6"));
    }

    #[test]
    fn tile_styles_differ_by_state() {
        assert_ne!(
            tile_style(LetterState::Correct),
            tile_style(LetterState::Present)
        );
        assert_eq!(tile_style(LetterState::Unset).bg, None);
    }
}
