//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, message log and status bar.

use super::app::{App, MessageStyle};
use crate::core::{COLS, LetterStatus, ROWS};
use crate::session::GameState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use rustc_hash::FxHashMap;

const KEYBOARD: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and messages
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE DAILY 🟨")
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

fn status_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

fn cell(letter: Option<u8>, status: Option<LetterStatus>) -> Span<'static> {
    let text = letter.map_or_else(
        || " · ".to_string(),
        |b| format!(" {} ", char::from(b).to_ascii_uppercase()),
    );
    Span::styled(text, status_style(status))
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let session = &app.today.session;
    let mut lines = Vec::with_capacity(ROWS * 2);

    for (guess, score) in session.rows() {
        let spans = guess
            .chars()
            .iter()
            .zip(score.statuses())
            .flat_map(|(&l, &status)| [cell(Some(l), Some(status)), Span::raw(" ")])
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if session.state() == GameState::Active {
        let draft = session.draft();
        let spans = (0..COLS)
            .flat_map(|i| [cell(draft.get(i).copied(), None), Span::raw(" ")])
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    while lines.len() < ROWS * 2 {
        let spans = (0..COLS)
            .flat_map(|_| [cell(None, None), Span::raw(" ")])
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.today.session.state() {
        GameState::Active => (" Board ", Color::White),
        GameState::Won => (" 🎉 Solved! Come back tomorrow ", Color::Green),
        GameState::Lost => (" Out of guesses. Come back tomorrow ", Color::Red),
    };

    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(board, area);
}

fn keyboard_lines(hints: &FxHashMap<u8, LetterStatus>) -> Vec<Line<'static>> {
    KEYBOARD
        .iter()
        .map(|row| {
            let spans = row
                .bytes()
                .flat_map(|b| [cell(Some(b), hints.get(&b).copied()), Span::raw(" ")])
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect()
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = Paragraph::new(keyboard_lines(&app.today.session.letter_hints()))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let session = &app.today.session;

    let day = Paragraph::new(format!("Day: {}", session.day())).alignment(Alignment::Center);
    f.render_widget(day, chunks[0]);

    let source =
        Paragraph::new(format!("Solution: {}", app.today.provenance)).alignment(Alignment::Center);
    f.render_widget(source, chunks[1]);

    let used = Paragraph::new(format!("Guesses: {}/{ROWS}", session.guesses().len()))
        .alignment(Alignment::Center);
    f.render_widget(used, chunks[2]);

    let help_text = if session.locked() {
        "Esc: Quit"
    } else {
        "Esc: Quit | Enter: Submit | ⌫: Delete"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::GameContext;
    use crate::core::Word;
    use crate::daily::DayIdentity;
    use crate::provider::OfflineFetcher;
    use crate::storage::MemoryStore;

    fn context() -> GameContext {
        GameContext::from_parts(
            Box::new(MemoryStore::new()),
            Box::new(OfflineFetcher),
            Word::new("crane").unwrap(),
            Some(DayIdentity::parse("2024-03-07").unwrap()),
        )
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn board_always_has_six_rows() {
        let ctx = context();
        let mut app = App::new(&ctx);
        assert_eq!(board_lines(&app).len(), ROWS * 2);

        app.today.session.submit_guess("slate").unwrap();
        app.today.session.append_letter('p');
        let lines = board_lines(&app);
        assert_eq!(lines.len(), ROWS * 2);
        assert_eq!(text(&lines[0]), " S   L   A   T   E  ");
        assert_eq!(text(&lines[2]), " P   ·   ·   ·   ·  ");
    }

    #[test]
    fn won_board_has_no_draft_row() {
        let ctx = context();
        let mut app = App::new(&ctx);
        app.today.session.submit_guess("crane").unwrap();

        let lines = board_lines(&app);
        assert_eq!(lines.len(), ROWS * 2);
        assert_eq!(lines[0].spans[0].style, status_style(Some(LetterStatus::Correct)));
    }

    #[test]
    fn keyboard_colours_follow_hints() {
        let mut hints = FxHashMap::default();
        hints.insert(b'q', LetterStatus::Absent);
        let lines = keyboard_lines(&hints);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans[0].style, status_style(Some(LetterStatus::Absent)));
        assert_eq!(lines[0].spans[2].style, status_style(None));
        assert_eq!(text(&lines[2]), " Z   X   C   V   B   N   M  ");
    }
}
