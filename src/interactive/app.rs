//! TUI application state and logic

use crate::commands::{GameContext, Today};
use crate::core::ROWS;
use crate::output::celebration;
use crate::session::{GameState, Outcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How often the event loop wakes up to notice a new day
const TICK: Duration = Duration::from_secs(1);

/// Application state
pub struct App<'a> {
    pub ctx: &'a GameContext,
    pub today: Today<'a>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(ctx: &'a GameContext) -> Self {
        let mut app = Self {
            ctx,
            today: ctx.open_today(),
            messages: Vec::new(),
            should_quit: false,
        };
        app.greet();
        app
    }

    fn greet(&mut self) {
        if let Some(notice) = self.today.provenance.notice() {
            self.add_message(notice, MessageStyle::Info);
        }

        match self.today.session.state() {
            GameState::Active if self.today.session.guesses().is_empty() => {
                self.add_message("Type a word and press Enter.", MessageStyle::Info);
            }
            GameState::Active => {
                self.add_message("Welcome back! Your game was restored.", MessageStyle::Info);
            }
            GameState::Won => self.add_message("You Win", MessageStyle::Success),
            GameState::Lost => self.announce_loss(),
        }
    }

    fn announce_loss(&mut self) {
        let text = self
            .today
            .session
            .revealed_solution()
            .map(|solution| format!("Out of guesses — solution: {}", solution.text().to_uppercase()));
        if let Some(text) = text {
            self.add_message(&text, MessageStyle::Error);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.today.session.append_letter(c);
            }
            KeyCode::Backspace => {
                self.today.session.remove_last_letter();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        match self.today.session.submit_draft() {
            Ok(Outcome::Ignored) => {}
            Ok(Outcome::Continue(score)) => {
                let remaining = ROWS - self.today.session.guesses().len();
                self.add_message(
                    &format!("{score}  {remaining} guesses left"),
                    MessageStyle::Info,
                );
            }
            Ok(Outcome::Won(_)) => {
                let count = self.today.session.guesses().len();
                self.add_message("You Win", MessageStyle::Success);
                self.add_message(celebration(count), MessageStyle::Success);
            }
            Ok(Outcome::Lost { .. }) => self.announce_loss(),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Switch to a fresh session once the local date changes
    pub fn check_rollover(&mut self) {
        let ctx = self.ctx;
        if ctx.roll_over(&mut self.today) {
            self.messages.clear();
            self.add_message("🌅 A new day has started!", MessageStyle::Success);
            self.greet();
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
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
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.check_rollover();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::daily::DayIdentity;
    use crate::provider::OfflineFetcher;
    use crate::storage::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn context() -> GameContext {
        GameContext::from_parts(
            Box::new(MemoryStore::new()),
            Box::new(OfflineFetcher),
            Word::new("crane").unwrap(),
            Some(DayIdentity::parse("2024-03-07").unwrap()),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn greets_with_fallback_notice() {
        let ctx = context();
        let app = App::new(&ctx);
        assert_eq!(app.messages[0].text, "Offline: using fallback solution");
    }

    #[test]
    fn short_row_reports_error() {
        let ctx = context();
        let mut app = App::new(&ctx);
        type_word(&mut app, "cra");

        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Not enough letters");
        assert!(matches!(last.style, MessageStyle::Error));
    }

    #[test]
    fn winning_locks_input() {
        let ctx = context();
        let mut app = App::new(&ctx);
        type_word(&mut app, "slate");
        type_word(&mut app, "CRANE");

        assert_eq!(app.today.session.state(), GameState::Won);
        assert!(app.messages.iter().any(|m| m.text == "You Win"));

        press(&mut app, KeyCode::Char('a'));
        assert!(app.today.session.draft().is_empty());
    }

    #[test]
    fn modified_letters_are_not_typed() {
        let ctx = context();
        let mut app = App::new(&ctx);
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT));
        assert!(app.today.session.draft().is_empty());

        app.handle_key(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT));
        assert_eq!(app.today.session.draft(), b"c");
        assert!(!app.should_quit);
    }

    #[test]
    fn new_day_starts_a_fresh_board() {
        let clock = Rc::new(RefCell::new(DayIdentity::parse("2024-03-07").unwrap()));
        let shared = Rc::clone(&clock);
        let ctx = context().with_clock(move || shared.borrow().clone());
        let mut app = App::new(&ctx);
        type_word(&mut app, "slate");

        app.check_rollover();
        assert_eq!(app.today.session.guesses().len(), 1);

        *clock.borrow_mut() = DayIdentity::parse("2024-03-08").unwrap();
        app.check_rollover();
        assert_eq!(app.today.session.day().as_str(), "2024-03-08");
        assert!(app.today.session.guesses().is_empty());
        assert_eq!(app.messages[0].text, "🌅 A new day has started!");
    }

    #[test]
    fn escape_quits() {
        let ctx = context();
        let mut app = App::new(&ctx);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn reopened_win_is_announced() {
        let ctx = context();
        {
            let mut app = App::new(&ctx);
            type_word(&mut app, "crane");
        }
        let app = App::new(&ctx);
        assert!(app.messages.iter().any(|m| m.text == "You Win"));
    }

    #[test]
    fn message_log_is_bounded() {
        let ctx = context();
        let mut app = App::new(&ctx);
        for _ in 0..10 {
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.messages.len(), 5);
    }
}
