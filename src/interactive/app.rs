//! TUI application state and logic

use crate::commands::{FilterResult, run_filter};
use crate::core::Conflict;
use crate::generator::CandidateGenerator;
use crate::input::RawFeedback;
use crate::parser::{ConstraintParser, Field, ParseError};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'d> {
    parser: ConstraintParser,
    generator: CandidateGenerator<'d>,
    pub green: String,
    pub yellow: String,
    pub gray: String,
    pub focus: Field,
    pub outcome: Outcome,
    /// First visible row of the candidate list
    pub scroll: usize,
    pub messages: Vec<Message>,
    /// Conflicts already shown as warnings for the current inputs
    reported_conflicts: Vec<Conflict>,
    pub should_quit: bool,
}

/// What the current inputs produce
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Nothing typed yet
    Empty,
    Ready(Box<FilterResult>),
    Invalid(ParseError),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Warning,
}

const MAX_MESSAGES: usize = 5;

impl<'d> App<'d> {
    #[must_use]
    pub fn new(parser: ConstraintParser, generator: CandidateGenerator<'d>) -> Self {
        let placeholder = parser.placeholder();
        Self {
            parser,
            generator,
            green: String::new(),
            yellow: String::new(),
            gray: String::new(),
            focus: Field::Green,
            outcome: Outcome::Empty,
            scroll: 0,
            messages: vec![
                Message {
                    text: "Type your feedback; candidates update as you go.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: format!(
                        "Green: '{placeholder}' for unknowns. Yellow: 'a1 b3'. Gray: letters still available."
                    ),
                    style: MessageStyle::Info,
                },
            ],
            reported_conflicts: Vec::new(),
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn placeholder(&self) -> char {
        self.parser.placeholder()
    }

    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Green => &self.green,
            Field::Yellow => &self.yellow,
            Field::Gray => &self.gray,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Green => &mut self.green,
            Field::Yellow => &mut self.yellow,
            Field::Gray => &mut self.gray,
        }
    }

    pub const fn focus_next(&mut self) {
        self.focus = match self.focus {
            Field::Green => Field::Yellow,
            Field::Yellow => Field::Gray,
            Field::Gray => Field::Green,
        };
    }

    pub const fn focus_previous(&mut self) {
        self.focus = match self.focus {
            Field::Green => Field::Gray,
            Field::Yellow => Field::Green,
            Field::Gray => Field::Yellow,
        };
    }

    #[must_use]
    pub fn get_candidates_count(&self) -> usize {
        match &self.outcome {
            Outcome::Ready(result) => result.candidate_count(),
            Outcome::Empty | Outcome::Invalid(_) => 0,
        }
    }

    /// Re-run the filter over the current inputs
    pub fn recompute(&mut self) {
        self.scroll = 0;

        let feedback = RawFeedback::new(&self.green, &self.yellow, &self.gray);
        if feedback == RawFeedback::default() {
            self.outcome = Outcome::Empty;
            self.reported_conflicts.clear();
            return;
        }

        self.outcome = match run_filter(&feedback, &self.parser, &self.generator) {
            Ok(result) => {
                self.report_conflicts(&result.conflicts);
                Outcome::Ready(Box::new(result))
            }
            Err(err) => {
                debug!("Inputs not parseable yet: {err}");
                Outcome::Invalid(err)
            }
        };
    }

    /// Warn about conflicts not already reported; an unchanged set adds nothing
    fn report_conflicts(&mut self, conflicts: &[Conflict]) {
        if conflicts == self.reported_conflicts.as_slice() {
            return;
        }
        let fresh: Vec<Conflict> = conflicts
            .iter()
            .filter(|c| !self.reported_conflicts.contains(c))
            .copied()
            .collect();
        for conflict in fresh {
            self.add_message(&conflict.to_string(), MessageStyle::Warning);
        }
        self.reported_conflicts = conflicts.to_vec();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    pub fn scroll_down(&mut self, rows: usize) {
        let last = self.get_candidates_count().saturating_sub(1);
        self.scroll = (self.scroll + rows).min(last);
    }

    pub const fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn clear_field(&mut self) {
        self.focused_mut().clear();
        self.recompute();
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('u') if ctrl => self.clear_field(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Enter => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(10),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::Backspace => {
                if self.focused_mut().pop().is_some() {
                    self.recompute();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                self.focused_mut().extend(c.to_lowercase());
                self.recompute();
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup or teardown fails, or if the event
/// loop fails. The terminal is restored before the loop error is returned.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, E>(terminal: &mut Terminal<B>, mut app: App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn dictionary() -> Dictionary {
        Dictionary::from_text("slate\nstale\nsteal\nleast\ncrane\ncrate\n")
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn warnings(app: &App) -> usize {
        app.messages
            .iter()
            .filter(|m| m.style == MessageStyle::Warning)
            .count()
    }

    #[test]
    fn starts_empty_on_green() {
        let dictionary = dictionary();
        let app = App::new(ConstraintParser::default(), CandidateGenerator::new(&dictionary));
        assert_eq!(app.focus, Field::Green);
        assert!(matches!(app.outcome, Outcome::Empty));
        assert_eq!(app.get_candidates_count(), 0);
    }

    #[test]
    fn typing_updates_candidates() {
        let dictionary = dictionary();
        let mut app = App::new(ConstraintParser::default(), CandidateGenerator::new(&dictionary));

        type_text(&mut app, "S____");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "e2");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "talk");

        assert_eq!(app.green, "s____");
        let Outcome::Ready(result) = &app.outcome else {
            panic!("expected candidates");
        };
        assert_eq!(
            result.generation.candidates.texts(),
            vec!["steal", "stale", "slate"]
        );
    }

    #[test]
    fn partial_yellow_is_invalid_until_complete() {
        let dictionary = dictionary();
        let mut app = App::new(ConstraintParser::default(), CandidateGenerator::new(&dictionary));

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "a");
        assert!(matches!(
            app.outcome,
            Outcome::Invalid(ParseError::MissingPosition { .. })
        ));

        type_text(&mut app, "1");
        assert!(matches!(app.outcome, Outcome::Ready(_)));
    }

    #[test]
    fn focus_cycles_both_ways() {
        let dictionary = dictionary();
        let mut app = App::new(ConstraintParser::default(), CandidateGenerator::new(&dictionary));

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Field::Gray);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Field::Green);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, Field::Yellow);
    }

    #[test]
    fn backspace_and_clear() {
        let dictionary = dictionary();
        let mut app = App::new(ConstraintParser::default(), CandidateGenerator::new(&dictionary));

        type_text(&mut app, "cr");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.field(Field::Green), "c");

        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.field(Field::Green), "");
        assert!(matches!(app.outcome, Outcome::Empty));
    }

    #[test]
    fn conflicts_become_warnings() {
        let dictionary = dictionary();
        let mut app = App::new(ConstraintParser::default(), CandidateGenerator::new(&dictionary));

        type_text(&mut app, "c");
        press(&mut app, KeyCode::BackTab);
        type_text(&mut app, "c");

        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Warning)
        );
        assert!(app.messages.len() <= MAX_MESSAGES);
    }

    #[test]
    fn unchanged_conflicts_warn_once() {
        let dictionary = dictionary();
        let mut app = App::new(ConstraintParser::default(), CandidateGenerator::new(&dictionary));
        type_text(&mut app, "c");
        press(&mut app, KeyCode::BackTab);
        type_text(&mut app, "crane");
        assert_eq!(warnings(&app), 1);
        assert_eq!(app.messages.len(), 3);
        assert_eq!(app.messages[0].style, MessageStyle::Info);

        // A second overlap is new, the first is not repeated
        type_text(&mut app, "ts");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Field::Yellow);
        type_text(&mut app, "t2");
        assert_eq!(warnings(&app), 2);

        // Clearing everything forgets what was reported
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        press(&mut app, KeyCode::Tab);
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(matches!(app.outcome, Outcome::Empty));
        type_text(&mut app, "c");
        press(&mut app, KeyCode::BackTab);
        type_text(&mut app, "c");
        assert_eq!(warnings(&app), 3);
    }

    #[test]
    fn scroll_is_clamped() {
        let dictionary = dictionary();
        let mut app = App::new(ConstraintParser::default(), CandidateGenerator::new(&dictionary));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "slatecrn");

        let count = app.get_candidates_count();
        assert!(count > 1);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.scroll, count - 1);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll, count - 2);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn event_loop_returns_read_errors() {
        let dictionary = dictionary();
        let app = App::new(ConstraintParser::default(), CandidateGenerator::new(&dictionary));
        let mut terminal = Terminal::new(ratatui::backend::TestBackend::new(100, 40)).unwrap();

        let result = run_app(&mut terminal, app, || Err(io::Error::other("input closed")));
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "input closed");
    }

    #[test]
    fn event_loop_stops_on_quit() {
        let dictionary = dictionary();
        let app = App::new(ConstraintParser::default(), CandidateGenerator::new(&dictionary));
        let mut terminal = Terminal::new(ratatui::backend::TestBackend::new(100, 40)).unwrap();

        let mut keys = vec![KeyCode::Esc, KeyCode::Char('s')].into_iter();
        let result = run_app(&mut terminal, app, || {
            let code = keys.next_back().ok_or_else(|| io::Error::other("no more keys"))?;
            Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        });
        assert!(result.is_ok());
        assert_eq!(keys.len(), 0);
    }

    #[test]
    fn quit_keys() {
        let dictionary = dictionary();
        let mut app = App::new(ConstraintParser::default(), CandidateGenerator::new(&dictionary));
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(ConstraintParser::default(), CandidateGenerator::new(&dictionary));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.green, "");
    }
}
