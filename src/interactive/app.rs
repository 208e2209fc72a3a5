//! TUI application state and logic

use crate::chain::Session;
use crate::core::{LetterSource, Slot};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Timer label shown in the header; the game has no clock
pub const TIMER_RESET: &str = "0:00";

/// Application state
pub struct App<S> {
    pub session: Session<S>,
    pub focus: Slot,
    pub cursors: [usize; 6],
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub timer_label: String,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub challenges: usize,
    pub matches: usize,
}

impl<S: LetterSource> App<S> {
    #[must_use]
    pub fn new(session: Session<S>) -> Self {
        Self {
            session,
            focus: Slot::L1,
            cursors: [0; 6],
            messages: vec![
                Message {
                    text: "Build chains from both letters until they meet in the middle."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter picks an item, Space adds it to a multi-selection.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                challenges: 1,
                matches: 0,
            },
            timer_label: TIMER_RESET.to_string(),
            should_quit: false,
        }
    }

    pub fn new_challenge(&mut self) {
        self.session.reset();
        self.focus = Slot::L1;
        self.cursors = [0; 6];
        self.timer_label = TIMER_RESET.to_string();
        self.stats.challenges += 1;
        self.messages.clear();
        self.add_message(
            &format!(
                "New challenge: {} to {}",
                self.session.start(),
                self.session.end()
            ),
            MessageStyle::Info,
        );
        info!(start = %self.session.start(), end = %self.session.end(), "new challenge");
    }

    pub fn focus_next(&mut self) {
        let next = (self.focus.index() + 1) % Slot::ALL.len();
        self.focus = Slot::ALL[next];
    }

    pub fn focus_previous(&mut self) {
        let previous = (self.focus.index() + Slot::ALL.len() - 1) % Slot::ALL.len();
        self.focus = Slot::ALL[previous];
    }

    pub fn cursor_down(&mut self) {
        let len = self.session.candidates(self.focus).len();
        let cursor = &mut self.cursors[self.focus.index()];
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        let cursor = &mut self.cursors[self.focus.index()];
        *cursor = cursor.saturating_sub(1);
    }

    /// Select only the highlighted item
    pub fn select_highlighted(&mut self) {
        let Some(item) = self.highlighted().map(str::to_string) else {
            self.add_message(
                &format!("{} has nothing to select yet", self.focus),
                MessageStyle::Error,
            );
            return;
        };
        self.apply_selection(vec![item], true);
    }

    /// Add or remove the highlighted item from the slot's selection
    pub fn toggle_highlighted(&mut self) {
        let Some(item) = self.highlighted().map(str::to_string) else {
            return;
        };
        let mut items = self.session.selected(self.focus).to_vec();
        if let Some(pos) = items.iter().position(|s| *s == item) {
            items.remove(pos);
        } else {
            items.push(item);
        }
        self.apply_selection(items, false);
    }

    /// Hand `items` to the session; `advance` moves focus to the regenerated slot
    fn apply_selection(&mut self, items: Vec<String>, advance: bool) {
        let slot = self.focus;
        let had_match = self.session.match_result().cloned();

        if let Err(e) = self.session.select(slot, &items) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }

        for below in slot.downstream_chain() {
            self.cursors[below.index()] = 0;
        }

        match self.session.match_result() {
            Some(result) if had_match.as_ref() != Some(result) => {
                let chain = result.render();
                self.stats.matches += 1;
                self.add_message("The chains met!", MessageStyle::Success);
                self.add_message(&chain, MessageStyle::Success);
            }
            Some(_) => {}
            None => {
                if let Some(next) = slot.downstream() {
                    let count = self.session.candidates(next).len();
                    self.add_message(
                        &format!("{next} now offers {count} candidates"),
                        MessageStyle::Info,
                    );
                    if advance && count > 0 {
                        self.focus = next;
                    }
                }
            }
        }
    }
}

impl<S> App<S> {
    /// Cursor position in a slot, clamped to its current candidates
    #[must_use]
    pub fn cursor(&self, slot: Slot) -> usize {
        let len = self.session.candidates(slot).len();
        self.cursors[slot.index()].min(len.saturating_sub(1))
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<&str> {
        self.session
            .candidates(self.focus)
            .get(self.cursor(self.focus))
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
pub fn run_tui<S: LetterSource>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: LetterSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('n') => app.new_challenge(),
                KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.focus_previous(),
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.focus_next(),
                KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
                KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
                KeyCode::Char(' ') => app.toggle_highlighted(),
                KeyCode::Enter => app.select_highlighted(),
                _ => {}
            }
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
    use crate::config::GameConfig;
    use crate::core::{RandomLetters, SlotState};

    fn app(seed: u64) -> App<RandomLetters<rand_chacha::ChaCha8Rng>> {
        App::new(Session::new(GameConfig::default(), RandomLetters::seeded(seed)))
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut app = app(1);
        app.focus_previous();
        assert_eq!(app.focus, Slot::R3);
        app.focus_next();
        assert_eq!(app.focus, Slot::L1);
    }

    #[test]
    fn cursor_is_clamped_to_candidates() {
        let mut app = app(1);
        let len = app.session.candidates(Slot::L1).len();
        for _ in 0..len + 5 {
            app.cursor_down();
        }
        assert_eq!(app.cursor(Slot::L1), len - 1);
        for _ in 0..len + 5 {
            app.cursor_up();
        }
        assert_eq!(app.cursor(Slot::L1), 0);
    }

    #[test]
    fn enter_selects_and_moves_focus_downstream() {
        let mut app = app(2);
        let item = app.highlighted().unwrap().to_string();
        app.select_highlighted();

        assert_eq!(app.session.selected(Slot::L1), &[item]);
        assert_eq!(app.session.slot_state(Slot::L2), SlotState::Populated);
        assert_eq!(app.focus, Slot::L2);
    }

    #[test]
    fn space_toggles_multi_selection() {
        let mut app = app(3);
        app.toggle_highlighted();
        app.cursor_down();
        app.toggle_highlighted();

        assert_eq!(app.focus, Slot::L1);
        assert_eq!(app.session.selected(Slot::L1).len(), 2);
        assert!(app.session.selected(Slot::L2).is_empty());
        assert_eq!(app.session.slot_state(Slot::L2), SlotState::Populated);

        app.toggle_highlighted();
        assert_eq!(app.focus, Slot::L1);
        assert_eq!(app.session.selected(Slot::L1).len(), 1);
    }

    #[test]
    fn selecting_an_empty_slot_reports_error() {
        let mut app = app(4);
        app.focus = Slot::L3;
        app.select_highlighted();
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn new_challenge_resets_view_state() {
        let mut app = app(5);
        app.select_highlighted();
        app.timer_label = "9:99".to_string();
        app.new_challenge();

        assert_eq!(app.focus, Slot::L1);
        assert_eq!(app.cursors, [0; 6]);
        assert_eq!(app.timer_label, TIMER_RESET);
        assert_eq!(app.stats.challenges, 2);
        assert_eq!(app.session.slot_state(Slot::L2), SlotState::Empty);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app(6);
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "m9");
    }
}
