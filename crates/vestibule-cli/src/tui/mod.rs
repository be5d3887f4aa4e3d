use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use vestibule_client::{outcome_for, RegistrationClient};
use vestibule_core::{validate, FieldChange, FormController, SubmitOutcome};

pub mod form_view;

/// Choices shown by the favorite-food list, blank placeholder first. The
/// placeholder stays selectable, like re-picking the blank option of a
/// select element, which makes the required error reachable from the form.
pub const FOOD_CHOICES: [&str; 4] = ["", "pizza", "spaghetti", "broccoli"];

/// Which control currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Username,
    Language,
    Food,
    Agreement,
    Submit,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Username => Focus::Language,
            Focus::Language => Focus::Food,
            Focus::Food => Focus::Agreement,
            Focus::Agreement => Focus::Submit,
            Focus::Submit => Focus::Username,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Username => Focus::Submit,
            Focus::Language => Focus::Username,
            Focus::Food => Focus::Language,
            Focus::Agreement => Focus::Food,
            Focus::Submit => Focus::Agreement,
        }
    }
}

/// Application state for the registration form TUI.
#[derive(Debug)]
pub struct App {
    pub controller: FormController,
    pub focus: Focus,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            controller: FormController::new(),
            focus: Focus::Username,
            should_quit: false,
        }
    }

    /// Dispatch one key press. Returns true when a submit was requested.
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Esc => {
                self.should_quit = true;
                false
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                false
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                false
            }
            _ => match self.focus {
                Focus::Username => self.handle_username_key(key),
                Focus::Language => self.handle_language_key(key),
                Focus::Food => self.handle_food_key(key),
                Focus::Agreement => self.handle_agreement_key(key),
                Focus::Submit => matches!(key, KeyCode::Enter | KeyCode::Char(' ')),
            },
        }
    }

    fn handle_username_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char(c) => {
                let mut value = self.controller.form().username.clone();
                value.push(c);
                self.controller.on_field_change(FieldChange::Username(value));
            }
            KeyCode::Backspace => {
                let mut value = self.controller.form().username.clone();
                value.pop();
                self.controller.on_field_change(FieldChange::Username(value));
            }
            // Enter inside the text input submits the form, as in a browser.
            KeyCode::Enter => return true,
            _ => {}
        }
        false
    }

    fn handle_language_key(&mut self, key: KeyCode) -> bool {
        let current = self.controller.form().fav_language.clone();
        let picked = match key {
            KeyCode::Left => Some(validate::LANGUAGE_OPTIONS[0]),
            KeyCode::Right => Some(validate::LANGUAGE_OPTIONS[1]),
            // Space or Enter moves to the other option; a radio pair can
            // be switched but never unselected.
            KeyCode::Char(' ') | KeyCode::Enter => {
                if current == validate::LANGUAGE_OPTIONS[0] {
                    Some(validate::LANGUAGE_OPTIONS[1])
                } else {
                    Some(validate::LANGUAGE_OPTIONS[0])
                }
            }
            _ => None,
        };
        if let Some(choice) = picked {
            if choice != current {
                self.controller
                    .on_field_change(FieldChange::FavLanguage(choice.to_string()));
            }
        }
        false
    }

    fn handle_food_key(&mut self, key: KeyCode) -> bool {
        let current = self.controller.form().fav_food.clone();
        let index = FOOD_CHOICES
            .iter()
            .position(|choice| *choice == current)
            .unwrap_or(0);
        let next = match key {
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
                (index + 1) % FOOD_CHOICES.len()
            }
            KeyCode::Left => (index + FOOD_CHOICES.len() - 1) % FOOD_CHOICES.len(),
            _ => return false,
        };
        self.controller
            .on_field_change(FieldChange::FavFood(FOOD_CHOICES[next].to_string()));
        false
    }

    fn handle_agreement_key(&mut self, key: KeyCode) -> bool {
        if matches!(key, KeyCode::Char(' ') | KeyCode::Enter) {
            let checked = self.controller.form().agreement;
            self.controller
                .on_field_change(FieldChange::Agreement(!checked));
        }
        false
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the registration form TUI.
///
/// Sets up the terminal, runs the main event loop, and restores the terminal
/// on exit (including on error).
pub fn run_form(client: RegistrationClient) -> Result<()> {
    let app = App::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the event loop, capturing any error so we can restore the terminal
    let result = run_event_loop(&mut terminal, app, client);

    // Restore terminal regardless of success or failure
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// How long to wait for a key event before checking for a submit resolution.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    client: RegistrationClient,
) -> Result<()> {
    let runtime = tokio::runtime::Handle::current();
    let (tx, mut rx) = mpsc::unbounded_channel::<SubmitOutcome>();

    loop {
        terminal.draw(|frame| form_view::render(frame, &app))?;

        // Apply any submit resolution that arrived since the last pass.
        while let Ok(outcome) = rx.try_recv() {
            app.controller.finish_submit(outcome);
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code) {
                    spawn_submit(&mut app, &client, &runtime, &tx);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Kick off a submission on the runtime, if the gate allows one.
fn spawn_submit(
    app: &mut App,
    client: &RegistrationClient,
    runtime: &tokio::runtime::Handle,
    tx: &mpsc::UnboundedSender<SubmitOutcome>,
) {
    // A closed gate or a request already in flight makes this a no-op.
    let Some(payload) = app.controller.begin_submit() else {
        return;
    };
    let client = client.clone();
    let tx = tx.clone();
    runtime.spawn(async move {
        let outcome = outcome_for(client.submit(&payload).await);
        if tx.send(outcome).is_err() {
            log::debug!("form closed before the submit resolved");
        }
    });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Type a string into the focused username input.
    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_focus_cycles_through_every_control() {
        let mut app = App::new();
        assert_eq!(app.focus, Focus::Username);
        for expected in [
            Focus::Language,
            Focus::Food,
            Focus::Agreement,
            Focus::Submit,
            Focus::Username,
        ] {
            app.handle_key(KeyCode::Tab);
            assert_eq!(app.focus, expected);
        }
        app.handle_key(KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Submit);
    }

    #[test]
    fn test_typing_edits_username_and_validates_inline() {
        let mut app = App::new();
        type_str(&mut app, "ab");
        assert_eq!(app.controller.form().username, "ab");
        assert_eq!(
            app.controller.error(vestibule_core::Field::Username),
            validate::messages::USERNAME_MIN
        );

        app.handle_key(KeyCode::Char('c'));
        assert_eq!(app.controller.error(vestibule_core::Field::Username), "");

        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.controller.form().username, "ab");
    }

    #[test]
    fn test_language_radio_switches_but_never_unselects() {
        let mut app = App::new();
        app.focus = Focus::Language;

        // Space on the unselected pair picks the first option.
        app.handle_key(KeyCode::Char(' '));
        assert_eq!(app.controller.form().fav_language, "javascript");

        app.handle_key(KeyCode::Char(' '));
        assert_eq!(app.controller.form().fav_language, "rust");

        app.handle_key(KeyCode::Left);
        assert_eq!(app.controller.form().fav_language, "javascript");
    }

    #[test]
    fn test_food_list_cycles_back_to_the_placeholder() {
        let mut app = App::new();
        app.focus = Focus::Food;

        app.handle_key(KeyCode::Right);
        assert_eq!(app.controller.form().fav_food, "pizza");

        app.handle_key(KeyCode::Left);
        assert_eq!(app.controller.form().fav_food, "");
        // Re-selecting the placeholder surfaces the required error.
        assert_eq!(
            app.controller.error(vestibule_core::Field::FavFood),
            validate::messages::FAV_FOOD_REQUIRED
        );
    }

    #[test]
    fn test_agreement_toggles_with_space() {
        let mut app = App::new();
        app.focus = Focus::Agreement;

        app.handle_key(KeyCode::Char(' '));
        assert!(app.controller.form().agreement);

        app.handle_key(KeyCode::Char(' '));
        assert!(!app.controller.form().agreement);
        assert_eq!(
            app.controller.error(vestibule_core::Field::Agreement),
            validate::messages::AGREEMENT_ACCEPTED
        );
    }

    #[test]
    fn test_enter_requests_submission_from_input_and_button() {
        let mut app = App::new();
        assert!(app.handle_key(KeyCode::Enter));

        app.focus = Focus::Submit;
        assert!(app.handle_key(KeyCode::Enter));
        assert!(app.handle_key(KeyCode::Char(' ')));

        // Option controls consume Enter for selection instead.
        app.focus = Focus::Food;
        assert!(!app.handle_key(KeyCode::Enter));
    }

    #[test]
    fn test_escape_quits() {
        let mut app = App::new();
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit);
    }
}
