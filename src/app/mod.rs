//! Application state and event handling

pub mod handler;
pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Config;
use crate::quiz::QuizConfig;
use crate::ui;
use handler::{Controller, Outcome};
use state::{AppState, SetupState};

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Screen state and key handling
    controller: Controller<StdRng>,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    ///
    /// `seed` overrides `config.seed` for this run only and is never saved.
    pub fn new(config: Config, seed: Option<u64>) -> Result<Self> {
        let controller = build_controller(&config, seed);
        let terminal = Self::setup_terminal()?;

        Ok(Self { config, controller, terminal })
    }

    /// Skip login and setup, dropping straight into a quiz
    pub fn start_quiz(&mut self, name: &str, quiz: QuizConfig) {
        self.controller.start_directly(name, quiz, Instant::now());
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        loop {
            // Draw UI
            self.terminal.draw(|frame| {
                ui::draw(frame, &self.controller.state);
            })?;

            // Handle events
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match self.controller.handle_key(key.code, key.modifiers, Instant::now()) {
                            Outcome::Quit => break,
                            Outcome::ThemeToggled { dark } => self.save_theme(dark),
                            Outcome::Continue => {}
                        }
                    }
                }
            }

            // Auto-advance revealed questions
            self.controller.tick(Instant::now());
        }

        self.restore_terminal()?;
        Ok(())
    }

    fn save_theme(&mut self, dark: bool) {
        self.config.dark_mode = dark;
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {:#}", e);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

/// Controller seeded from the run's seed, falling back to the configured one
fn build_controller(config: &Config, seed: Option<u64>) -> Controller<StdRng> {
    let rng = match seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let auto_advance = match config.auto_advance_ms {
        0 => None,
        ms => Some(Duration::from_millis(ms)),
    };
    let state = AppState {
        setup: SetupState::from_config(&config.defaults),
        theme: config.active_theme(),
        ..Default::default()
    };
    Controller::new(state, rng, auto_advance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn first_questions(controller: &mut Controller<StdRng>) -> Vec<crate::quiz::Question> {
        controller.start_directly("ada", QuizConfig::new("Math").with_num_questions(5), Instant::now());
        controller.state.quiz.as_ref().unwrap().session.questions().to_vec()
    }

    #[test]
    fn run_seed_overrides_configured_seed() {
        let config = Config { seed: Some(1), ..Default::default() };
        let mut with_override = build_controller(&config, Some(5));
        let mut plain_five = build_controller(&Config { seed: Some(5), ..Default::default() }, None);
        assert_eq!(first_questions(&mut with_override), first_questions(&mut plain_five));
    }

    #[test]
    fn run_seed_is_not_saved_with_theme_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = Config::load_from(&path).unwrap();

        let mut controller = build_controller(&config, Some(5));
        controller.state.screen = state::Screen::Dashboard;
        let Outcome::ThemeToggled { dark } =
            controller.handle_key(KeyCode::Char('t'), KeyModifiers::NONE, Instant::now())
        else {
            panic!("expected a theme toggle");
        };
        config.dark_mode = dark;
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert!(reloaded.dark_mode);
        assert_eq!(reloaded.seed, None);
    }
}
