//! Screen-by-screen key handling
//!
//! Kept apart from the terminal so the whole flow can be driven in tests.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyModifiers};
use rand::Rng;

use super::input::{Action, key_with_modifier_to_action};
use super::state::{AppState, QuizView, Screen, SetupField, SetupState};
use crate::quiz::question::OPTION_COUNT;
use crate::quiz::{Answer, Question, QuizConfig, QuizSession, Transition, generate};

/// What the app loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
    /// The palette changed and should be saved
    ThemeToggled { dark: bool },
}

/// Drives [`AppState`] from key presses and clock ticks
#[derive(Debug)]
pub struct Controller<R> {
    pub state: AppState,
    rng: R,
    /// Delay before a revealed true/false question moves on, `None` to wait for Enter
    auto_advance: Option<Duration>,
}

impl<R: Rng> Controller<R> {
    pub fn new(state: AppState, rng: R, auto_advance: Option<Duration>) -> Self {
        Self { state, rng, auto_advance }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers, now: Instant) -> Outcome {
        let action = key_with_modifier_to_action(key, modifiers);
        if action == Some(Action::Quit) && modifiers.contains(KeyModifiers::CONTROL) {
            return Outcome::Quit;
        }

        match self.state.screen {
            Screen::Login => self.handle_login(key),
            Screen::Setup if self.state.setup.field == SetupField::CustomTopic => {
                self.handle_custom_topic(key, now)
            }
            Screen::Setup => action.map_or(Outcome::Continue, |a| self.handle_setup(a, now)),
            Screen::Dashboard => action.map_or(Outcome::Continue, |a| self.handle_dashboard(a)),
            Screen::Quiz => action.map_or(Outcome::Continue, |a| self.handle_quiz(a, now)),
            Screen::Results => action.map_or(Outcome::Continue, |a| self.handle_results(a, now)),
        }
    }

    /// Advance a revealed question once its feedback delay has passed
    pub fn tick(&mut self, now: Instant) {
        let due = self
            .state
            .quiz
            .as_ref()
            .and_then(|view| view.auto_advance_at)
            .is_some_and(|at| now >= at);
        if due {
            self.advance_quiz(now);
        }
    }

    /// Log in with a name and start a quiz directly
    pub fn start_directly(&mut self, name: &str, config: QuizConfig, now: Instant) {
        match self.state.context.login(name) {
            Ok(()) => {
                self.state.setup = SetupState::from_config(&config);
                self.start_quiz(config, now);
            }
            Err(e) => self.state.status.set_error(e.to_string()),
        }
    }

    fn handle_login(&mut self, key: KeyCode) -> Outcome {
        let input = &mut self.state.login;
        match key {
            KeyCode::Enter => match self.state.context.login(&input.value) {
                Ok(()) => {
                    self.state.status.set_message(format!("Welcome, {}!", self.state.context.username()));
                    self.state.screen = Screen::Dashboard;
                }
                Err(e) => self.state.status.set_error(e.to_string()),
            },
            KeyCode::Esc => input.clear(),
            KeyCode::Backspace => input.delete_char(),
            KeyCode::Delete => input.delete_char_forward(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            KeyCode::Char(c) => input.insert_char(c),
            _ => {}
        }
        Outcome::Continue
    }

    fn handle_dashboard(&mut self, action: Action) -> Outcome {
        match action {
            Action::Select | Action::Setup => {
                self.state.status.clear();
                self.state.screen = Screen::Setup;
            }
            Action::ToggleTheme => return self.toggle_theme(),
            Action::Logout => {
                self.state.context.logout();
                self.state.login.clear();
                self.state.status.set_message("Logged out");
                self.state.screen = Screen::Login;
            }
            Action::Quit => return Outcome::Quit,
            _ => {}
        }
        Outcome::Continue
    }

    fn handle_custom_topic(&mut self, key: KeyCode, now: Instant) -> Outcome {
        let setup = &mut self.state.setup;
        let input = &mut setup.custom_topic;
        match key {
            KeyCode::Up | KeyCode::BackTab => setup.previous_field(),
            KeyCode::Down | KeyCode::Tab => setup.next_field(),
            KeyCode::Enter => return self.handle_setup(Action::Select, now),
            KeyCode::Esc => return self.handle_setup(Action::Back, now),
            KeyCode::Backspace => input.delete_char(),
            KeyCode::Delete => input.delete_char_forward(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            KeyCode::Char(c) => input.insert_char(c),
            _ => {}
        }
        Outcome::Continue
    }

    fn handle_setup(&mut self, action: Action, now: Instant) -> Outcome {
        let setup = &mut self.state.setup;
        match action {
            Action::Up => setup.previous_field(),
            Action::Down => setup.next_field(),
            Action::Left => setup.step_value(false),
            Action::Right => setup.step_value(true),
            Action::Select if setup.field == SetupField::Start => {
                let config = setup.to_config();
                self.start_quiz(config, now);
            }
            Action::Select => setup.next_field(),
            Action::Back => {
                self.state.status.clear();
                self.state.screen = Screen::Dashboard;
            }
            _ => {}
        }
        Outcome::Continue
    }

    fn handle_quiz(&mut self, action: Action, now: Instant) -> Outcome {
        let Some(view) = self.state.quiz.as_mut() else {
            self.state.screen = Screen::Setup;
            return Outcome::Continue;
        };

        if action == Action::Back {
            tracing::info!(answered = view.session.answered_count(), "Quiz abandoned");
            self.state.quiz = None;
            self.state.status.set_message("Quiz abandoned");
            self.state.screen = Screen::Setup;
            return Outcome::Continue;
        }

        if view.session.is_revealed() {
            if action == Action::Select {
                self.advance_quiz(now);
            }
            return Outcome::Continue;
        }

        let answer = match (view.session.current_question(), action) {
            (Some(Question::MultipleChoice { .. }), Action::Up) => {
                view.selected_option = (view.selected_option + OPTION_COUNT - 1) % OPTION_COUNT;
                None
            }
            (Some(Question::MultipleChoice { .. }), Action::Down) => {
                view.selected_option = (view.selected_option + 1) % OPTION_COUNT;
                None
            }
            (Some(Question::MultipleChoice { .. }), Action::Choose(i)) => {
                view.selected_option = i;
                Some(Answer::Choice(i))
            }
            (Some(Question::MultipleChoice { .. }), Action::Select) => {
                Some(Answer::Choice(view.selected_option))
            }
            (Some(Question::TrueFalse { .. }), Action::Yes | Action::Right) => {
                Some(Answer::Verdict(true))
            }
            (Some(Question::TrueFalse { .. }), Action::No | Action::Left) => {
                Some(Answer::Verdict(false))
            }
            _ => None,
        };

        if let Some(answer) = answer {
            self.submit_answer(answer, now);
        }
        Outcome::Continue
    }

    fn handle_results(&mut self, action: Action, now: Instant) -> Outcome {
        let review_len =
            self.state.context.quiz_result().map_or(0, |r| r.question_details.len());
        let results = &mut self.state.results;
        match action {
            Action::Down => {
                results.scroll_offset = (results.scroll_offset + 1).min(review_len.saturating_sub(1));
            }
            Action::Up => results.scroll_offset = results.scroll_offset.saturating_sub(1),
            Action::Top => results.scroll_offset = 0,
            Action::Bottom => results.scroll_offset = review_len.saturating_sub(1),
            Action::Retake => {
                if let Some(config) = self.state.context.quiz_config().cloned() {
                    self.start_quiz(config, now);
                }
            }
            Action::Setup => {
                if let Some(config) = self.state.context.quiz_config() {
                    self.state.setup = SetupState::from_config(config);
                }
                self.state.context.reset_quiz();
                self.state.screen = Screen::Setup;
            }
            Action::Select | Action::Back => {
                self.state.context.reset_quiz();
                self.state.screen = Screen::Dashboard;
            }
            Action::ToggleTheme => return self.toggle_theme(),
            Action::Quit => return Outcome::Quit,
            _ => {}
        }
        Outcome::Continue
    }

    fn toggle_theme(&mut self) -> Outcome {
        self.state.theme = self.state.theme.toggled();
        Outcome::ThemeToggled { dark: self.state.theme.dark }
    }

    fn start_quiz(&mut self, config: QuizConfig, now: Instant) {
        if let Err(e) = config.validate() {
            self.state.status.set_error(e.to_string());
            return;
        }

        let questions = generate(&config, &mut self.rng);
        self.state.context.start_quiz(config.clone());
        self.state.quiz = Some(QuizView::new(QuizSession::start(config, questions, now)));
        self.state.results = Default::default();
        self.state.status.clear();
        self.state.screen = Screen::Quiz;
    }

    fn submit_answer(&mut self, answer: Answer, now: Instant) {
        let Some(view) = self.state.quiz.as_mut() else {
            return;
        };

        match view.session.submit(answer, now) {
            Ok(Transition::Revealed { .. }) => {
                let true_false = view.session.current_question().is_some_and(Question::is_true_false);
                if true_false {
                    view.auto_advance_at = self.auto_advance.map(|d| now + d);
                }
            }
            Ok(transition) => self.after_transition(transition),
            Err(e) if e.is_session_error() => {
                tracing::debug!(error = %e, "Answer ignored");
                self.state.status.set_message(e.to_string());
            }
            Err(e) => self.state.status.set_error(e.to_string()),
        }
    }

    fn advance_quiz(&mut self, now: Instant) {
        if let Some(view) = self.state.quiz.as_mut() {
            let transition = view.session.advance(now);
            self.after_transition(transition);
        }
    }

    fn after_transition(&mut self, transition: Transition) {
        match transition {
            Transition::Advanced(_) => {
                if let Some(view) = self.state.quiz.as_mut() {
                    view.selected_option = 0;
                    view.auto_advance_at = None;
                }
                self.state.status.clear();
            }
            Transition::Finished => self.finish_quiz(),
            Transition::Revealed { .. } | Transition::AlreadyFinished => {}
        }
    }

    fn finish_quiz(&mut self) {
        let Some(result) = self.state.quiz.take().and_then(|view| view.session.into_result()) else {
            return;
        };
        self.state.context.complete_quiz(result);
        self.state.results = Default::default();
        self.state.screen = Screen::Results;
    }
}
