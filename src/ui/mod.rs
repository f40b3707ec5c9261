//! UI rendering components

pub mod dashboard;
pub mod layout;
pub mod login;
pub mod quiz_panel;
pub mod results;
pub mod setup;
pub mod status_line;

use ratatui::Frame;

use crate::app::state::{AppState, Screen};
use crate::quiz::Question;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState) {
    layout::fill_background(frame, &state.theme);
    let (main, status) = layout::with_status_line(frame.area());

    match state.screen {
        Screen::Login => login::draw(frame, main, state),
        Screen::Dashboard => dashboard::draw(frame, main, state),
        Screen::Setup => setup::draw(frame, main, state),
        Screen::Quiz => quiz_panel::draw(frame, main, state),
        Screen::Results => results::draw(frame, main, state),
    }

    status_line::draw(frame, status, &state.status, key_hints(state), &state.theme);
}

/// Key hints shown when no status message is set
fn key_hints(state: &AppState) -> &'static str {
    match state.screen {
        Screen::Login => "[Enter] Log in    [Esc] Clear    [Ctrl-C] Quit",
        Screen::Dashboard => "[Enter] New quiz    [t] Theme    [o] Log out    [q] Quit",
        Screen::Setup => "[j/k] Field    [h/l] Change    [Enter] Next / Start    [Esc] Back",
        Screen::Quiz => match state.quiz.as_ref() {
            Some(view) if view.session.is_revealed() => "[Enter] Next    [Esc] Abandon",
            Some(view) if view.session.current_question().is_some_and(Question::is_true_false) => {
                "[y/\u{2192}] True    [n/\u{2190}] False    [Esc] Abandon"
            }
            _ => "[j/k] Select    [1-4] Choose    [Enter] Confirm    [Esc] Abandon",
        },
        Screen::Results => "[j/k] Scroll    [r] Retake    [s] New quiz    [Enter] Dashboard    [t] Theme",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn login_screen_renders_title_and_hint() {
        let out = render(&AppState::default());
        assert!(out.contains("Q U I Z D E C K"));
        assert!(out.contains("[Enter] Log in"));
    }

    #[test]
    fn dashboard_greets_user() {
        let mut state = AppState::default();
        state.context.login("ada").unwrap();
        state.screen = Screen::Dashboard;
        let out = render(&state);
        assert!(out.contains("WELCOME, ADA"));
        assert!(out.contains("No quizzes yet"));
    }

    #[test]
    fn setup_screen_lists_fields() {
        let state = AppState { screen: Screen::Setup, ..Default::default() };
        let out = render(&state);
        assert!(out.contains("Difficulty"));
        assert!(out.contains("START QUIZ"));
    }
}
