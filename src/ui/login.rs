//! Login screen

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{layout, status_line};
use crate::app::state::AppState;

const TITLE: &str = "Q U I Z D E C K";
const TAGLINE: &str = "Generated quizzes, instant feedback, scored reviews";

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let card_area = layout::centered_rect(50, 40, area);
    let block = layout::card("Log in", theme);
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let title_area =
        Rect { y: card_area.y.saturating_sub(3).max(area.y), height: 2, ..area }.intersection(area);
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(theme.fg_muted))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Your name", Style::default().fg(theme.fg_muted))),
        status_line::input_line(&state.login, true, theme),
        Line::from(""),
        Line::from(Span::styled("[Enter] Continue", Style::default().fg(theme.fg_muted))),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
