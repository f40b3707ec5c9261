//! Quiz setup form

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{layout, status_line};
use crate::app::state::{AppState, SetupField, SetupState};
use crate::quiz::TOPICS;
use crate::quiz::config::{MAX_QUESTIONS, MIN_QUESTIONS};
use crate::theme::Theme;

/// Width of the label column
const LABEL_WIDTH: usize = 16;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let setup = &state.setup;

    let card_area = layout::centered_rect(70, 70, area);
    let block = layout::card("New quiz", theme);
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let mut lines = vec![Line::from("")];
    for &field in SetupField::all() {
        if field == SetupField::Start {
            lines.push(Line::from(""));
            lines.push(start_button(setup.field == field, theme));
        } else {
            lines.push(field_line(setup, field, theme));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Quiz topic: {}", setup.topic()),
        Style::default().fg(theme.fg_muted),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line(setup: &SetupState, field: SetupField, theme: &Theme) -> Line<'static> {
    let focused = setup.field == field;
    let marker = if focused { "\u{25B6} " } else { "  " }; // ▶
    let label_style = if focused {
        Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_muted)
    };

    let mut spans = vec![
        Span::styled(marker.to_string(), Style::default().fg(theme.accent_primary)),
        Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH), label_style),
    ];

    if field == SetupField::CustomTopic {
        if !focused && setup.custom_topic.value.is_empty() {
            spans.push(Span::styled("(optional)", Style::default().fg(theme.fg_muted)));
        } else {
            spans.extend(status_line::input_line(&setup.custom_topic, focused, theme).spans);
        }
        return Line::from(spans);
    }

    let value = match field {
        SetupField::Topic => TOPICS[setup.topic_index].to_string(),
        SetupField::Difficulty => setup.difficulty.to_string(),
        SetupField::Questions => {
            format!("{}  ({}-{})", setup.num_questions, MIN_QUESTIONS, MAX_QUESTIONS)
        }
        SetupField::ResponseType => setup.response_type.display_name().to_string(),
        SetupField::AnswerMode => setup.answer_mode.to_string(),
        SetupField::CustomTopic | SetupField::Start => String::new(),
    };

    let value_style = if focused {
        Style::default().fg(theme.fg_primary).bg(theme.selection).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_primary)
    };
    if focused {
        spans.push(Span::styled(format!("\u{25C0} {} \u{25B6}", value), value_style)); // ◀ ▶
    } else {
        spans.push(Span::styled(format!("  {}", value), value_style));
    }
    Line::from(spans)
}

fn start_button(focused: bool, theme: &Theme) -> Line<'static> {
    let style = if focused {
        Style::default().fg(theme.on_accent).bg(theme.accent_primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD)
    };
    Line::from(vec![Span::raw("  "), Span::styled(" [ START QUIZ ] ", style)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn focused_field_shows_arrows() {
        let mut setup = SetupState::default();
        setup.field = SetupField::Difficulty;
        let line = text(&field_line(&setup, SetupField::Difficulty, &Theme::default()));
        assert!(line.contains("\u{25C0} medium \u{25B6}"));
    }

    #[test]
    fn questions_field_shows_range() {
        let setup = SetupState::default();
        let line = text(&field_line(&setup, SetupField::Questions, &Theme::default()));
        assert!(line.contains("10  (5-30)"));
    }

    #[test]
    fn empty_custom_topic_is_marked_optional() {
        let setup = SetupState::default();
        let line = text(&field_line(&setup, SetupField::CustomTopic, &Theme::default()));
        assert!(line.contains("(optional)"));
    }
}
