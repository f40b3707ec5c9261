//! Question panel for a running quiz

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::layout;
use crate::app::state::{AppState, QuizView};
use crate::quiz::question::verdict_text;
use crate::quiz::{Answer, Question};
use crate::theme::Theme;

/// Draw the current question, with feedback once revealed
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let Some(view) = state.quiz.as_ref() else {
        return;
    };
    let session = &view.session;
    let Some(question) = session.current_question() else {
        return;
    };
    let current = session.current_index().unwrap_or(0);

    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(8)]).split(area);

    // Header with progress
    let header_block = layout::card(question.topic(), theme);
    let header_inner = header_block.inner(chunks[0]);
    frame.render_widget(header_block, chunks[0]);

    let bar_width = (header_inner.width as usize).saturating_sub(2).min(60);
    let header = vec![
        Line::from(vec![
            Span::styled(
                format!("Question {} of {}", current + 1, session.len()),
                Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("    {}  \u{00B7}  {}", session.config().difficulty, session.config().answer_mode),
                Style::default().fg(theme.fg_muted),
            ),
        ]),
        layout::progress_bar(session.progress(), bar_width, theme),
    ];
    frame.render_widget(Paragraph::new(header), header_inner);

    let body_block = layout::card("Question", theme);
    let body_inner = body_block.inner(chunks[1]);
    frame.render_widget(body_block, chunks[1]);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            question.text().to_string(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let answer = session.current_answer();
    let revealed = session.is_revealed();
    match question {
        Question::MultipleChoice { .. } => {
            lines.extend(option_lines(question, view, answer, revealed, theme));
        }
        Question::TrueFalse { .. } => lines.push(verdict_line(question, answer, revealed, theme)),
    }

    lines.push(Line::from(""));
    if revealed {
        lines.extend(feedback_lines(question, answer, view, theme));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body_inner);
}

/// Options with the selection marker, coloured once revealed
fn option_lines(
    question: &Question,
    view: &QuizView,
    answer: Option<Answer>,
    revealed: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let correct = question.correct_answer();
    let chosen = match answer {
        Some(Answer::Choice(i)) => Some(i),
        _ => None,
    };

    question
        .options()
        .iter()
        .enumerate()
        .flat_map(|(i, option)| {
            let is_selected = chosen.unwrap_or(view.selected_option) == i;
            let prefix = if is_selected { "\u{25CF}" } else { "\u{25CB}" }; // ● or ○
            let letter = (b'A' + i as u8) as char;

            let style = if revealed && correct == Answer::Choice(i) {
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
            } else if revealed && chosen == Some(i) {
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg_primary)
            };

            [
                Line::from(Span::styled(format!("  {} {}) {}", prefix, letter, option), style)),
                Line::from(""),
            ]
        })
        .collect()
}

/// The two true/false choices side by side
fn verdict_line(
    question: &Question,
    answer: Option<Answer>,
    revealed: bool,
    theme: &Theme,
) -> Line<'static> {
    let choice = |value: bool, key: &str| {
        let is_correct = question.correct_answer() == Answer::Verdict(value);
        let chosen = answer == Some(Answer::Verdict(value));
        let style = if revealed && is_correct {
            Style::default().fg(theme.on_accent).bg(theme.success).add_modifier(Modifier::BOLD)
        } else if revealed && chosen {
            Style::default().fg(theme.on_accent).bg(theme.error).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD)
        };
        Span::styled(format!(" [{}] {} ", key, verdict_text(value)), style)
    };

    Line::from(vec![Span::raw("  "), choice(false, "\u{2190}/n"), Span::raw("    "), choice(true, "\u{2192}/y")])
}

fn feedback_lines(
    question: &Question,
    answer: Option<Answer>,
    view: &QuizView,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let correct = answer.is_some_and(|a| question.is_correct(&a));
    let (verdict, color) =
        if correct { ("\u{2713} Correct!", theme.success) } else { ("\u{2717} Incorrect", theme.error) };

    let mut lines = vec![
        Line::from(Span::styled(verdict, Style::default().fg(color).add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];
    if !correct {
        lines.push(Line::from(vec![
            Span::styled("Correct answer: ", Style::default().fg(theme.fg_muted)),
            Span::styled(question.correct_answer_text(), Style::default().fg(theme.fg_primary)),
        ]));
    }
    lines.push(Line::from(Span::styled(
        question.explanation().to_string(),
        Style::default().fg(theme.fg_primary),
    )));
    lines.push(Line::from(""));

    let hint = if view.auto_advance_at.is_some() {
        "[Enter] Next    (moving on shortly)"
    } else {
        "[Enter] Next"
    };
    lines.push(Line::from(Span::styled(hint, Style::default().fg(theme.fg_muted))));
    lines
}
