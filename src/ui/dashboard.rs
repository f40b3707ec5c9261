//! Dashboard with run-wide stats and recent quizzes

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::layout;
use crate::app::state::AppState;
use crate::quiz::scoring::format_duration;

/// Most recent quizzes listed
const RECENT_LIMIT: usize = 8;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let ctx = &state.context;
    let stats = ctx.user_stats();

    let chunks = Layout::vertical([Constraint::Length(7), Constraint::Min(3)]).split(area);

    let stats_block = layout::card(&format!("Welcome, {}", ctx.username()), theme);
    let stats_inner = stats_block.inner(chunks[0]);
    frame.render_widget(stats_block, chunks[0]);

    let label = Style::default().fg(theme.fg_muted);
    let value = Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD);
    let stat_lines = vec![
        Line::from(vec![
            Span::styled("Quizzes taken   ", label),
            Span::styled(stats.total_quizzes.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Questions       ", label),
            Span::styled(stats.total_questions.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Correct         ", label),
            Span::styled(stats.total_correct.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Accuracy        ", label),
            Span::styled(format!("{}%", stats.accuracy()), value),
        ]),
    ];
    frame.render_widget(Paragraph::new(stat_lines), stats_inner);

    let history_block = layout::card("Recent quizzes", theme);
    let history_inner = history_block.inner(chunks[1]);
    frame.render_widget(history_block, chunks[1]);

    let history = ctx.history();
    let lines: Vec<Line> = if history.is_empty() {
        vec![Line::from(Span::styled("No quizzes yet. Press [Enter] to start one.", label))]
    } else {
        history
            .iter()
            .rev()
            .take(RECENT_LIMIT)
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<2} ", entry.grade),
                        Style::default()
                            .fg(theme.on_accent)
                            .bg(theme.grade_color(entry.grade))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {:<16}", entry.topic), value),
                    Span::styled(format!("{:<8}", entry.difficulty), label),
                    Span::styled(
                        format!(
                            "{}/{} ({}%)  {}",
                            entry.correct_answers,
                            entry.total_questions,
                            entry.score,
                            format_duration(entry.time_taken_secs)
                        ),
                        Style::default().fg(theme.fg_primary),
                    ),
                ])
            })
            .collect()
    };
    frame.render_widget(Paragraph::new(lines), history_inner);
}
