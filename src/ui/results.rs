//! Results and review screen

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::layout;
use crate::app::state::AppState;
use crate::quiz::scoring::{QuestionDetail, format_duration};
use crate::quiz::QuizResult;
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let ctx = &state.context;
    let Some(result) = ctx.quiz_result() else {
        return;
    };
    let topic = ctx.quiz_config().map(|c| c.topic.as_str()).unwrap_or_default();

    let chunks = Layout::vertical([Constraint::Length(9), Constraint::Min(5)]).split(area);

    let summary_block = layout::card("Results", theme);
    let summary_inner = summary_block.inner(chunks[0]);
    frame.render_widget(summary_block, chunks[0]);
    frame.render_widget(Paragraph::new(summary_lines(result, topic, theme)), summary_inner);

    let review_block = layout::card("Review", theme);
    let review_inner = review_block.inner(chunks[1]);
    frame.render_widget(review_block, chunks[1]);

    let lines: Vec<Line> = result
        .question_details
        .iter()
        .enumerate()
        .skip(state.results.scroll_offset)
        .flat_map(|(i, detail)| review_lines(i, detail, theme))
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), review_inner);
}

fn summary_lines(result: &QuizResult, topic: &str, theme: &Theme) -> Vec<Line<'static>> {
    let grade = result.grade();
    let label = Style::default().fg(theme.fg_muted);
    let value = Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD);

    let (status, status_color) =
        if result.passed() { ("PASSED", theme.success) } else { ("FAILED", theme.error) };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", grade),
                Style::default()
                    .fg(theme.on_accent)
                    .bg(theme.grade_color(grade))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}%  ", result.score_percentage()), value),
            Span::styled(status, Style::default().fg(status_color).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Correct    ", label),
            Span::styled(format!("{} / {}", result.correct_answers, result.total_questions), value),
        ]),
        Line::from(vec![
            Span::styled("Incorrect  ", label),
            Span::styled(result.incorrect_answers.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Time       ", label),
            Span::styled(format_duration(result.time_taken_secs), value),
        ]),
    ];

    let skills = result.skills_to_improve(topic);
    if !skills.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Improve    ", label),
            Span::styled(skills.join(", "), Style::default().fg(theme.warning)),
        ]));
    }
    lines
}

fn review_lines(index: usize, detail: &QuestionDetail, theme: &Theme) -> Vec<Line<'static>> {
    let (marker, color) =
        if detail.is_correct { ("\u{2713}", theme.success) } else { ("\u{2717}", theme.error) }; // ✓ or ✗
    let label = Style::default().fg(theme.fg_muted);

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{} Q{}. ", marker, index + 1), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(
            detail.question.clone(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        ),
    ])];

    lines.push(Line::from(vec![
        Span::styled("   Your answer: ", label),
        Span::styled(detail.user_answer.clone(), Style::default().fg(color)),
    ]));
    if !detail.is_correct {
        lines.push(Line::from(vec![
            Span::styled("   Correct:     ", label),
            Span::styled(detail.correct_answer.clone(), Style::default().fg(theme.success)),
        ]));
    }
    lines.push(Line::from(Span::styled(format!("   {}", detail.explanation), label)));
    lines.push(Line::from(""));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn detail(is_correct: bool) -> QuestionDetail {
        QuestionDetail {
            question: "Music has influenced modern technology (hard)".into(),
            user_answer: "False".into(),
            correct_answer: "True".into(),
            is_correct,
            explanation: "Foundations.".into(),
        }
    }

    #[test]
    fn wrong_answer_review_lists_correct_answer() {
        let lines: Vec<String> = review_lines(0, &detail(false), &Theme::default()).iter().map(text).collect();
        assert!(lines[0].starts_with("\u{2717} Q1. "));
        assert!(lines.iter().any(|l| l.contains("Correct:     True")));
    }

    #[test]
    fn right_answer_review_skips_correct_line() {
        let lines: Vec<String> = review_lines(2, &detail(true), &Theme::default()).iter().map(text).collect();
        assert!(lines[0].starts_with("\u{2713} Q3. "));
        assert!(!lines.iter().any(|l| l.contains("Correct:")));
    }

    #[test]
    fn failed_summary_suggests_improvements() {
        let result = QuizResult { total_questions: 5, correct_answers: 1, incorrect_answers: 4, ..Default::default() };
        let lines: Vec<String> = summary_lines(&result, "Music", &Theme::default()).iter().map(text).collect();
        assert!(lines[0].contains("F"));
        assert!(lines[0].contains("20%"));
        assert!(lines[0].contains("FAILED"));
        assert!(lines.iter().any(|l| l.contains("Music, Time Management")));
    }
}
