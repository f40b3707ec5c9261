//! Layout utilities and common components

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::theme::Theme;

/// Split the screen into a content area and a one-line status area
pub fn with_status_line(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);
    (chunks[0], chunks[1])
}

/// Fill the whole frame with the theme background
pub fn fill_background(frame: &mut Frame, theme: &Theme) {
    let bg = Paragraph::new("").style(Style::default().bg(theme.bg_primary));
    frame.render_widget(bg, frame.area());
}

/// Thick-bordered card with an uppercase title
pub fn card<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title.to_uppercase()),
            Style::default().fg(theme.on_accent).bg(theme.accent_primary).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary).fg(theme.fg_primary))
}

/// Text progress bar, `fraction` clamped to 0..=1
pub fn progress_bar(fraction: f64, width: usize, theme: &Theme) -> Line<'static> {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    Line::from(vec![
        Span::styled("\u{2588}".repeat(filled), Style::default().fg(theme.accent_primary)), // █
        Span::styled("\u{2591}".repeat(width - filled), Style::default().fg(theme.fg_muted)), // ░
    ])
}

/// Create a centered rectangle with the given percentage of width and height
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
