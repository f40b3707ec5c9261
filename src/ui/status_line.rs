//! Status line and text input rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{StatusLine, TextInput};
use crate::theme::Theme;

/// Draw the status line at the bottom of the screen, falling back to key hints
pub fn draw(frame: &mut Frame, area: Rect, status: &StatusLine, hint: &str, theme: &Theme) {
    let (text, style) = match status.message {
        Some(ref msg) if status.is_error => {
            (msg.as_str(), Style::default().fg(theme.error).add_modifier(Modifier::BOLD))
        }
        Some(ref msg) => (msg.as_str(), Style::default().fg(theme.fg_primary)),
        None => (hint, Style::default().fg(theme.fg_muted)),
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(text.to_string(), style)))
        .style(Style::default().bg(theme.bg_primary));
    frame.render_widget(paragraph, area);
}

/// Render a text input, with a visible cursor when focused
pub fn input_line(input: &TextInput, focused: bool, theme: &Theme) -> Line<'static> {
    let style = Style::default().fg(theme.fg_primary);
    if focused {
        build_line_with_cursor(&input.value, input.cursor, style, theme)
    } else {
        Line::from(Span::styled(input.value.clone(), style))
    }
}

/// Build a line with a visible cursor
fn build_line_with_cursor(
    text: &str,
    cursor_pos: usize,
    base_style: Style,
    theme: &Theme,
) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();

    // Text before cursor
    if cursor_pos > 0 {
        let before: String = chars.iter().take(cursor_pos).collect();
        spans.push(Span::styled(before, base_style));
    }

    // Cursor character (or space if at end)
    let cursor_char = chars.get(cursor_pos).copied().unwrap_or(' ');
    let cursor_style =
        Style::default().fg(theme.on_accent).bg(theme.accent_primary).add_modifier(Modifier::BOLD);
    spans.push(Span::styled(cursor_char.to_string(), cursor_style));

    // Text after cursor
    if cursor_pos + 1 < chars.len() {
        let after: String = chars.iter().skip(cursor_pos + 1).collect();
        spans.push(Span::styled(after, base_style));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_cursor_at_start() {
        let theme = Theme::default();
        let line = build_line_with_cursor("test", 0, Style::default(), &theme);
        assert_eq!(line.spans.len(), 2); // cursor + rest
    }

    #[test]
    fn build_cursor_at_end() {
        let theme = Theme::default();
        let line = build_line_with_cursor("test", 4, Style::default(), &theme);
        assert_eq!(line.spans.len(), 2); // before + cursor (space)
    }

    #[test]
    fn build_cursor_in_middle() {
        let theme = Theme::default();
        let line = build_line_with_cursor("test", 2, Style::default(), &theme);
        assert_eq!(line.spans.len(), 3); // before + cursor + after
    }

    #[test]
    fn unfocused_input_has_no_cursor() {
        let theme = Theme::default();
        let input = TextInput { value: "ada".into(), cursor: 1 };
        assert_eq!(input_line(&input, false, &theme).spans.len(), 1);
    }
}
