//! Theming system for quizdeck

mod brutalist;

pub use brutalist::{BRUTALIST_DARK, BRUTALIST_LIGHT};

use ratatui::style::Color;

/// A color theme for the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    /// Light ink on a dark background
    pub dark: bool,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    /// Text drawn on top of `accent_primary`
    pub on_accent: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::brutalist_light()
    }
}

impl Theme {
    /// Color for a letter grade
    pub fn grade_color(&self, grade: crate::quiz::Grade) -> Color {
        use crate::quiz::Grade;
        match grade {
            Grade::APlus | Grade::A => self.success,
            Grade::B => self.accent_primary,
            Grade::C => self.warning,
            Grade::F => self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Grade;

    #[test]
    fn default_theme_is_light() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Brutalist Light");
    }

    #[test]
    fn failing_grade_uses_error_color() {
        let theme = Theme::default();
        assert_eq!(theme.grade_color(Grade::F), theme.error);
        assert_eq!(theme.grade_color(Grade::APlus), theme.success);
    }
}
