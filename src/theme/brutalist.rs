//! High-contrast light and dark palettes

use ratatui::style::Color;

use super::Theme;

/// Light palette: black ink on white with a yellow accent
pub const BRUTALIST_LIGHT: Theme = Theme {
    name: String::new(),
    dark: false,

    bg_primary: Color::Rgb(255, 255, 255),   // #ffffff
    bg_secondary: Color::Rgb(245, 245, 240), // #f5f5f0

    fg_primary: Color::Rgb(0, 0, 0),        // #000000
    fg_muted: Color::Rgb(96, 96, 96),       // #606060

    accent_primary: Color::Rgb(255, 229, 0), // #ffe500
    on_accent: Color::Rgb(0, 0, 0),          // #000000

    success: Color::Rgb(0, 217, 163), // #00d9a3
    warning: Color::Rgb(255, 149, 0), // #ff9500
    error: Color::Rgb(255, 87, 87),   // #ff5757

    border: Color::Rgb(0, 0, 0),            // #000000
    border_focused: Color::Rgb(0, 0, 0),    // #000000
    selection: Color::Rgb(229, 229, 229),   // #e5e5e5
};

/// Dark palette: white ink on near-black with the same accents
pub const BRUTALIST_DARK: Theme = Theme {
    name: String::new(),
    dark: true,

    bg_primary: Color::Rgb(26, 26, 26),   // #1a1a1a
    bg_secondary: Color::Rgb(42, 42, 42), // #2a2a2a

    fg_primary: Color::Rgb(255, 255, 255), // #ffffff
    fg_muted: Color::Rgb(160, 160, 160),   // #a0a0a0

    accent_primary: Color::Rgb(255, 229, 0), // #ffe500
    on_accent: Color::Rgb(0, 0, 0),          // #000000

    success: Color::Rgb(0, 217, 163), // #00d9a3
    warning: Color::Rgb(255, 149, 0), // #ff9500
    error: Color::Rgb(255, 87, 87),   // #ff5757

    border: Color::Rgb(255, 255, 255),         // #ffffff
    border_focused: Color::Rgb(255, 229, 0),   // #ffe500
    selection: Color::Rgb(58, 58, 58),         // #3a3a3a
};

// Names are set at runtime since String::from is not const
impl Theme {
    pub fn brutalist_light() -> Self {
        Theme { name: "Brutalist Light".to_string(), ..BRUTALIST_LIGHT }
    }

    pub fn brutalist_dark() -> Self {
        Theme { name: "Brutalist Dark".to_string(), ..BRUTALIST_DARK }
    }

    /// The other palette of the pair
    pub fn toggled(&self) -> Self {
        if self.dark { Self::brutalist_light() } else { Self::brutalist_dark() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_have_names() {
        assert_eq!(Theme::brutalist_light().name, "Brutalist Light");
        assert_eq!(Theme::brutalist_dark().name, "Brutalist Dark");
    }

    #[test]
    fn toggled_flips_between_palettes() {
        let light = Theme::brutalist_light();
        assert_eq!(light.toggled().name, "Brutalist Dark");
        assert_eq!(light.toggled().toggled(), light);
    }

    #[test]
    fn toggle_follows_dark_flag_not_name() {
        let renamed = Theme { name: "Night".to_string(), ..Theme::brutalist_dark() };
        let light = renamed.toggled();
        assert!(!light.dark);
        assert_eq!(light, Theme::brutalist_light());
        assert!(light.toggled().dark);
    }

    #[test]
    fn dark_palette_inverts_ink() {
        assert_eq!(BRUTALIST_DARK.fg_primary, BRUTALIST_LIGHT.bg_primary);
    }
}
