//! Color themes for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name.
    pub name: String,

    // Background hierarchy
    /// Base background - darkest.
    pub background: Color,
    /// Panel background (dialogs).
    pub background_panel: Color,
    /// Element background (code blocks, buttons).
    pub background_element: Color,

    // Text colors
    /// Primary text color.
    pub text: Color,
    /// Muted/secondary text.
    pub text_muted: Color,

    // Accent colors
    /// Primary accent, used for headings and the focused button.
    pub primary: Color,

    // Border colors
    /// Active/focused border.
    pub border_active: Color,

    // Snippet highlighting
    /// Shell comments inside the CLI snippet.
    pub syntax_comment: Color,
    /// Quoted strings inside snippets.
    pub syntax_string: Color,
    /// JSON keys and shell keywords.
    pub syntax_keyword: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::router()
    }
}

impl Theme {
    /// Get a theme by name. Unknown names fall back to the default theme.
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            _ => Self::router(),
        }
    }

    /// List available theme names.
    pub fn available() -> Vec<&'static str> {
        vec!["router", "light", "dracula", "nord"]
    }

    /// Default dark theme.
    pub fn router() -> Self {
        Self {
            name: "router".to_string(),

            background: Color::Rgb(24, 24, 27),         // zinc-900
            background_panel: Color::Rgb(39, 39, 42),   // zinc-800
            background_element: Color::Rgb(50, 50, 55),

            text: Color::Rgb(250, 250, 250),
            text_muted: Color::Rgb(161, 161, 170), // zinc-400

            primary: Color::Rgb(96, 165, 250), // blue-400

            border_active: Color::Rgb(96, 165, 250),

            syntax_comment: Color::Rgb(113, 113, 122), // zinc-500
            syntax_string: Color::Rgb(74, 222, 128),
            syntax_keyword: Color::Rgb(167, 139, 250),
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),

            background: Color::Rgb(255, 255, 255),
            background_panel: Color::Rgb(250, 250, 250),
            background_element: Color::Rgb(245, 245, 245),

            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(128, 128, 128),

            primary: Color::Rgb(50, 100, 200),

            border_active: Color::Rgb(50, 100, 200),

            syntax_comment: Color::Rgb(128, 128, 128),
            syntax_string: Color::Rgb(40, 160, 70),
            syntax_keyword: Color::Rgb(130, 80, 180),
        }
    }

    /// Dracula theme.
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),

            background: Color::Rgb(40, 42, 54),
            background_panel: Color::Rgb(48, 51, 66),
            background_element: Color::Rgb(68, 71, 90),

            text: Color::Rgb(248, 248, 242),
            text_muted: Color::Rgb(98, 114, 164),

            primary: Color::Rgb(189, 147, 249), // purple

            border_active: Color::Rgb(189, 147, 249),

            syntax_comment: Color::Rgb(98, 114, 164),
            syntax_string: Color::Rgb(241, 250, 140),
            syntax_keyword: Color::Rgb(255, 121, 198),
        }
    }

    /// Nord theme.
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),

            background: Color::Rgb(46, 52, 64),         // polar night 1
            background_panel: Color::Rgb(59, 66, 82),   // polar night 2
            background_element: Color::Rgb(67, 76, 94), // polar night 3

            text: Color::Rgb(236, 239, 244),     // snow storm 2
            text_muted: Color::Rgb(129, 140, 160),

            primary: Color::Rgb(136, 192, 208), // frost 2

            border_active: Color::Rgb(136, 192, 208),

            syntax_comment: Color::Rgb(97, 110, 136),
            syntax_string: Color::Rgb(163, 190, 140),
            syntax_keyword: Color::Rgb(129, 161, 193),
        }
    }

    // Style helper methods

    /// Base text style.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Muted text style.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Primary accent style.
    pub fn primary_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Active border style.
    pub fn border_active_style(&self) -> Style {
        Style::default().fg(self.border_active)
    }

    /// Style with background panel color.
    pub fn panel_style(&self) -> Style {
        Style::default().bg(self.background_panel)
    }

    /// Section heading style.
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Plain code inside a snippet block.
    pub fn code_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background_element)
    }

    pub fn code_comment_style(&self) -> Style {
        self.code_style().fg(self.syntax_comment)
    }

    pub fn code_string_style(&self) -> Style {
        self.code_style().fg(self.syntax_string)
    }

    pub fn code_keyword_style(&self) -> Style {
        self.code_style().fg(self.syntax_keyword)
    }

    /// Focused button style.
    pub fn button_focused_style(&self) -> Style {
        Style::default()
            .bg(self.border_active)
            .fg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim_style(&self) -> Style {
        self.muted_style()
    }

    pub fn highlight_style(&self) -> Style {
        self.primary_style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default_is_router() {
        assert_eq!(Theme::default().name, "router");
    }

    #[test]
    fn test_theme_by_name() {
        assert_eq!(Theme::by_name("light").name, "light");
        assert_eq!(Theme::by_name("DRACULA").name, "dracula");
        assert_eq!(Theme::by_name("Nord").name, "nord");
    }

    #[test]
    fn test_theme_by_name_unknown_falls_back() {
        assert_eq!(Theme::by_name("solarized").name, "router");
    }

    #[test]
    fn test_every_available_theme_resolves() {
        for name in Theme::available() {
            assert_eq!(Theme::by_name(name).name, name);
        }
    }

    #[test]
    fn test_code_styles_share_element_background() {
        let theme = Theme::dracula();
        assert_eq!(theme.code_style().bg, Some(theme.background_element));
        assert_eq!(theme.code_comment_style().bg, Some(theme.background_element));
        assert_eq!(theme.code_comment_style().fg, Some(theme.syntax_comment));
    }

    #[test]
    fn test_heading_style_is_bold() {
        let theme = Theme::light();
        assert!(theme
            .heading_style()
            .add_modifier
            .contains(Modifier::BOLD));
    }
}
