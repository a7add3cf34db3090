use ratatui::style::{palette::tailwind, Color, Modifier, Style};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub action_danger: Color,

    // Selection colors
    pub selected_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,
            action_danger: tailwind::RED.c400,

            selected_fg: tailwind::SLATE.c950,
        }
    }

    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel).fg(self.text_primary)
    }

    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style of a dialog button, highlighted when it has focus
    pub fn button(&self, focused: bool, danger: bool) -> Style {
        let accent = if danger {
            self.action_danger
        } else {
            self.accent_primary
        };
        if focused {
            Style::default()
                .bg(accent)
                .fg(self.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent)
        }
    }
}
