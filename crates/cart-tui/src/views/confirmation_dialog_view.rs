//! Confirmation Dialog View
//!
//! Draws a [`DialogTree`] as a centered floating window over a dimmed backdrop.

use crate::components::DialogIntent;
use crate::theme::Theme;
use crate::view_models::DialogTree;
use strum::IntoEnumIterator;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the dialog as a centered floating window
pub fn render(tree: &DialogTree, focused: DialogIntent, theme: &Theme, area: Rect, f: &mut Frame) {
    // Dim everything behind the popup
    let overlay = Block::default().style(
        Style::default()
            .bg(Color::Black)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(overlay, area);

    let popup_area = centered(area);
    f.render_widget(Clear, popup_area);

    let footer_hint = Line::from(vec![
        Span::styled(" Tab", theme.key_hint()),
        Span::styled(" switch  ", theme.muted()),
        Span::styled("Enter", theme.key_hint()),
        Span::styled(" select  ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" cancel ", theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        )
        .style(theme.panel_background());
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Prompt
            Constraint::Length(1), // Buttons
        ])
        .split(inner);

    let prompt = Paragraph::new(Line::from(Span::styled(
        tree.prompt.as_str(),
        Style::default()
            .fg(theme.text_primary)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(prompt, chunks[0]);

    let mut buttons = Vec::with_capacity(4);
    for (i, intent) in DialogIntent::iter().enumerate() {
        let button = tree.button(intent);
        if i > 0 {
            buttons.push(Span::raw("   "));
        }
        let style = theme.button(
            button.intent == focused,
            button.intent == DialogIntent::Confirm,
        );
        buttons.push(Span::styled(format!(" {} ", button.label), style));
    }
    f.render_widget(
        Paragraph::new(Line::from(buttons)).alignment(Alignment::Center),
        chunks[1],
    );
}

/// 60% of the width (clamped), fixed height, centered
fn centered(area: Rect) -> Rect {
    let width = (u32::from(area.width) * 60 / 100).clamp(40, 64) as u16;
    let width = width.min(area.width);
    let height = 7.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ConfirmationDialog;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(focused: DialogIntent) -> Buffer {
        let tree = ConfirmationDialog::new().render(true).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|f| render(&tree, focused, &Theme::default(), f.area(), f))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    /// Position of the first cell where `needle` starts, scanning row by row
    fn find(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
        let needle: Vec<String> = needle.chars().map(String::from).collect();
        let area = buffer.area;
        for y in area.top()..area.bottom() {
            let row: Vec<&str> = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            if let Some(col) = row
                .windows(needle.len())
                .position(|window| window.iter().zip(&needle).all(|(a, b)| *a == b.as_str()))
            {
                return Some((area.left() + col as u16, y));
            }
        }
        None
    }

    #[test]
    fn test_renders_prompt_and_both_buttons() {
        let buffer = draw(DialogIntent::Confirm);
        let screen = text(&buffer);
        assert!(screen.contains("Remove all items from your shopping cart?"));
        assert!(screen.contains(" confirm "));
        assert!(screen.contains(" cancel "));
    }

    #[test]
    fn test_focused_button_is_highlighted() {
        let theme = Theme::default();
        let buffer = draw(DialogIntent::Cancel);

        let (x, y) = find(&buffer, " cancel ").unwrap();
        assert_eq!(buffer[(x + 1, y)].bg, theme.accent_primary);

        let (x, y) = find(&buffer, " confirm ").unwrap();
        assert_ne!(buffer[(x + 1, y)].bg, theme.action_danger);
    }

    #[test]
    fn test_centered_fits_small_area() {
        let area = Rect::new(0, 0, 30, 5);
        let popup = centered(area);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }

    #[test]
    fn test_centered_on_very_wide_terminal() {
        let area = Rect::new(0, 0, 1200, 40);
        let popup = centered(area);
        assert_eq!(popup.width, 64);
        assert_eq!(popup.x, (1200 - 64) / 2);

        let popup = centered(Rect::new(0, 0, u16::MAX, 40));
        assert_eq!(popup.width, 64);
    }
}
