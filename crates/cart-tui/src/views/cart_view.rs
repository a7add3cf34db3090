//! Cart View
//!
//! Lists the cart items with a status line and key hints.

use crate::reducers::CartState;
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(cart: Option<&CartState>, status: &str, theme: &Theme, area: Rect, f: &mut Frame) {
    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg_primary)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Item list
            Constraint::Length(1), // Status
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let items: Vec<ListItem> = match cart {
        Some(cart) if !cart.is_empty() => cart
            .items
            .iter()
            .enumerate()
            .map(|(i, sku)| ListItem::new(format!("{:>3}. {}", i + 1, sku)))
            .collect(),
        _ => vec![ListItem::new(Span::styled("Your cart is empty", theme.muted()))],
    };

    let count = cart.map_or(0, |cart| cart.items.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Cart ({}) ", count))
            .title_style(theme.panel_title())
            .style(theme.panel_background()),
    );
    f.render_widget(list, chunks[0]);

    f.render_widget(
        Paragraph::new(Span::styled(status.to_string(), theme.muted())),
        chunks[1],
    );

    let hints = Line::from(vec![
        Span::styled(" a", theme.key_hint()),
        Span::styled(" add  ", theme.muted()),
        Span::styled("d", theme.key_hint()),
        Span::styled(" remove last  ", theme.muted()),
        Span::styled("c", theme.key_hint()),
        Span::styled(" clear cart  ", theme.muted()),
        Span::styled("q", theme.key_hint()),
        Span::styled(" quit", theme.muted()),
    ]);
    f.render_widget(Paragraph::new(hints), chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(cart: Option<&CartState>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(50, 10)).unwrap();
        terminal
            .draw(|f| render(cart, "ready", &Theme::default(), f.area(), f))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_lists_items() {
        let cart = CartState::with_items(["sku1", "sku2"]);
        let screen = draw(Some(&cart));
        assert!(screen.contains("Cart (2)"));
        assert!(screen.contains("1. sku1"));
        assert!(screen.contains("2. sku2"));
        assert!(screen.contains("ready"));
    }

    #[test]
    fn test_empty_cart_placeholder() {
        let screen = draw(Some(&CartState::default()));
        assert!(screen.contains("Your cart is empty"));
    }
}
