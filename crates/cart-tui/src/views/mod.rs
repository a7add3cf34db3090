use crate::app::App;
use ratatui::{layout::Rect, Frame};

pub mod cart_view;
pub mod confirmation_dialog_view;

/// Render the whole screen: cart underneath, dialog floating on top when visible
pub fn render(app: &App, area: Rect, f: &mut Frame) {
    let state = app.store().get_state();
    let status = app.status();
    cart_view::render(state.cart(), &status, app.theme(), area, f);

    if let Some(tree) = app.dialog_tree() {
        confirmation_dialog_view::render(&tree, app.focus(), app.theme(), area, f);
    }
}
