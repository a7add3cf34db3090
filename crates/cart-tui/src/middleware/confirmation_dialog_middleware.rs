//! Confirmation Dialog Middleware
//!
//! Translates a confirmed clear-cart dialog into the cart action it stands for.

use crate::actions::{Action, CartAction, DialogAction};
use crate::components::DialogIntent;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that turns `dialog/resolved(confirm)` into `cart/clear`
#[derive(Debug, Default)]
pub struct ConfirmationDialogMiddleware;

impl ConfirmationDialogMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for ConfirmationDialogMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Dialog(DialogAction::Resolved(DialogIntent::Confirm)) = action {
            let count = state.cart().map_or(0, |cart| cart.items.len());
            log::info!("Clear-cart confirmed, removing {} item(s)", count);
            dispatcher.dispatch(Action::Cart(CartAction::Clear));
        }

        // Dialog actions still reach the reducers so every slice observes them
        true
    }
}
