//! Cart Reducer

use crate::actions::{Action, CartAction};
use crate::reducer::Reducer;
use crate::state::AppState;
use serde::{Deserialize, Serialize};

/// Key the cart slice is registered under
pub const CART_SLICE: &str = "cart";

/// Items currently in the cart, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<String>,
}

impl CartState {
    #[cfg(test)]
    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Reducer for the cart slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;

    fn initial_state(&self) -> CartState {
        CartState::default()
    }

    fn reduce(&self, mut state: CartState, action: &Action) -> CartState {
        let Action::Cart(action) = action else {
            return state;
        };

        match action {
            CartAction::Add(sku) => {
                state.items.push(sku.clone());
            }
            CartAction::Remove(sku) => {
                if let Some(pos) = state.items.iter().position(|item| item == sku) {
                    state.items.remove(pos);
                } else {
                    log::debug!("cart/remove: '{}' is not in the cart", sku);
                }
            }
            CartAction::Clear => {
                state.items.clear();
            }
        }
        state
    }
}

impl AppState {
    /// The cart slice, if the store registered one
    pub fn cart(&self) -> Option<&CartState> {
        self.slice::<CartState>(CART_SLICE)
    }
}
