use serde::{Deserialize, Serialize};

pub mod cart;
pub mod dialog;

pub use cart::CartAction;
pub use dialog::DialogAction;

/// Actions describe every intent to change state.
///
/// Serialized as `{"type": "<scope>/<name>", "payload": ...}`, the same shape
/// each scoped enum uses on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Action {
    /// Cart slice actions
    Cart(CartAction),
    /// Confirmation dialog lifecycle (informational, no slice owns it)
    Dialog(DialogAction),
}

impl Action {
    /// Stable string type of this action, e.g. `cart/add`
    pub fn action_type(&self) -> &'static str {
        match self {
            Self::Cart(action) => action.action_type(),
            Self::Dialog(action) => action.action_type(),
        }
    }
}

impl From<CartAction> for Action {
    fn from(action: CartAction) -> Self {
        Self::Cart(action)
    }
}

impl From<DialogAction> for Action {
    fn from(action: DialogAction) -> Self {
        Self::Dialog(action)
    }
}
