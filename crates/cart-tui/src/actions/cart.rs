//! Cart actions

use serde::{Deserialize, Serialize};

/// Actions handled by the cart slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum CartAction {
    /// Append a SKU to the cart
    #[serde(rename = "cart/add")]
    Add(String),
    /// Remove the first occurrence of a SKU
    #[serde(rename = "cart/remove")]
    Remove(String),
    /// Remove every item
    #[serde(rename = "cart/clear")]
    Clear,
}

impl CartAction {
    pub fn action_type(&self) -> &'static str {
        match self {
            Self::Add(_) => "cart/add",
            Self::Remove(_) => "cart/remove",
            Self::Clear => "cart/clear",
        }
    }
}
