//! Confirmation dialog actions
//!
//! The dialog keeps no state in the store. These actions exist so the
//! middleware chain can observe the interaction and translate a confirmed
//! intent into the cart action it stands for.

use crate::components::DialogIntent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum DialogAction {
    /// The host made the clear-cart dialog visible
    #[serde(rename = "dialog/opened")]
    Opened,
    /// The user picked one of the two buttons
    #[serde(rename = "dialog/resolved")]
    Resolved(DialogIntent),
}

impl DialogAction {
    pub fn action_type(&self) -> &'static str {
        match self {
            Self::Opened => "dialog/opened",
            Self::Resolved(_) => "dialog/resolved",
        }
    }
}
