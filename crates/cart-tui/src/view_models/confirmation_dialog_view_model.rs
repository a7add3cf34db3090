//! Render tree for the confirmation dialog
//!
//! Framework-agnostic description produced by
//! [`ConfirmationDialog::render`](crate::components::ConfirmationDialog::render).
//! The terminal view draws from this and nothing else.

use crate::components::DialogIntent;

/// One activation target of the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogButton {
    pub label: String,
    pub class: &'static str,
    pub intent: DialogIntent,
}

/// The visible dialog: container, prompt and exactly two buttons (confirm, cancel)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogTree {
    pub container_class: &'static str,
    pub class: &'static str,
    pub prompt: String,
    pub buttons: [DialogButton; 2],
}

impl DialogTree {
    pub fn button(&self, intent: DialogIntent) -> &DialogButton {
        match intent {
            DialogIntent::Confirm => &self.buttons[0],
            DialogIntent::Cancel => &self.buttons[1],
        }
    }
}
