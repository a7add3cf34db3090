//! Confirmation Dialog
//!
//! Stateless clear-cart confirmation. The caller owns visibility and supplies
//! what happens on each button; the component only describes what to draw
//! and forwards clicks.

use crate::view_models::{DialogButton, DialogTree};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Which button the user activated
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DialogIntent {
    Confirm,
    Cancel,
}

impl DialogIntent {
    /// The other button, used to move focus
    pub fn toggle(self) -> Self {
        match self {
            Self::Confirm => Self::Cancel,
            Self::Cancel => Self::Confirm,
        }
    }

    /// CSS-style class of the button carrying this intent
    pub fn button_class(self) -> &'static str {
        match self {
            Self::Confirm => "btn confirm-btn",
            Self::Cancel => "btn clear-btn",
        }
    }
}

type Callback = Box<dyn Fn()>;

/// Props of the clear-cart confirmation dialog
pub struct ConfirmationDialog {
    prompt: String,
    confirm_label: String,
    cancel_label: String,
    on_confirm: Option<Callback>,
    on_cancel: Option<Callback>,
}

impl Default for ConfirmationDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationDialog {
    pub fn new() -> Self {
        Self {
            prompt: "Remove all items from your shopping cart?".to_string(),
            confirm_label: DialogIntent::Confirm.to_string(),
            cancel_label: DialogIntent::Cancel.to_string(),
            on_confirm: None,
            on_cancel: None,
        }
    }

    /// Build from configured prompt and labels
    pub fn from_config(config: &cart_config::AppConfig) -> Self {
        Self::new()
            .with_prompt(config.prompt.clone())
            .with_labels(config.confirm_label.clone(), config.cancel_label.clone())
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_labels(mut self, confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.confirm_label = confirm.into();
        self.cancel_label = cancel.into();
        self
    }

    pub fn on_confirm(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_confirm = Some(Box::new(callback));
        self
    }

    pub fn on_cancel(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }

    /// Describe the dialog; `None` while the caller keeps it hidden
    pub fn render(&self, visible: bool) -> Option<DialogTree> {
        if !visible {
            return None;
        }

        Some(DialogTree {
            container_class: "modal-container",
            class: "modal",
            prompt: self.prompt.clone(),
            buttons: [
                DialogButton {
                    label: self.confirm_label.clone(),
                    class: DialogIntent::Confirm.button_class(),
                    intent: DialogIntent::Confirm,
                },
                DialogButton {
                    label: self.cancel_label.clone(),
                    class: DialogIntent::Cancel.button_class(),
                    intent: DialogIntent::Cancel,
                },
            ],
        })
    }

    /// Forward one click to the matching callback. Missing callbacks are ignored.
    pub fn click(&self, intent: DialogIntent) {
        let callback = match intent {
            DialogIntent::Confirm => &self.on_confirm,
            DialogIntent::Cancel => &self.on_cancel,
        };

        match callback {
            Some(callback) => callback(),
            None => log::debug!("No handler for dialog intent '{}'", intent),
        }
    }
}
