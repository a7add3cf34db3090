pub mod confirmation_dialog;

pub use confirmation_dialog::{ConfirmationDialog, DialogIntent};
