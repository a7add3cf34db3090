pub mod confirmation_dialog_view_model;

pub use confirmation_dialog_view_model::{DialogButton, DialogTree};
