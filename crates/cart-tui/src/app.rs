//! Host application
//!
//! Owns the store handle, the dialog props and everything the store does not:
//! whether the dialog is visible, which button has focus, and the status line.

use crate::actions::{Action, CartAction, DialogAction};
use crate::components::{ConfirmationDialog, DialogIntent};
use crate::error::StoreError;
use crate::middleware::{ConfirmationDialogMiddleware, LoggingMiddleware};
use crate::reducers::{CartReducer, CART_SLICE};
use crate::store::{Store, Subscription};
use crate::theme::Theme;
use crate::view_models::DialogTree;
use cart_config::AppConfig;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub struct App {
    store: Store,
    dialog: ConfirmationDialog,
    dialog_visible: Rc<Cell<bool>>,
    focus: DialogIntent,
    status: Rc<RefCell<String>>,
    subscription: Option<Subscription>,
    catalog: Vec<String>,
    next_sku: usize,
    theme: Theme,
    running: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, StoreError> {
        let store = Store::builder()
            .slice(CART_SLICE, CartReducer)
            .middleware(LoggingMiddleware::new())
            .middleware(ConfirmationDialogMiddleware::new())
            .build()?;

        let status = Rc::new(RefCell::new(String::from("Cart ready")));
        let sink = Rc::clone(&status);
        let subscription = store.subscribe(move |state| {
            let count = state.cart().map_or(0, |cart| cart.items.len());
            *sink.borrow_mut() = format!("{} item(s) in cart", count);
        });

        let dialog_visible = Rc::new(Cell::new(false));
        let dialog = ConfirmationDialog::from_config(config)
            .on_confirm(resolve(&store, &dialog_visible, &status, DialogIntent::Confirm))
            .on_cancel(resolve(&store, &dialog_visible, &status, DialogIntent::Cancel));

        Ok(Self {
            store,
            dialog,
            dialog_visible,
            focus: DialogIntent::Confirm,
            status,
            subscription: Some(subscription),
            catalog: config.catalog.clone(),
            next_sku: 0,
            theme: Theme::default(),
            running: true,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }

    pub fn focus(&self) -> DialogIntent {
        self.focus
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn dialog_visible(&self) -> bool {
        self.dialog_visible.get()
    }

    /// What the dialog looks like right now, `None` while hidden
    pub fn dialog_tree(&self) -> Option<DialogTree> {
        self.dialog.render(self.dialog_visible.get())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), StoreError> {
        if self.dialog_visible.get() {
            self.handle_dialog_key(key);
            return Ok(());
        }

        match key.code {
            KeyCode::Char('a') => self.add_next_item(),
            KeyCode::Char('d') => self.remove_last_item(),
            KeyCode::Char('c') => self.open_dialog(),
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.focus = self.focus.toggle();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.dialog.click(self.focus),
            KeyCode::Char('y') => self.dialog.click(DialogIntent::Confirm),
            KeyCode::Char('n') | KeyCode::Esc => self.dialog.click(DialogIntent::Cancel),
            _ => {}
        }
    }

    fn add_next_item(&mut self) -> Result<(), StoreError> {
        if self.catalog.is_empty() {
            log::warn!("Catalog is empty, nothing to add");
            return Ok(());
        }
        let sku = self.catalog[self.next_sku % self.catalog.len()].clone();
        self.next_sku += 1;
        self.store.dispatch(CartAction::Add(sku))
    }

    fn remove_last_item(&mut self) -> Result<(), StoreError> {
        let last = self
            .store
            .get_state()
            .cart()
            .and_then(|cart| cart.items.last().cloned());
        match last {
            Some(sku) => self.store.dispatch(CartAction::Remove(sku)),
            None => Ok(()),
        }
    }

    fn open_dialog(&mut self) -> Result<(), StoreError> {
        self.focus = DialogIntent::Confirm;
        self.dialog_visible.set(true);
        self.store.dispatch(DialogAction::Opened)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

/// Callback for one dialog button: hide the dialog, then report the choice
///
/// A failed dispatch lands in the status line; the dialog stays closed.
fn resolve(
    store: &Store,
    visible: &Rc<Cell<bool>>,
    status: &Rc<RefCell<String>>,
    intent: DialogIntent,
) -> impl Fn() + 'static {
    let store = store.clone();
    let visible = Rc::clone(visible);
    let status = Rc::clone(status);
    move || {
        visible.set(false);
        if let Err(e) = store.dispatch(Action::Dialog(DialogAction::Resolved(intent))) {
            log::error!("Failed to resolve dialog with '{}': {}", intent, e);
            *status.borrow_mut() = format!("Could not {}: {}", intent, e);
        }
    }
}
