//! Dispatcher for follow-up actions
//!
//! Middleware must not call [`Store::dispatch`](crate::store::Store::dispatch)
//! while an action is in flight. Instead it queues follow-up actions here; the
//! store processes them, in order, once the current dispatch has finished
//! notifying subscribers.

use crate::actions::Action;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Queue of actions waiting to re-enter the store
#[derive(Clone, Default)]
pub struct Dispatcher {
    pending: Rc<RefCell<VecDeque<Action>>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action to be dispatched after the current one completes
    pub fn dispatch(&self, action: Action) {
        self.pending.borrow_mut().push_back(action);
    }

    /// Take every queued action, oldest first
    pub fn drain(&self) -> Vec<Action> {
        self.pending.borrow_mut().drain(..).collect()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::CartAction;

    #[test]
    fn test_drain_returns_actions_in_order() {
        let dispatcher = Dispatcher::new();
        let clone = dispatcher.clone();
        dispatcher.dispatch(Action::Cart(CartAction::Add("a".into())));
        clone.dispatch(Action::Cart(CartAction::Clear));

        assert_eq!(
            dispatcher.drain(),
            vec![
                Action::Cart(CartAction::Add("a".into())),
                Action::Cart(CartAction::Clear),
            ]
        );
        assert!(dispatcher.is_empty());
    }
}
