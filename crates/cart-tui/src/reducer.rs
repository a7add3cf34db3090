//! Slice reducers
//!
//! A [`Reducer`] owns one slice of [`AppState`](crate::state::AppState). It is a
//! pure function from (current slice state, action) to the next slice state and
//! must hand back its input unchanged for actions it does not recognise.

use crate::actions::Action;
use crate::state::SliceValue;
use std::fmt;

/// Typed reducer for a single slice
pub trait Reducer: 'static {
    type State: Clone + fmt::Debug + PartialEq + 'static;

    /// State the slice starts with when the store is built
    fn initial_state(&self) -> Self::State;

    /// Produce the next state. Unknown actions return `state` as is.
    fn reduce(&self, state: Self::State, action: &Action) -> Self::State;
}

/// Adapter turning a plain function into a [`Reducer`]
#[cfg_attr(not(test), allow(dead_code))]
pub struct FnReducer<S, F> {
    initial: S,
    reduce: F,
}

/// Build a reducer from an initial value and a `(state, action) -> state` function
#[cfg_attr(not(test), allow(dead_code))]
pub fn reducer_fn<S, F>(initial: S, reduce: F) -> FnReducer<S, F>
where
    S: Clone + fmt::Debug + PartialEq + 'static,
    F: Fn(S, &Action) -> S + 'static,
{
    FnReducer { initial, reduce }
}

impl<S, F> Reducer for FnReducer<S, F>
where
    S: Clone + fmt::Debug + PartialEq + 'static,
    F: Fn(S, &Action) -> S + 'static,
{
    type State = S;

    fn initial_state(&self) -> S {
        self.initial.clone()
    }

    fn reduce(&self, state: S, action: &Action) -> S {
        (self.reduce)(state, action)
    }
}

/// Type-erased reducer as stored inside the store
pub(crate) trait ErasedReducer {
    fn initial_value(&self) -> SliceValue;
    fn reduce_value(&self, slice: &'static str, current: &SliceValue, action: &Action)
        -> SliceValue;
}

impl<R: Reducer> ErasedReducer for R {
    fn initial_value(&self) -> SliceValue {
        SliceValue::new(self.initial_state())
    }

    fn reduce_value(
        &self,
        slice: &'static str,
        current: &SliceValue,
        action: &Action,
    ) -> SliceValue {
        let Some(state) = current.downcast_ref::<R::State>() else {
            log::error!("Slice '{}' holds a value of the wrong type, leaving it untouched", slice);
            return current.clone();
        };

        let next = self.reduce(state.clone(), action);
        if &next == state {
            // Keep the existing allocation so unchanged slices stay pointer-equal
            current.clone()
        } else {
            SliceValue::new(next)
        }
    }
}

/// A registered slice: its key, reducer and starting value
pub(crate) struct SliceEntry {
    pub name: &'static str,
    pub reducer: Box<dyn ErasedReducer>,
    pub initial: SliceValue,
}

impl SliceEntry {
    pub fn new<R: Reducer>(name: &'static str, reducer: R) -> Self {
        let initial = reducer.initial_value();
        Self {
            name,
            reducer: Box::new(reducer),
            initial,
        }
    }

    pub fn with_state<R: Reducer>(name: &'static str, reducer: R, state: R::State) -> Self {
        Self {
            name,
            reducer: Box::new(reducer),
            initial: SliceValue::new(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::CartAction;

    fn counting() -> impl Reducer<State = u32> {
        reducer_fn(0u32, |count, action| match action {
            Action::Cart(CartAction::Add(_)) => count + 1,
            _ => count,
        })
    }

    #[test]
    fn test_fn_reducer_applies_function() {
        let reducer = counting();
        assert_eq!(reducer.initial_state(), 0);
        let add = Action::Cart(CartAction::Add("sku".to_string()));
        assert_eq!(reducer.reduce(4, &add), 5);
    }

    #[test]
    fn test_erased_reducer_keeps_unchanged_value() {
        let reducer = counting();
        let current = reducer.initial_value();
        let next = reducer.reduce_value("count", &current, &Action::Cart(CartAction::Clear));
        assert!(next.ptr_eq(&current));
    }

    #[test]
    fn test_erased_reducer_ignores_mismatched_type() {
        let reducer = counting();
        let current = SliceValue::new("not a number".to_string());
        let add = Action::Cart(CartAction::Add("sku".to_string()));
        let next = reducer.reduce_value("count", &current, &add);
        assert!(next.ptr_eq(&current));
    }
}
