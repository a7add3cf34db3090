use crate::actions::Action;
use crate::error::StoreError;
use crate::reducer::SliceEntry;
use crate::state::AppState;
use std::any::Any;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};

thread_local! {
    static IN_SLICE_REDUCER: Cell<bool> = const { Cell::new(false) };
}

/// True while a slice reducer runs under the root reducer's panic guard
pub(crate) fn in_slice_reducer() -> bool {
    IN_SLICE_REDUCER.with(Cell::get)
}

struct SliceReducerScope(bool);

impl SliceReducerScope {
    fn enter() -> Self {
        Self(IN_SLICE_REDUCER.with(|flag| flag.replace(true)))
    }
}

impl Drop for SliceReducerScope {
    fn drop(&mut self) {
        IN_SLICE_REDUCER.with(|flag| flag.set(self.0));
    }
}

/// Root reducer - routes the action to every registered slice in registration order
///
/// Builds a brand new [`AppState`]; `state` is never touched. If any slice
/// reducer panics the whole step is abandoned and the error names the slice.
pub(crate) fn reduce(
    state: &AppState,
    slices: &[SliceEntry],
    action: &Action,
) -> Result<AppState, StoreError> {
    let mut next = BTreeMap::new();

    for entry in slices {
        let current = state.slice_value(entry.name).unwrap_or(&entry.initial);
        let reduced = panic::catch_unwind(AssertUnwindSafe(|| {
            let _scope = SliceReducerScope::enter();
            entry.reducer.reduce_value(entry.name, current, action)
        }))
        .map_err(|payload| StoreError::ReducerPanicked {
            slice: entry.name,
            message: panic_message(payload.as_ref()),
        })?;
        next.insert(entry.name, reduced);
    }

    Ok(AppState::from_slices(next))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::CartAction;
    use crate::reducer::reducer_fn;

    fn slices() -> Vec<SliceEntry> {
        vec![
            SliceEntry::new(
                "adds",
                reducer_fn(0u32, |n, action| match action {
                    Action::Cart(CartAction::Add(_)) => n + 1,
                    _ => n,
                }),
            ),
            SliceEntry::new(
                "clears",
                reducer_fn(0u32, |n, action| match action {
                    Action::Cart(CartAction::Clear) => n + 1,
                    _ => n,
                }),
            ),
        ]
    }

    fn initial(slices: &[SliceEntry]) -> AppState {
        AppState::from_slices(slices.iter().map(|e| (e.name, e.initial.clone())).collect())
    }

    #[test]
    fn test_every_slice_sees_the_action() {
        let slices = slices();
        let state = initial(&slices);
        let next = reduce(&state, &slices, &Action::Cart(CartAction::Clear)).unwrap();

        assert_eq!(next.slice::<u32>("adds"), Some(&0));
        assert_eq!(next.slice::<u32>("clears"), Some(&1));
        // Untouched slice keeps its allocation
        assert!(next
            .slice_value("adds")
            .unwrap()
            .ptr_eq(state.slice_value("adds").unwrap()));
    }

    #[test]
    fn test_panicking_slice_is_reported() {
        let slices = vec![SliceEntry::new(
            "broken",
            reducer_fn(0u32, |_, _| panic!("boom")),
        )];
        let state = initial(&slices);
        let err = reduce(&state, &slices, &Action::Cart(CartAction::Clear)).unwrap_err();

        assert_eq!(
            err,
            StoreError::ReducerPanicked {
                slice: "broken",
                message: "boom".to_string(),
            }
        );
    }

    #[test]
    fn test_slice_reducer_scope_ends_with_the_panic() {
        let slices = vec![SliceEntry::new(
            "watcher",
            reducer_fn(false, |_, action| match action {
                Action::Cart(CartAction::Clear) => panic!("stop"),
                _ => in_slice_reducer(),
            }),
        )];
        let state = initial(&slices);
        assert!(!in_slice_reducer());

        let next = reduce(&state, &slices, &Action::Cart(CartAction::Add("a".into()))).unwrap();
        assert_eq!(next.slice::<bool>("watcher"), Some(&true));
        assert!(!in_slice_reducer());

        assert!(reduce(&state, &slices, &Action::Cart(CartAction::Clear)).is_err());
        assert!(!in_slice_reducer());
    }
}
