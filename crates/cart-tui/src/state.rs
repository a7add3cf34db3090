//! Application state
//!
//! The root state is a fixed set of named slices. Each slice value is
//! reference-counted and never mutated in place: reducers produce a new value
//! and the store swaps the whole map, so a snapshot taken with
//! [`crate::store::Store::get_state`] stays consistent forever.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Object-safe view of a slice's state value
pub trait SliceState: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
    fn dyn_eq(&self, other: &dyn SliceState) -> bool;
}

impl<T> SliceState for T
where
    T: Any + fmt::Debug + PartialEq,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn SliceState) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| other == self)
    }
}

/// Shared handle to one slice's state
#[derive(Clone)]
pub struct SliceValue(Rc<dyn SliceState>);

impl SliceValue {
    pub fn new<T: SliceState>(value: T) -> Self {
        Self(Rc::new(value))
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        (*self.0).as_any().downcast_ref::<T>()
    }

    /// True when both handles point at the very same value
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for SliceValue {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || (*self.0).dyn_eq(&*other.0)
    }
}

impl fmt::Debug for SliceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// Root state: slice name to slice value
#[derive(Clone, Default, PartialEq)]
pub struct AppState {
    slices: BTreeMap<&'static str, SliceValue>,
}

impl AppState {
    pub(crate) fn from_slices(slices: BTreeMap<&'static str, SliceValue>) -> Self {
        Self { slices }
    }

    /// Typed access to a slice; `None` if the name is unknown or the type does not match
    pub fn slice<T: 'static>(&self, name: &str) -> Option<&T> {
        self.slices.get(name).and_then(|value| value.downcast_ref::<T>())
    }

    pub fn slice_value(&self, name: &str) -> Option<&SliceValue> {
        self.slices.get(name)
    }

    /// Registered slice names in key order
    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slices.keys().copied()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.slices.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Counter(u32);

    fn state_with(counter: u32) -> AppState {
        let mut slices = BTreeMap::new();
        slices.insert("counter", SliceValue::new(Counter(counter)));
        AppState::from_slices(slices)
    }

    #[test]
    fn test_typed_slice_access() {
        let state = state_with(3);
        assert_eq!(state.slice::<Counter>("counter"), Some(&Counter(3)));
        assert_eq!(state.slice::<String>("counter"), None);
        assert_eq!(state.slice::<Counter>("missing"), None);
    }

    #[test]
    fn test_states_compare_by_value() {
        assert_eq!(state_with(1), state_with(1));
        assert_ne!(state_with(1), state_with(2));
        assert_ne!(state_with(1), AppState::default());
    }

    #[test]
    fn test_slice_values_of_different_types_are_not_equal() {
        let a = SliceValue::new(Counter(1));
        let b = SliceValue::new(1u32);
        assert_ne!(a, b);
    }

    #[test]
    fn test_clone_shares_slice_values() {
        let state = state_with(5);
        let snapshot = state.clone();
        let a = state.slice_value("counter").unwrap();
        let b = snapshot.slice_value("counter").unwrap();
        assert!(a.ptr_eq(b));
    }
}
