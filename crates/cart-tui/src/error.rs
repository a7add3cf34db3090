//! Store errors

use thiserror::Error;

/// Failures surfaced by [`crate::store::Store`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `dispatch` was called while another dispatch was still running
    #[error("reentrant dispatch of '{action_type}' while another action is being processed")]
    ReentrantDispatch { action_type: &'static str },

    /// Two slices were registered under the same key
    #[error("slice '{0}' is registered more than once")]
    DuplicateSlice(&'static str),

    /// A slice reducer panicked; nothing was committed
    #[error("reducer for slice '{slice}' panicked: {message}")]
    ReducerPanicked {
        slice: &'static str,
        message: String,
    },

    /// The dispatched action was applied, but a follow-up queued by middleware failed
    #[error("follow-up '{action_type}' failed after its parent action was applied: {source}")]
    FollowUpFailed {
        action_type: &'static str,
        source: Box<StoreError>,
    },
}
