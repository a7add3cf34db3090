pub mod app_reducer;
pub mod cart_reducer;

pub use cart_reducer::{CartReducer, CartState, CART_SLICE};
