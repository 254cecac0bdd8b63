//! Store Layer
//!
//! The item list and its single edit selection.

mod edit_selection;
mod item_store;


pub use edit_selection::EditSelection;
pub use item_store::{ItemStore, ListSnapshot};
