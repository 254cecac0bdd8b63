//! Render Interface
//!
//! What the presentation layer sees of the list: read-only rows and the
//! two swipe actions each row reveals.

use crate::domain::ItemId;
use crate::store::ItemStore;

/// Read-only view of one item as a list row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView<'a> {
    pub id: ItemId,
    pub text: &'a str,
    pub checked: bool,
    /// Whether this row is the current edit selection
    pub editing: bool,
}

/// Action behind a revealed swipe button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    Edit(ItemId),
    Delete(ItemId),
}

impl SwipeAction {
    /// Both actions for a row, in display order
    pub fn for_row(id: ItemId) -> [SwipeAction; 2] {
        [SwipeAction::Edit(id), SwipeAction::Delete(id)]
    }

    pub fn id(&self) -> ItemId {
        match self {
            SwipeAction::Edit(id) | SwipeAction::Delete(id) => *id,
        }
    }

    /// Run the action against the store. Returns whether an item matched.
    pub fn apply(self, store: &mut ItemStore) -> bool {
        match self {
            SwipeAction::Edit(id) => store.begin_edit(id),
            SwipeAction::Delete(id) => store.delete(id),
        }
    }
}

/// Callbacks driven by [`ItemStore::render`], each once per item in list order
pub trait ListRenderer {
    /// Project an item into a list row
    fn row(&mut self, row: &RowView<'_>);

    /// Project the actions revealed when the row is swiped
    fn swipe_actions(&mut self, row: &RowView<'_>, actions: [SwipeAction; 2]);
}
