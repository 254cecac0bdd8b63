//! Edit Selection
//!
//! At most one item is open for inline editing at a time. Kept outside the
//! items so there is a single place holding that fact.

use crate::domain::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSelection {
    #[default]
    None,
    Editing(ItemId),
}

impl EditSelection {
    /// Select `id`, replacing any previous selection
    pub fn begin(&mut self, id: ItemId) {
        *self = EditSelection::Editing(id);
    }

    pub fn clear(&mut self) {
        *self = EditSelection::None;
    }

    /// Clear only if `id` is the one being edited
    pub fn clear_if(&mut self, id: ItemId) {
        if self.is(id) {
            self.clear();
        }
    }

    pub fn current(&self) -> Option<ItemId> {
        match self {
            EditSelection::None => None,
            EditSelection::Editing(id) => Some(*id),
        }
    }

    pub fn is(&self, id: ItemId) -> bool {
        self.current() == Some(id)
    }
}
