//! Item Store
//!
//! Sole owner of the ordered item list and the edit selection.
//! Mutations given an unknown id return normally and change nothing;
//! the returned `bool` tells the caller whether an item matched.

use log::{debug, trace};
use serde::Serialize;

use super::edit_selection::EditSelection;
use crate::config::{StoreConfig, TextPolicy};
use crate::domain::{DomainResult, IdGenerator, Item, ItemId};
use crate::render::{ListRenderer, RowView, SwipeAction};

/// Serializable copy of the store state for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSnapshot {
    pub items: Vec<Item>,
    pub editing: Option<ItemId>,
}

#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    editing: EditSelection,
    ids: IdGenerator,
    policy: TextPolicy,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: TextPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Build a store and append the configured seed texts in order
    pub fn from_config(config: &StoreConfig) -> DomainResult<Self> {
        let mut store = Self::with_policy(config.text_policy);
        for text in &config.seed {
            store.add(text.as_str())?;
        }
        debug!("Store seeded with {} items", store.len());
        Ok(store)
    }

    // ========================
    // Mutations
    // ========================

    /// Append a new unchecked item and leave edit mode
    pub fn add(&mut self, text: impl Into<String>) -> DomainResult<Item> {
        let text = text.into();
        self.policy.check(&text)?;

        let item = Item::new(self.ids.next_id()?, text);
        self.items.push(item.clone());
        self.editing.clear();
        debug!("Added item {}", item.id);
        Ok(item)
    }

    /// Remove the item with `id`, keeping the order of the rest
    pub fn delete(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.editing.clear_if(id);

        let removed = self.items.len() != before;
        trace!("Delete item {}: removed={}", id, removed);
        removed
    }

    pub fn toggle_checked(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                trace!("Toggled item {} to checked={}", id, item.checked);
                true
            }
            None => false,
        }
    }

    /// Open `id` for editing. An unknown id leaves nothing selected.
    pub fn begin_edit(&mut self, id: ItemId) -> bool {
        if self.get(id).is_some() {
            self.editing.begin(id);
            true
        } else {
            self.editing.clear();
            false
        }
    }

    /// Replace the text of `id` and leave edit mode, whether or not `id` matched.
    ///
    /// Only a text policy rejection fails, and then nothing changes: the text
    /// stays as it was and the item remains selected, so edit mode stays open.
    pub fn commit_edit(&mut self, id: ItemId, text: impl Into<String>) -> DomainResult<bool> {
        let text = text.into();
        self.policy.check(&text)?;

        let matched = match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.text = text;
                true
            }
            None => false,
        };
        self.editing.clear();
        debug!("Committed edit for item {}: matched={}", id, matched);
        Ok(matched)
    }

    // ========================
    // Queries
    // ========================

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Id of the item open for editing, if any
    pub fn editing(&self) -> Option<ItemId> {
        self.editing.current()
    }

    pub fn selection(&self) -> EditSelection {
        self.editing
    }

    /// Number of items not yet checked
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.checked).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        self.items.iter().map(move |item| RowView {
            id: item.id,
            text: &item.text,
            checked: item.checked,
            editing: self.editing.is(item.id),
        })
    }

    /// Drive `renderer` over every row, then its swipe actions
    pub fn render<R: ListRenderer + ?Sized>(&self, renderer: &mut R) {
        for row in self.rows() {
            renderer.row(&row);
            renderer.swipe_actions(&row, SwipeAction::for_row(row.id));
        }
    }

    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            items: self.items.clone(),
            editing: self.editing(),
        }
    }
}
