//! List Screen
//!
//! Headless version of the mobile list screen: owns the store, the
//! new-item draft, the edit draft and which row has its swipe actions open.

use list_core::{DomainResult, Item, ItemId, ItemStore, SwipeAction};
use log::debug;

use crate::view::TextRenderer;

pub struct ListScreen {
    store: ItemStore,
    /// Text typed into the "add" input
    draft: String,
    /// Text of the row being edited inline
    edit_draft: String,
    /// Row whose swipe actions are revealed
    revealed: Option<ItemId>,
}

impl ListScreen {
    pub fn new(store: ItemStore) -> Self {
        Self {
            store,
            draft: String::new(),
            edit_draft: String::new(),
            revealed: None,
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn edit_draft(&self) -> &str {
        &self.edit_draft
    }

    pub fn revealed(&self) -> Option<ItemId> {
        self.revealed
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Add the draft as a new item. On success both inputs are cleared.
    pub fn submit_draft(&mut self) -> DomainResult<Item> {
        let item = self.store.add(self.draft.as_str())?;
        self.draft.clear();
        self.edit_draft.clear();
        Ok(item)
    }

    pub fn toggle(&mut self, id: ItemId) -> bool {
        self.store.toggle_checked(id)
    }

    /// Reveal the actions of `id`, closing any other open row
    pub fn swipe(&mut self, id: ItemId) {
        if self.store.get(id).is_some() {
            self.revealed = Some(id);
        } else {
            self.revealed = None;
        }
    }

    pub fn close_swipe(&mut self) {
        self.revealed = None;
    }

    /// Handle a press on a revealed action button
    pub fn press(&mut self, action: SwipeAction) -> bool {
        self.close_swipe();
        let id = action.id();
        let matched = action.apply(&mut self.store);
        if matches!(action, SwipeAction::Edit(_)) {
            self.edit_draft = self
                .store
                .get(id)
                .map(|item| item.text.clone())
                .unwrap_or_default();
        }
        debug!("Pressed {:?} on item {}: matched={}", action, id, matched);
        matched
    }

    pub fn set_edit_draft(&mut self, text: impl Into<String>) {
        self.edit_draft = text.into();
    }

    /// Commit the edit draft to the selected item.
    ///
    /// Returns `Ok(false)` when nothing was being edited.
    pub fn submit_edit(&mut self) -> DomainResult<bool> {
        let Some(id) = self.store.editing() else {
            return Ok(false);
        };
        let matched = self.store.commit_edit(id, self.edit_draft.as_str())?;
        self.edit_draft.clear();
        Ok(matched)
    }

    /// List text followed by whichever inputs hold text
    pub fn render(&self) -> String {
        let mut renderer = TextRenderer::new(self.revealed());
        self.store.render(&mut renderer);
        let mut out = renderer.finish(self.store.remaining(), self.store.len());
        if self.store.editing().is_some() {
            out.push_str(&format!("edit> {}\n", self.edit_draft()));
        }
        if !self.draft().is_empty() {
            out.push_str(&format!("new> {}\n", self.draft()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_with(texts: &[&str]) -> (ListScreen, Vec<ItemId>) {
        let mut screen = ListScreen::new(ItemStore::new());
        let ids = texts
            .iter()
            .map(|text| {
                screen.set_draft(*text);
                screen.submit_draft().unwrap().id
            })
            .collect();
        (screen, ids)
    }

    #[test]
    fn test_submit_draft_clears_input() {
        let (screen, ids) = screen_with(&["Buy milk"]);

        assert_eq!(screen.draft(), "");
        assert_eq!(screen.store().get(ids[0]).unwrap().text, "Buy milk");
    }

    #[test]
    fn test_edit_via_swipe() {
        let (mut screen, ids) = screen_with(&["A", "B"]);

        screen.swipe(ids[0]);
        assert_eq!(screen.revealed(), Some(ids[0]));

        assert!(screen.press(SwipeAction::Edit(ids[0])));
        assert_eq!(screen.revealed(), None);
        assert_eq!(screen.edit_draft(), "A");

        screen.set_edit_draft("A-edited");
        assert!(screen.submit_edit().unwrap());

        assert_eq!(screen.store().get(ids[0]).unwrap().text, "A-edited");
        assert_eq!(screen.store().editing(), None);
        assert_eq!(screen.edit_draft(), "");
    }

    #[test]
    fn test_drafts_are_independent() {
        let (mut screen, ids) = screen_with(&["A"]);

        screen.press(SwipeAction::Edit(ids[0]));
        screen.set_edit_draft("typing an edit");
        screen.set_draft("New");

        let added = screen.submit_draft().unwrap();

        assert_eq!(added.text, "New");
        assert_eq!(screen.store().get(ids[0]).unwrap().text, "A");
        assert_eq!(screen.store().editing(), None);
    }

    #[test]
    fn test_delete_via_swipe() {
        let (mut screen, ids) = screen_with(&["A", "B"]);

        screen.swipe(ids[1]);
        assert!(screen.press(SwipeAction::Delete(ids[1])));

        assert_eq!(screen.store().len(), 1);
        assert_eq!(screen.revealed(), None);
    }

    #[test]
    fn test_submit_edit_without_selection() {
        let (mut screen, _) = screen_with(&["A"]);
        assert!(!screen.submit_edit().unwrap());
    }

    #[test]
    fn test_render_shows_edit_input() {
        let (mut screen, ids) = screen_with(&["A"]);
        screen.press(SwipeAction::Edit(ids[0]));

        assert_eq!(screen.render(), "[ ] #1 A  (editing)\n1 of 1 left\nedit> A\n");
    }

    #[test]
    fn test_swipe_unknown_row_closes() {
        let (mut screen, ids) = screen_with(&["A"]);
        screen.swipe(ids[0]);

        screen.swipe(ItemId::from_raw(999));

        assert_eq!(screen.revealed(), None);
    }
}
