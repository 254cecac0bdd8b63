//! Text Rendering
//!
//! Projects list rows into plain text lines.

use std::fmt::Write;

use list_core::{ItemId, ListRenderer, RowView, SwipeAction};

pub struct TextRenderer {
    revealed: Option<ItemId>,
    out: String,
}

impl TextRenderer {
    pub fn new(revealed: Option<ItemId>) -> Self {
        Self {
            revealed,
            out: String::new(),
        }
    }

    /// Append the footer and return the rendered text
    pub fn finish(mut self, remaining: usize, total: usize) -> String {
        if total == 0 {
            self.out.push_str("(no items)\n");
        }
        let _ = writeln!(self.out, "{} of {} left", remaining, total);
        self.out
    }
}

impl ListRenderer for TextRenderer {
    fn row(&mut self, row: &RowView<'_>) {
        let mark = if row.checked { "x" } else { " " };
        let _ = write!(self.out, "[{}] #{} {}", mark, row.id, row.text);
        if row.editing {
            self.out.push_str("  (editing)");
        }
        self.out.push('\n');
    }

    fn swipe_actions(&mut self, row: &RowView<'_>, actions: [SwipeAction; 2]) {
        if self.revealed != Some(row.id) {
            return;
        }
        let labels: Vec<&str> = actions
            .iter()
            .map(|action| match action {
                SwipeAction::Edit(_) => "[edit]",
                SwipeAction::Delete(_) => "[delete]",
            })
            .collect();
        let _ = writeln!(self.out, "      {}", labels.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use list_core::ItemStore;

    #[test]
    fn test_render_rows_and_revealed_actions() {
        let mut store = ItemStore::new();
        let a = store.add("Buy milk").unwrap();
        let b = store.add("Walk dog").unwrap();
        store.toggle_checked(a.id);
        store.begin_edit(b.id);

        let mut renderer = TextRenderer::new(Some(a.id));
        store.render(&mut renderer);
        let text = renderer.finish(store.remaining(), store.len());

        assert_eq!(
            text,
            "[x] #1 Buy milk\n      [edit] [delete]\n[ ] #2 Walk dog  (editing)\n1 of 2 left\n"
        );
    }

    #[test]
    fn test_render_empty() {
        let store = ItemStore::new();
        let mut renderer = TextRenderer::new(None);
        store.render(&mut renderer);
        assert_eq!(renderer.finish(0, 0), "(no items)\n0 of 0 left\n");
    }
}
