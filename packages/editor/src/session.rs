//! # Edit Session
//!
//! Couples the page store with the history timeline. Every history-worthy
//! operation mutates the store, then checkpoints; undo/redo restore the
//! store from a deep copy of the selected entry.
//!
//! Viewport switching is display-only and deliberately not history-worthy.

use crate::{History, HistoryPolicy, PageStore};
use wirecraft_model::{Content, LayoutDirection, Section, TemplateKind, Variant, Viewport};

/// One user's editing session over a page
#[derive(Debug)]
pub struct EditSession {
    store: PageStore,
    history: History,
}

impl EditSession {
    pub fn new() -> Self {
        Self::with_policy(HistoryPolicy::default())
    }

    pub fn with_policy(policy: HistoryPolicy) -> Self {
        Self {
            store: PageStore::new(),
            history: History::with_policy(policy),
        }
    }

    pub fn store(&self) -> &PageStore {
        &self.store
    }

    pub fn sections(&self) -> &[Section] {
        self.store.sections()
    }

    pub fn viewport(&self) -> Viewport {
        self.store.viewport()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.store.set_viewport(viewport);
    }

    /// Record the current store state as the new "now".
    ///
    /// The mutation helpers below checkpoint automatically; callers only
    /// need this after mutating through a path of their own (e.g. a batch
    /// of captured edits applied in one step).
    pub fn checkpoint(&mut self) {
        self.history.snapshot(self.store.sections());
    }

    pub fn add_section_by_tag(&mut self, tag: &str, variant: Variant, initial: Content) -> bool {
        self.commit(|store| store.add_section_by_tag(tag, variant, initial))
    }

    pub fn add_section(&mut self, kind: TemplateKind, variant: Variant, initial: Content) -> bool {
        self.commit(|store| store.add_section(kind, variant, initial))
    }

    pub fn duplicate_section(&mut self, index: usize) -> bool {
        self.commit(|store| store.duplicate_section(index))
    }

    pub fn delete_section(&mut self, index: usize) -> bool {
        self.commit(|store| store.delete_section(index))
    }

    pub fn delete_all(&mut self) -> bool {
        self.commit(|store| store.delete_all())
    }

    pub fn reorder_section(&mut self, from: usize, to: usize) -> bool {
        self.commit(|store| store.reorder_section(from, to))
    }

    pub fn update_section_content(&mut self, index: usize, updates: Content) -> bool {
        self.commit(|store| store.update_section_content(index, updates))
    }

    pub fn set_variant(&mut self, index: usize, variant: Variant) -> bool {
        self.commit(|store| store.set_variant(index, variant))
    }

    pub fn toggle_variant(&mut self, index: usize) -> bool {
        self.commit(|store| store.toggle_variant(index))
    }

    pub fn set_layout_direction(&mut self, index: usize, direction: LayoutDirection) -> bool {
        self.commit(|store| store.set_layout_direction(index, direction))
    }

    pub fn toggle_layout_direction(&mut self, index: usize) -> bool {
        self.commit(|store| store.toggle_layout_direction(index))
    }

    pub fn set_field_visibility(&mut self, index: usize, field: &str, visible: bool) -> bool {
        self.commit(|store| store.set_field_visibility(index, field, visible))
    }

    pub fn hide_all_fields(&mut self, index: usize) -> bool {
        self.commit(|store| store.hide_all_fields(index))
    }

    pub fn show_all_fields(&mut self, index: usize) -> bool {
        self.commit(|store| store.show_all_fields(index))
    }

    /// Replace the whole section list (import path). The sections have
    /// already been validated and coerced at the import boundary.
    pub fn replace_sections(&mut self, sections: Vec<Section>) {
        tracing::debug!(count = sections.len(), "replacing section list");
        self.store.replace_sections(sections);
        self.checkpoint();
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(sections) => {
                self.store.replace_sections(sections);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(sections) => {
                self.store.replace_sections(sections);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn commit(&mut self, op: impl FnOnce(&mut PageStore) -> bool) -> bool {
        let changed = op(&mut self.store);
        if changed {
            self.checkpoint();
        }
        changed
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wirecraft_model::FieldValue;

    #[test]
    fn test_noop_operations_do_not_checkpoint() {
        let mut session = EditSession::new();
        let before = session.history().len();

        assert!(!session.delete_section(3));
        assert!(!session.add_section_by_tag("bogus", Variant::Light, Content::new()));
        assert_eq!(session.history().len(), before);
    }

    #[test]
    fn test_operations_checkpoint_once() {
        let mut session = EditSession::new();
        assert_eq!(session.history().len(), 1);

        session.add_section(TemplateKind::ContentCta, Variant::Light, Content::new());
        assert_eq!(session.history().len(), 2);

        session.toggle_variant(0);
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_edit_undo_restores_default_title() {
        let mut session = EditSession::new();
        session.add_section(TemplateKind::ContentCta, Variant::Light, Content::new());

        let mut updates = Content::new();
        updates.insert("title".into(), FieldValue::text("Hello <b>World</b>"));
        session.update_section_content(0, updates);
        assert_eq!(
            session.sections()[0].text_field("title"),
            Some("Hello <b>World</b>")
        );

        assert!(session.undo());
        assert_eq!(
            session.sections()[0].text_field("title"),
            Some("Your Future Starts Here")
        );
    }

    #[test]
    fn test_undo_then_redo_round_trip() {
        let mut session = EditSession::new();
        session.add_section(TemplateKind::ContentCta, Variant::Light, Content::new());
        session.add_section(TemplateKind::Statistics, Variant::Dark, Content::new());

        let before: Vec<Section> = session.sections().to_vec();
        assert!(session.undo());
        assert_eq!(session.sections().len(), 1);
        assert!(session.redo());
        assert_eq!(session.sections(), &before[..]);
    }

    #[test]
    fn test_viewport_change_is_not_history_worthy() {
        let mut session = EditSession::new();
        let before = session.history().len();
        session.set_viewport(Viewport::Mobile);
        assert_eq!(session.history().len(), before);
        assert_eq!(session.viewport(), Viewport::Mobile);
    }

    #[test]
    fn test_undo_back_to_empty_initial_state() {
        let mut session = EditSession::new();
        session.add_section(TemplateKind::ContentCta, Variant::Light, Content::new());
        assert!(session.undo());
        assert!(session.sections().is_empty());
        assert!(!session.can_undo());
        assert!(session.can_redo());
    }
}
