//! Comprehensive tests for complex editing sequences
//!
//! This tests:
//! - Add + edit + reorder + delete chains
//! - Undo/redo sequences across operation kinds
//! - History bounds under sustained editing
//! - Store integrity after restoration

use wirecraft_editor::{EditSession, HistoryPolicy};
use wirecraft_model::{Content, FieldValue, TemplateKind, Variant};

fn titled(text: &str) -> Content {
    let mut content = Content::new();
    content.insert("title".into(), FieldValue::text(text));
    content
}

fn titles(session: &EditSession) -> Vec<String> {
    session
        .sections()
        .iter()
        .map(|s| s.text_field("title").unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_add_edit_delete_with_undo_chain() {
    let mut session = EditSession::new();

    session.add_section(TemplateKind::ContentCta, Variant::Light, titled("A"));
    session.add_section(TemplateKind::Statistics, Variant::Light, titled("B"));
    session.delete_section(0);
    assert_eq!(titles(&session), vec!["B"]);

    // undo the delete
    assert!(session.undo());
    assert_eq!(titles(&session), vec!["A", "B"]);

    // undo the second add
    assert!(session.undo());
    assert_eq!(titles(&session), vec!["A"]);

    // back to empty
    assert!(session.undo());
    assert!(session.sections().is_empty());
    assert!(!session.can_undo());
}

#[test]
fn test_multiple_edits_with_undo_redo() {
    let mut session = EditSession::new();
    session.add_section(TemplateKind::ContentCta, Variant::Light, Content::new());

    for i in 1..=5 {
        let mut updates = Content::new();
        updates.insert("title".into(), FieldValue::text(format!("v{}", i)));
        session.update_section_content(0, updates);
    }
    assert_eq!(titles(&session), vec!["v5"]);

    // undo all edits
    for expected in ["v4", "v3", "v2", "v1"] {
        assert!(session.undo());
        assert_eq!(titles(&session), vec![expected]);
    }

    // redo all edits
    for expected in ["v2", "v3", "v4", "v5"] {
        assert!(session.redo());
        assert_eq!(titles(&session), vec![expected]);
    }
    assert!(!session.can_redo());

    // undo three, new edit clears the redo branch
    session.undo();
    session.undo();
    session.undo();
    assert!(session.can_redo());

    let mut updates = Content::new();
    updates.insert("title".into(), FieldValue::text("new branch"));
    session.update_section_content(0, updates);
    assert!(!session.can_redo());
    assert_eq!(titles(&session), vec!["new branch"]);
}

#[test]
fn test_reorder_then_undo_restores_order() {
    let mut session = EditSession::new();
    session.add_section(TemplateKind::ContentCta, Variant::Light, titled("A"));
    session.add_section(TemplateKind::Statistics, Variant::Light, titled("B"));
    session.add_section(TemplateKind::LeadForm, Variant::Light, titled("C"));

    assert!(session.reorder_section(0, 2));
    assert_eq!(titles(&session), vec!["B", "C", "A"]);

    assert!(session.undo());
    assert_eq!(titles(&session), vec!["A", "B", "C"]);
}

#[test]
fn test_duplicate_then_edit_copy_leaves_original() {
    let mut session = EditSession::new();
    session.add_section(TemplateKind::ContentCta, Variant::Light, titled("A"));
    session.add_section(TemplateKind::ContentCta, Variant::Light, titled("B"));
    session.add_section(TemplateKind::ContentCta, Variant::Light, titled("C"));

    assert!(session.duplicate_section(1));
    assert_eq!(titles(&session), vec!["A", "B", "B", "C"]);
    assert_ne!(session.sections()[1].id, session.sections()[2].id);
    assert_eq!(session.sections()[1].content, session.sections()[2].content);

    let mut updates = Content::new();
    updates.insert("title".into(), FieldValue::text("B-edited"));
    session.update_section_content(2, updates);
    assert_eq!(titles(&session), vec!["A", "B", "B-edited", "C"]);
}

#[test]
fn test_history_stays_bounded_under_sustained_editing() {
    let mut session = EditSession::new();
    session.add_section(TemplateKind::ContentCta, Variant::Light, Content::new());

    for i in 0..200 {
        let mut updates = Content::new();
        updates.insert("title".into(), FieldValue::text(format!("v{}", i)));
        session.update_section_content(0, updates);
    }

    assert!(session.history().len() <= 50);
    assert_eq!(titles(&session), vec!["v199"]);
    // the latest state is still the cursor's entry
    assert!(session.undo());
    assert_eq!(titles(&session), vec!["v198"]);
    assert!(session.redo());
    assert_eq!(titles(&session), vec!["v199"]);
}

#[test]
fn test_custom_policy_bounds() {
    let mut session = EditSession::with_policy(HistoryPolicy {
        capacity: 5,
        evict_slack: 2,
    });
    session.add_section(TemplateKind::ContentCta, Variant::Light, Content::new());

    for i in 0..30 {
        let mut updates = Content::new();
        updates.insert("title".into(), FieldValue::text(format!("v{}", i)));
        session.update_section_content(0, updates);
    }
    assert!(session.history().len() <= 5);
    assert_eq!(titles(&session), vec!["v29"]);
}

#[test]
fn test_restored_state_is_editable_without_corrupting_history() {
    let mut session = EditSession::new();
    session.add_section(TemplateKind::ContentCta, Variant::Light, titled("original"));

    let mut updates = Content::new();
    updates.insert("title".into(), FieldValue::text("edited"));
    session.update_section_content(0, updates);

    session.undo();
    assert_eq!(titles(&session), vec!["original"]);

    // editing the restored state must not bleed into the stored entries
    let mut updates = Content::new();
    updates.insert("title".into(), FieldValue::text("fork"));
    session.update_section_content(0, updates);

    session.undo();
    assert_eq!(titles(&session), vec!["original"]);
    session.redo();
    assert_eq!(titles(&session), vec!["fork"]);
}

#[test]
fn test_variant_and_visibility_travel_through_history() {
    let mut session = EditSession::new();
    session.add_section(TemplateKind::ContentCta, Variant::Light, Content::new());

    session.toggle_variant(0);
    assert_eq!(session.sections()[0].variant, Variant::Dark);

    session.set_field_visibility(0, "eyebrow", false);
    assert!(!session.sections()[0].is_field_visible("eyebrow"));

    session.undo();
    assert!(session.sections()[0].is_field_visible("eyebrow"));
    assert_eq!(session.sections()[0].variant, Variant::Dark);

    session.undo();
    assert_eq!(session.sections()[0].variant, Variant::Light);
}
