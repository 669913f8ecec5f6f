//! End-to-end save/restore flow through an edit session
//!
//! Import validation is atomic: on failure the session's prior state is
//! untouched, on success the replacement lands as one history-worthy step.

use wirecraft_editor::EditSession;
use wirecraft_export::{export_json, import_json, ExportError};
use wirecraft_model::{Content, FieldValue, TemplateKind, Variant, Viewport};

fn session_with_two_sections() -> EditSession {
    let mut session = EditSession::new();
    session.add_section(TemplateKind::ContentCta, Variant::Dark, Content::new());

    let mut custom = Content::new();
    custom.insert("title".into(), FieldValue::text("Tour the <North> Campus & Labs"));
    session.add_section(TemplateKind::ImageContent, Variant::Light, custom);
    session.set_viewport(Viewport::Mobile);
    session
}

#[test]
fn test_export_then_import_restores_the_page() {
    let source = session_with_two_sections();
    let json = export_json(source.sections(), source.viewport()).unwrap();

    let imported = import_json(&json).unwrap();
    assert_eq!(imported.viewport, Some(Viewport::Mobile));

    let mut target = EditSession::new();
    target.replace_sections(imported.sections);
    if let Some(viewport) = imported.viewport {
        target.set_viewport(viewport);
    }

    assert_eq!(target.sections(), source.sections());
    assert_eq!(target.viewport(), Viewport::Mobile);
}

#[test]
fn test_failed_import_leaves_session_untouched() {
    let mut session = session_with_two_sections();
    let before = session.sections().to_vec();

    let payload = r#"{
        "version": "1.1",
        "sections": [
            {"id": 1, "type": "content-cta", "variant": "light", "content": {}},
            {"id": 2, "type": "nonexistent-type", "variant": "light", "content": {}}
        ]
    }"#;

    let err = import_json(payload).unwrap_err();
    match err {
        ExportError::UnknownSectionType(tag) => assert_eq!(tag, "nonexistent-type"),
        other => panic!("unexpected error: {other:?}"),
    }

    // nothing was replaced; no history entry was created
    assert_eq!(session.sections(), &before[..]);
    assert!(session.can_undo());
    session.undo();
    assert_eq!(session.sections().len(), 1);
}

#[test]
fn test_import_is_undoable() {
    let mut session = EditSession::new();
    session.add_section(TemplateKind::Statistics, Variant::Light, Content::new());
    let before = session.sections().to_vec();

    let other = session_with_two_sections();
    let json = export_json(other.sections(), other.viewport()).unwrap();
    let imported = import_json(&json).unwrap();

    session.replace_sections(imported.sections);
    assert_eq!(session.sections().len(), 2);

    assert!(session.undo());
    assert_eq!(session.sections(), &before[..]);
}

#[test]
fn test_special_characters_survive_the_file_round_trip() {
    let source = session_with_two_sections();
    let json = export_json(source.sections(), source.viewport()).unwrap();
    let imported = import_json(&json).unwrap();

    let title = imported.sections[1].text_field("title").unwrap();
    assert_eq!(title, "Tour the <North> Campus & Labs");
}
