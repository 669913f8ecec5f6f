//! # Page Store
//!
//! The canonical, mutable list of sections plus the preview viewport. Every
//! other component either reads it synchronously or requests mutation
//! through the operations below; nothing else holds mutable access.
//!
//! Index-based operations originating from the view can race a concurrent
//! delete, so an out-of-range index is a silent no-op (`false`), never a
//! panic or an error.

use wirecraft_model::{Content, LayoutDirection, Section, TemplateKind, Variant, Viewport};
use wirecraft_templates::schema_for;

/// Canonical application state: ordered sections + viewport
#[derive(Debug, Clone, Default)]
pub struct PageStore {
    sections: Vec<Section>,
    viewport: Viewport,
}

impl PageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Display-only; never history-worthy
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Append a section built from the template's defaults merged with
    /// `initial`. Returns `false` (no-op) when the tag is not in the catalog.
    pub fn add_section_by_tag(&mut self, tag: &str, variant: Variant, initial: Content) -> bool {
        match TemplateKind::from_tag(tag) {
            Some(kind) => self.add_section(kind, variant, initial),
            None => false,
        }
    }

    pub fn add_section(&mut self, kind: TemplateKind, variant: Variant, initial: Content) -> bool {
        let mut content = schema_for(kind).default_content();
        content.extend(initial);
        self.sections.push(Section::new(kind, variant, content));
        true
    }

    /// Insert a deep copy with a fresh id immediately after `index`
    pub fn duplicate_section(&mut self, index: usize) -> bool {
        if index >= self.sections.len() {
            return false;
        }
        let copy = self.sections[index].duplicated();
        self.sections.insert(index + 1, copy);
        true
    }

    pub fn delete_section(&mut self, index: usize) -> bool {
        if index >= self.sections.len() {
            return false;
        }
        self.sections.remove(index);
        true
    }

    pub fn delete_all(&mut self) -> bool {
        if self.sections.is_empty() {
            return false;
        }
        self.sections.clear();
        true
    }

    /// Move one section to a new position, preserving the relative order of
    /// all others (a move, not a swap)
    pub fn reorder_section(&mut self, from: usize, to: usize) -> bool {
        let len = self.sections.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let section = self.sections.remove(from);
        self.sections.insert(to, section);
        true
    }

    /// Merge captured field values into a section's content.
    ///
    /// Values must already be plain text; the capture boundary is the only
    /// producer of these updates.
    pub fn update_section_content(&mut self, index: usize, updates: Content) -> bool {
        match self.sections.get_mut(index) {
            Some(section) => {
                section.content.extend(updates);
                true
            }
            None => false,
        }
    }

    pub fn set_variant(&mut self, index: usize, variant: Variant) -> bool {
        match self.sections.get_mut(index) {
            Some(section) => {
                section.variant = variant;
                true
            }
            None => false,
        }
    }

    pub fn toggle_variant(&mut self, index: usize) -> bool {
        match self.sections.get_mut(index) {
            Some(section) => {
                section.variant = section.variant.toggled();
                true
            }
            None => false,
        }
    }

    /// No-op unless the section's template supports a mirrored layout
    pub fn set_layout_direction(&mut self, index: usize, direction: LayoutDirection) -> bool {
        match self.sections.get_mut(index) {
            Some(section) if section.template.supports_mirrored_layout() => {
                section.layout = Some(direction);
                true
            }
            _ => false,
        }
    }

    pub fn toggle_layout_direction(&mut self, index: usize) -> bool {
        match self.sections.get_mut(index) {
            Some(section) if section.template.supports_mirrored_layout() => {
                section.layout = Some(section.layout.unwrap_or_default().toggled());
                true
            }
            _ => false,
        }
    }

    pub fn set_field_visibility(&mut self, index: usize, field: &str, visible: bool) -> bool {
        match self.sections.get_mut(index) {
            Some(section) => {
                if visible {
                    section.visibility.remove(field);
                } else {
                    section.visibility.insert(field.to_string(), false);
                }
                true
            }
            None => false,
        }
    }

    /// Hide every field the template defines except those its schema marks
    /// always-visible (the section title)
    pub fn hide_all_fields(&mut self, index: usize) -> bool {
        let Some(section) = self.sections.get_mut(index) else {
            return false;
        };
        let schema = schema_for(section.template);
        let keep: Vec<&str> = schema.always_visible_fields().collect();
        for name in schema.field_names() {
            if keep.contains(&name) {
                section.visibility.remove(name);
            } else {
                section.visibility.insert(name.to_string(), false);
            }
        }
        true
    }

    pub fn show_all_fields(&mut self, index: usize) -> bool {
        match self.sections.get_mut(index) {
            Some(section) => {
                section.visibility.clear();
                true
            }
            None => false,
        }
    }

    /// Wholesale replacement, used by import and by undo/redo restoration.
    ///
    /// Incoming sections are validated at the import boundary; replacement
    /// itself is atomic by construction.
    pub fn replace_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }
}
