//! Declarative template schemas
//!
//! A template is a named, fixed schema plus a render rule. The schema lists
//! the template's fields in display order; the renderer and the document
//! exporter both walk it, applying escaping and visibility uniformly.

use wirecraft_model::{Content, SubItem, TemplateKind};

/// Semantic kind of an editable field.
///
/// Guidance rules are keyed by this enum rather than by a style class name,
/// so the advisory panel's dispatch is a total match instead of a string
/// lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Eyebrow,
    SectionTitle,
    SectionSubtitle,
    BodyContent,
    CtaButton,
    SubmitButton,
    StatNumber,
    StatLabel,
    ColumnTitle,
    ColumnDescription,
    ProgramTitle,
    ProgramDescription,
    FormDescription,
    FormFieldLabel,
    DropdownLabel,
    TestimonialQuote,
    TestimonialQuoteLarge,
    TestimonialName,
    TestimonialRole,
    General,
}

/// A scalar text field
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    /// Content key, e.g. `ctaText`
    pub name: &'static str,

    /// Human label used in document export, e.g. `CTA Text`
    pub label: &'static str,

    pub kind: FieldKind,

    /// Default text when the content map has no entry
    pub default: &'static str,

    /// Stored newlines render as explicit `<br>` line breaks
    pub multiline: bool,

    /// Survives "hide all fields" (the section title convention)
    pub always_visible: bool,
}

/// One editable text field inside a repeated sub-item
#[derive(Debug, Clone, Copy)]
pub struct ItemFieldSchema {
    /// Sub-item key, e.g. `description`
    pub name: &'static str,

    /// Human label, e.g. `Description`
    pub label: &'static str,

    pub kind: FieldKind,
}

/// How a repeated group flattens into the document outline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineStyle {
    /// One row per item; value lists `Label: text` lines (columns, programs)
    PerItemLabeled,

    /// One row per item; value joins the item fields with ` - ` (stats)
    PerItemJoined,

    /// One row for the whole group; value joins item labels with `, `
    /// (lead-form fields)
    CollapsedLabels,

    /// Rows for the first item's fields only, labeled per field
    /// (testimonial carousel)
    FirstItemFields,
}

/// An ordered group of small records (columns, stats, programs, ...)
#[derive(Debug, Clone, Copy)]
pub struct RepeatedSchema {
    /// Content key, e.g. `columns`
    pub name: &'static str,

    /// Singular label for outline rows, e.g. `Column`
    pub item_label: &'static str,

    pub item_fields: &'static [ItemFieldSchema],

    pub outline: OutlineStyle,

    /// Default items when the content map has no entry
    pub default_items: fn() -> Vec<SubItem>,
}

/// A flat list of plain string options (dropdown choices)
#[derive(Debug, Clone, Copy)]
pub struct OptionListSchema {
    pub name: &'static str,
    pub label: &'static str,
    pub default_options: &'static [&'static str],
}

/// One entry of a template's field list, in display order
#[derive(Debug, Clone, Copy)]
pub enum FieldDef {
    Scalar(FieldSchema),
    Repeated(RepeatedSchema),
    OptionList(OptionListSchema),
}

/// The full declarative description of one template
#[derive(Debug, Clone, Copy)]
pub struct TemplateSchema {
    pub kind: TemplateKind,

    /// Display name, e.g. `Three Column Features`
    pub name: &'static str,

    pub defs: &'static [FieldDef],
}

impl TemplateSchema {
    /// Template defaults as a content map
    pub fn default_content(&self) -> Content {
        let mut content = Content::new();
        for def in self.defs {
            match def {
                FieldDef::Scalar(field) => {
                    content.insert(
                        field.name.to_string(),
                        wirecraft_model::FieldValue::text(field.default),
                    );
                }
                FieldDef::Repeated(group) => {
                    content.insert(
                        group.name.to_string(),
                        wirecraft_model::FieldValue::Items((group.default_items)()),
                    );
                }
                FieldDef::OptionList(list) => {
                    content.insert(
                        list.name.to_string(),
                        wirecraft_model::FieldValue::Options(
                            list.default_options.iter().map(|s| s.to_string()).collect(),
                        ),
                    );
                }
            }
        }
        content
    }

    /// Scalar field schema by content key
    pub fn scalar(&self, name: &str) -> Option<&FieldSchema> {
        self.defs.iter().find_map(|def| match def {
            FieldDef::Scalar(field) if field.name == name => Some(field),
            _ => None,
        })
    }

    /// Content keys that stay visible under "hide all fields"
    pub fn always_visible_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.defs.iter().filter_map(|def| match def {
            FieldDef::Scalar(field) if field.always_visible => Some(field.name),
            _ => None,
        })
    }

    /// All content keys this template defines, in display order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.defs.iter().map(|def| match def {
            FieldDef::Scalar(field) => field.name,
            FieldDef::Repeated(group) => group.name,
            FieldDef::OptionList(list) => list.name,
        })
    }
}
