//! Document outline
//!
//! Flattens sections into label/value rows for the external
//! document-generation endpoint. Rows follow the template schema order,
//! visibility-hidden fields are omitted, and values are entity-decoded so
//! the downstream document shows literal characters.

use serde::{Deserialize, Serialize};
use wirecraft_common::sanitize::decode_entities;
use wirecraft_model::{Section, SubItem, SubValue};
use wirecraft_templates::{schema_for, template_display_name, FieldDef, OutlineStyle};

/// One label/value row of a section's outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineItem {
    pub label: String,
    pub value: String,
}

/// One section, flattened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionOutline {
    /// Template display name, e.g. `Three Column Features`
    #[serde(rename = "type")]
    pub heading: String,

    pub variant: String,
    pub content: Vec<OutlineItem>,
}

/// Flatten every section for document export
pub fn outline_sections(sections: &[Section]) -> Vec<SectionOutline> {
    sections.iter().map(outline_section).collect()
}

fn outline_section(section: &Section) -> SectionOutline {
    let schema = schema_for(section.template);
    let mut content = Vec::new();

    for def in schema.defs {
        match def {
            FieldDef::Scalar(field) => {
                if !section.is_field_visible(field.name) {
                    continue;
                }
                let value = section.text_field(field.name).unwrap_or_default();
                content.push(OutlineItem {
                    label: field.label.to_string(),
                    value: decode_entities(value),
                });
            }

            FieldDef::Repeated(group) => {
                if !section.is_field_visible(group.name) {
                    continue;
                }
                let items = section
                    .content
                    .get(group.name)
                    .and_then(|v| v.as_items())
                    .unwrap_or(&[]);
                outline_group(&mut content, group, items);
            }

            FieldDef::OptionList(list) => {
                if !section.is_field_visible(list.name) {
                    continue;
                }
                let options = section
                    .content
                    .get(list.name)
                    .and_then(|v| v.as_options())
                    .unwrap_or(&[]);
                content.push(OutlineItem {
                    label: list.label.to_string(),
                    value: decode_entities(&options.join(", ")),
                });
            }
        }
    }

    SectionOutline {
        heading: template_display_name(section.template).to_string(),
        variant: section.variant.as_str().to_string(),
        content,
    }
}

fn outline_group(
    content: &mut Vec<OutlineItem>,
    group: &wirecraft_templates::RepeatedSchema,
    items: &[SubItem],
) {
    match group.outline {
        OutlineStyle::PerItemLabeled => {
            for (i, item) in items.iter().enumerate() {
                let value = group
                    .item_fields
                    .iter()
                    .map(|f| format!("{}: {}", f.label, decode_entities(item_text(item, f.name))))
                    .collect::<Vec<_>>()
                    .join("\n");
                content.push(OutlineItem {
                    label: format!("{} {}", group.item_label, i + 1),
                    value,
                });
            }
        }

        OutlineStyle::PerItemJoined => {
            for (i, item) in items.iter().enumerate() {
                let value = group
                    .item_fields
                    .iter()
                    .map(|f| decode_entities(item_text(item, f.name)))
                    .collect::<Vec<_>>()
                    .join(" - ");
                content.push(OutlineItem {
                    label: format!("{} {}", group.item_label, i + 1),
                    value,
                });
            }
        }

        OutlineStyle::CollapsedLabels => {
            let value = items
                .iter()
                .map(|item| decode_entities(item_text(item, "label")))
                .collect::<Vec<_>>()
                .join(", ");
            content.push(OutlineItem {
                label: group.item_label.to_string(),
                value,
            });
        }

        OutlineStyle::FirstItemFields => {
            if let Some(first) = items.first() {
                for f in group.item_fields {
                    content.push(OutlineItem {
                        label: format!("{} {}", group.item_label, f.label),
                        value: decode_entities(item_text(first, f.name)),
                    });
                }
            }
        }
    }
}

fn item_text<'a>(item: &'a SubItem, key: &str) -> &'a str {
    item.get(key).and_then(SubValue::as_text).unwrap_or("")
}
