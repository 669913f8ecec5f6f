//! JSON file export and validated import

use crate::ExportError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use wirecraft_model::{
    Content, FieldValue, LayoutDirection, Section, SectionId, TemplateKind, Variant, Viewport,
};

pub const FORMAT_VERSION: &str = "1.1";

/// The persisted file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireframeFile {
    pub version: String,

    /// ISO-8601 creation timestamp
    pub created: String,

    pub viewport: Viewport,
    pub sections: Vec<Section>,
}

/// Result of a validated import
#[derive(Debug, Clone)]
pub struct WireframeImport {
    pub sections: Vec<Section>,

    /// Viewport recorded in the file, when present and recognizable
    pub viewport: Option<Viewport>,
}

/// Serialize the current page as a pretty-printed export file
pub fn export_json(sections: &[Section], viewport: Viewport) -> Result<String, ExportError> {
    let file = WireframeFile {
        version: FORMAT_VERSION.to_string(),
        created: chrono::Utc::now().to_rfc3339(),
        viewport,
        sections: sections.to_vec(),
    };
    tracing::info!(sections = file.sections.len(), "exporting wireframe JSON");
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Dated download name for an export, e.g. `wireframe-2026-08-06.json`
pub fn export_file_name() -> String {
    format!("wireframe-{}.json", chrono::Utc::now().format("%Y-%m-%d"))
}

/// Parse and validate an import payload.
///
/// `sections` must be an array and every element's `type` must name a
/// catalog template — anything else fails the whole import. Everything
/// softer is coerced: unknown `variant` becomes the default, malformed
/// `content` becomes an empty map, unusable entries inside `content` or
/// `visibility` are dropped.
pub fn import_json(input: &str) -> Result<WireframeImport, ExportError> {
    let root: Value = serde_json::from_str(input)?;

    let raw_sections = root
        .get("sections")
        .ok_or_else(|| ExportError::InvalidFormat("missing sections".to_string()))?
        .as_array()
        .ok_or_else(|| ExportError::InvalidFormat("sections is not an array".to_string()))?;

    let mut sections = Vec::with_capacity(raw_sections.len());
    for raw in raw_sections {
        sections.push(import_section(raw)?);
    }

    let viewport = root
        .get("viewport")
        .and_then(Value::as_str)
        .and_then(Viewport::from_tag);

    tracing::info!(sections = sections.len(), "imported wireframe JSON");
    Ok(WireframeImport { sections, viewport })
}

fn import_section(raw: &Value) -> Result<Section, ExportError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| ExportError::InvalidFormat("section is not an object".to_string()))?;

    let tag = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| ExportError::InvalidFormat("section is missing a type".to_string()))?;

    let template = TemplateKind::from_tag(tag)
        .ok_or_else(|| ExportError::UnknownSectionType(tag.to_string()))?;

    let variant = obj
        .get("variant")
        .and_then(Value::as_str)
        .and_then(Variant::from_tag)
        .unwrap_or_default();

    let id = obj
        .get("id")
        .and_then(Value::as_u64)
        .map(SectionId::from)
        .unwrap_or_else(SectionId::generate);

    let content = obj.get("content").map(coerce_content).unwrap_or_default();

    let visibility = obj
        .get("visibility")
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(k, v)| v.as_bool().map(|b| (k.clone(), b)))
                .collect::<BTreeMap<String, bool>>()
        })
        .unwrap_or_default();

    let layout = obj
        .get("layoutDirection")
        .and_then(Value::as_str)
        .and_then(|tag| match tag {
            "normal" => Some(LayoutDirection::Normal),
            "reversed" => Some(LayoutDirection::Reversed),
            _ => None,
        })
        .filter(|_| template.supports_mirrored_layout());

    Ok(Section {
        id,
        template,
        variant,
        content,
        visibility,
        layout,
    })
}

/// Keep every content entry that fits the value model; drop the rest
fn coerce_content(raw: &Value) -> Content {
    let Some(map) = raw.as_object() else {
        return Content::new();
    };

    map.iter()
        .filter_map(|(key, value)| {
            serde_json::from_value::<FieldValue>(value.clone())
                .ok()
                .map(|parsed| (key.clone(), parsed))
        })
        .collect()
}
